//! Validated dictionary of playable words

use crate::core::Word;
use log::debug;
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Playable words with their observed length range
///
/// Words are lowercased and de-duplicated; the first occurrence keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// Lines are trimmed; blank lines, `#` comments and anything that is not a plain
    /// alphabetic word are skipped.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["Apple", "apple", "# fruit", "", "kiwi", "o'clock"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.length_range(), Some(4..=5));
    /// ```
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if seen.insert(word.text().to_string()) {
                        words.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} entries that are not plain alphabetic words");
        }

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Shortest and longest word lengths, or `None` for an empty dictionary
    #[must_use]
    pub fn length_range(&self) -> Option<RangeInclusive<usize>> {
        let min = self.words.iter().map(Word::len).min()?;
        let max = self.words.iter().map(Word::len).max()?;
        Some(min..=max)
    }

    /// Default word length to offer: five letters, or the longest available if shorter
    #[must_use]
    pub fn suggested_length(&self) -> Option<usize> {
        self.length_range().map(|range| (*range.end()).min(5))
    }

    /// Words of exactly `length` letters, in dictionary order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<Word> {
        self.words
            .iter()
            .filter(|word| word.len() == length)
            .cloned()
            .collect()
    }

    /// Count of words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.words.iter().filter(|word| word.len() == length).count()
    }
}
