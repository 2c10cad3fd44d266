//! The set of words still consistent with every guess

use super::{Letter, Pattern, Word};
use std::collections::HashSet;

/// Non-empty, ordered collection of candidate words
///
/// Order is the order words were first seen in the dictionary. The first word is the
/// representative used to draw the board and to name the answer at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Wrap a list of words, returning `None` if it is empty
    ///
    /// Repeated words are dropped; the first occurrence keeps its position.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        let mut seen = HashSet::new();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// The word used to render the board
    #[inline]
    #[must_use]
    pub fn representative(&self) -> &Word {
        &self.words[0]
    }

    /// Number of candidates (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by all candidates
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.representative().len()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Check that every candidate shows `pattern` for `letter`
    #[must_use]
    pub fn all_match(&self, letter: Letter, pattern: Pattern) -> bool {
        self.words
            .iter()
            .all(|word| Pattern::calculate(word, letter) == pattern)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
