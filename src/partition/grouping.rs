//! Family grouping for a guessed letter
//!
//! Splits the candidate words into families that share the same occurrence pattern.

use crate::core::{Letter, Pattern, Word};
use rustc_hash::FxHashMap;

/// Words that show the same occurrence pattern for a letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub pattern: Pattern,
    pub words: Vec<Word>,
}

impl Family {
    /// Number of words in the family
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

    /// How many times the letter shows up in every word of the family
    #[inline]
    #[must_use]
    pub const fn occurrences(&self) -> u32 {
        self.pattern.occurrences()
    }
}

/// Group words by the pattern `letter` produces in them
///
/// Families come back in the order their first word appeared, and words keep their
/// relative order inside each family. Every input word lands in exactly one family.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Word};
/// use evil_hangman::partition::group_by_pattern;
///
/// let words: Vec<Word> = ["foo", "off", "moo", "ore", "cat", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = group_by_pattern(&words, Letter::new('o').unwrap());
/// let sizes: Vec<usize> = families.iter().map(|f| f.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1, 1]);
/// ```
#[must_use]
pub fn group_by_pattern(words: &[Word], letter: Letter) -> Vec<Family> {
    let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut families: Vec<Family> = Vec::new();

    for word in words {
        let pattern = Pattern::calculate(word, letter);
        let slot = *index.entry(pattern).or_insert_with(|| {
            families.push(Family {
                pattern,
                words: Vec::new(),
            });
            families.len() - 1
        });
        families[slot].words.push(word.clone());
    }

    families
}
