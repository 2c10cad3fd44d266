//! Letter occurrence patterns
//!
//! A pattern records where a guessed letter sits inside a word. It is stored as a bit
//! mask where bit `i` is set when the letter occupies position `i`. The empty pattern
//! means the letter does not occur at all.

use super::{Letter, Word};
use std::fmt;

/// Positions at which a letter occurs in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern(u64);

impl Pattern {
    /// Letter absent from the word
    pub const EMPTY: Self = Self(0);

    /// Number of positions a pattern can describe
    pub const MAX_POSITIONS: usize = u64::BITS as usize;

    /// Create a pattern from a raw position mask
    #[inline]
    #[must_use]
    pub const fn from_mask(mask: u64) -> Self {
        Self(mask)
    }

    /// Create a pattern from a list of zero-based positions
    ///
    /// # Panics
    /// Panics in debug mode if a position is >= [`Pattern::MAX_POSITIONS`]
    #[must_use]
    pub fn from_positions(positions: &[usize]) -> Self {
        let mut mask = 0u64;
        for &position in positions {
            debug_assert!(position < Self::MAX_POSITIONS, "position out of range");
            mask |= 1u64 << position;
        }
        Self(mask)
    }

    /// Calculate the pattern of `letter` within `word`
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Pattern, Word};
    ///
    /// let word = Word::new("moo").unwrap();
    /// let pattern = Pattern::calculate(&word, Letter::new('o').unwrap());
    ///
    /// assert_eq!(pattern, Pattern::from_positions(&[1, 2]));
    /// assert_eq!(pattern.occurrences(), 2);
    /// assert_eq!(pattern.to_string(), "(1, 2)");
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate(word: &Word, letter: Letter) -> Self {
        word.pattern_of(letter)
    }

    /// True when the letter does not occur
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of positions the letter occupies
    #[inline]
    #[must_use]
    pub const fn occurrences(self) -> u32 {
        self.0.count_ones()
    }

    /// Check whether the letter occupies `position`
    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < Self::MAX_POSITIONS && self.0 & (1u64 << position) != 0
    }

    /// Occupied positions in ascending order
    pub fn positions(self) -> impl Iterator<Item = usize> {
        let mut remaining = self.0;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let position = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            Some(position)
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, position) in self.positions().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{position}")?;
        }
        write!(f, ")")
    }
}
