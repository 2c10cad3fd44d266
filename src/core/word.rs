//! Hangman word representation
//!
//! A Word stores a lowercase word along with per-letter position masks for pattern lookup.

use super::{Letter, Pattern};
use std::fmt;

/// A lowercase alphabetic word with letter position tracking
///
/// Each of the 26 letters maps to a bit mask of the positions it occupies, so the
/// occurrence pattern of any letter is a single array lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    masks: [u64; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(
                    f,
                    "Word must be at most {} letters, got {len}",
                    Word::MAX_LEN
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Longest supported word, bounded by the width of a [`Pattern`]
    pub const MAX_LEN: usize = Pattern::MAX_POSITIONS;

    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty or longer than [`Word::MAX_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Hangman").unwrap();
    /// assert_eq!(word.text(), "hangman");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_lowercase();

        if text.len() > Self::MAX_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut masks = [0u64; 26];
        for (i, b) in text.bytes().enumerate() {
            masks[usize::from(b - b'a')] |= 1u64 << i;
        }

        Ok(Self { text, masks })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.masks[letter.index()] != 0
    }

    /// Get the occurrence pattern of a letter in this word
    ///
    /// Returns the empty pattern if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn pattern_of(&self, letter: Letter) -> Pattern {
        Pattern::from_mask(self.masks[letter.index()])
    }

    /// Distinct letters of the word, in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL
            .into_iter()
            .filter(|&letter| self.has_letter(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
