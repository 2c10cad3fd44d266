//! Single-letter guesses

use std::fmt;

/// One lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every letter from `a` to `z`, in order
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            all[i] = Self(b'a' + i as u8);
            i += 1;
        }
        all
    };

    /// Create a letter from a character, normalising case
    ///
    /// Returns `None` for anything that isn't an ASCII letter.
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Parse a guess typed by the player
    ///
    /// The input must be exactly one ASCII letter; surrounding whitespace is not stripped.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse("E").unwrap().as_char(), 'e');
    /// assert!(Letter::parse("ea").is_none());
    /// assert!(Letter::parse("7").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => None,
        }
    }

    /// The letter as a lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet index (`a` = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
