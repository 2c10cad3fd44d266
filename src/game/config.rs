//! Session configuration
//!
//! Word length and starting guess count, validated against a dictionary before play.

use crate::wordlists::Dictionary;
use std::fmt;

/// Guesses allowed when the player doesn't pick a number
pub const DEFAULT_GUESSES: u32 = 10;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of letters in the hidden word
    pub word_length: usize,
    /// Wrong guesses allowed before the player loses
    pub guesses: u32,
    /// Seed for the tie-break RNG; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, guesses: u32) -> Self {
        Self {
            word_length,
            guesses,
            seed: None,
        }
    }

    /// Use a fixed RNG seed so the game is reproducible
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings against a dictionary
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the guess count is zero, the dictionary is empty, the
    /// length lies outside the dictionary's range, or no word has that length.
    pub fn validate(&self, dictionary: &Dictionary) -> Result<(), ConfigError> {
        if self.guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }

        let range = dictionary
            .length_range()
            .ok_or(ConfigError::EmptyDictionary)?;
        if !range.contains(&self.word_length) {
            return Err(ConfigError::LengthOutOfRange {
                requested: self.word_length,
                min: *range.start(),
                max: *range.end(),
            });
        }

        if dictionary.count_of_length(self.word_length) == 0 {
            return Err(ConfigError::NoWordsAvailable(self.word_length));
        }

        Ok(())
    }
}

/// A session could not be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroGuesses,
    EmptyDictionary,
    LengthOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },
    NoWordsAvailable(usize),
    LengthMismatch {
        expected: usize,
        word: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGuesses => write!(f, "You need at least one guess"),
            Self::EmptyDictionary => write!(f, "The word list contains no playable words"),
            Self::LengthOutOfRange {
                requested,
                min,
                max,
            } => write!(
                f,
                "Word length must be between {min} and {max}, got {requested}"
            ),
            Self::NoWordsAvailable(length) => {
                write!(f, "No words with {length} letters are available")
            }
            Self::LengthMismatch { expected, word } => write!(
                f,
                "Word '{word}' does not have the expected {expected} letters"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["ox", "cat", "dog", "bird", "horse", "giraffe"])
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(GameConfig::new(3, 5).validate(&dictionary()), Ok(()));
        assert_eq!(GameConfig::new(7, 1).validate(&dictionary()), Ok(()));
    }

    #[test]
    fn zero_guesses_rejected() {
        assert_eq!(
            GameConfig::new(3, 0).validate(&dictionary()),
            Err(ConfigError::ZeroGuesses)
        );
    }

    #[test]
    fn length_out_of_range_rejected() {
        assert_eq!(
            GameConfig::new(12, 5).validate(&dictionary()),
            Err(ConfigError::LengthOutOfRange {
                requested: 12,
                min: 2,
                max: 7
            })
        );
        assert!(matches!(
            GameConfig::new(0, 5).validate(&dictionary()),
            Err(ConfigError::LengthOutOfRange { requested: 0, .. })
        ));
    }

    #[test]
    fn gap_in_lengths_reports_no_words() {
        assert_eq!(
            GameConfig::new(6, 5).validate(&dictionary()),
            Err(ConfigError::NoWordsAvailable(6))
        );
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert_eq!(
            GameConfig::new(5, 5).validate(&Dictionary::default()),
            Err(ConfigError::EmptyDictionary)
        );
    }

    #[test]
    fn seed_is_recorded() {
        let config = GameConfig::new(5, DEFAULT_GUESSES).with_seed(99);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.guesses, 10);
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            ConfigError::NoWordsAvailable(9).to_string(),
            "No words with 9 letters are available"
        );
        assert_eq!(
            ConfigError::LengthOutOfRange {
                requested: 1,
                min: 2,
                max: 7
            }
            .to_string(),
            "Word length must be between 2 and 7, got 1"
        );
    }
}
