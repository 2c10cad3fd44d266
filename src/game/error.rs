//! Rejected guesses

use super::Status;
use crate::core::Letter;
use std::fmt;

/// A guess was refused; the session is unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was not exactly one letter
    Malformed(String),
    /// The letter was already guessed this game
    AlreadyGuessed(Letter),
    /// The game has already been won or lost
    GameOver(Status),
}

impl GuessError {
    /// True for malformed or repeated guesses, the cases where the player should retry
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::AlreadyGuessed(_))
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "'{input}' is not a single letter, guess one letter at a time")
            }
            Self::AlreadyGuessed(letter) => write!(f, "You already guessed '{letter}'"),
            Self::GameOver(Status::Won) => write!(f, "The game is over, you already won"),
            Self::GameOver(_) => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_guess_classification() {
        assert!(GuessError::Malformed("ab".into()).is_invalid_guess());
        assert!(GuessError::AlreadyGuessed(Letter::new('a').unwrap()).is_invalid_guess());
        assert!(!GuessError::GameOver(Status::Lost).is_invalid_guess());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            GuessError::AlreadyGuessed(Letter::new('e').unwrap()).to_string(),
            "You already guessed 'e'"
        );
        assert_eq!(GuessError::GameOver(Status::Lost).to_string(), "The game is over");
    }
}
