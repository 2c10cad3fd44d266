//! Turn-based game engine
//!
//! A [`Game`] owns the candidate set and applies one guess at a time. The house never
//! fixes a word; the partitioner decides after each letter which words survive.

mod config;
mod engine;
mod error;

pub use config::{ConfigError, DEFAULT_GUESSES, GameConfig};
pub use engine::Game;
pub use error::GuessError;

use crate::core::{Letter, Pattern};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    /// True once the game has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Whether a guessed letter appeared in the surviving words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

/// Summary of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: Letter,
    /// Positions revealed for the letter; empty on a miss
    pub pattern: Pattern,
    pub outcome: GuessOutcome,
    /// Status after the guess was applied
    pub status: Status,
    pub remaining_guesses: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Families the candidates split into for this letter
    pub families: usize,
}

impl Turn {
    #[inline]
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.outcome == GuessOutcome::Hit
    }
}

/// What the player sees between turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Word with unguessed letters shown as `_`
    pub masked: String,
    /// Letters guessed so far, alphabetical
    pub guessed: Vec<char>,
}
