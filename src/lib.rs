//! Evil Hangman
//!
//! Hangman where the house never picks a word. It keeps every word consistent with the
//! guesses so far and, on each letter, keeps the family of words that helps the player
//! least.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::game::{Game, GameConfig, GuessOutcome};
//! use evil_hangman::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_lines(["foo", "off", "moo", "ore", "cat", "dog"]);
//! let mut game = Game::new(&dictionary, &GameConfig::new(3, 10).with_seed(1)).unwrap();
//!
//! // "off" and "ore" reveal less than "foo" and "moo"
//! let turn = game.guess("o").unwrap();
//! assert_eq!(turn.outcome, GuessOutcome::Hit);
//! assert_eq!(turn.candidates_after, 2);
//! assert_eq!(game.render_state().masked, "o__");
//! ```

// Core domain types
pub mod core;

// Adversarial partitioning
pub mod partition;

// Session state machine
pub mod game;

// Trace hooks
pub mod observer;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
