//! Core domain types for evil hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and cheap to test.

mod candidates;
mod letter;
mod pattern;
mod word;

pub use candidates::CandidateSet;
pub use letter::Letter;
pub use pattern::Pattern;
pub use word::{Word, WordError};
