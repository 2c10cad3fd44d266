//! Word lists for evil hangman
//!
//! Provides the embedded common-word list, file loading and the validated [`Dictionary`].

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{COMMON, COMMON_COUNT};
