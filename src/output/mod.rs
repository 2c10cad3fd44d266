//! Terminal output formatting
//!
//! Display utilities for game rounds, banners and simulation reports.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_hints, print_round, print_simulation_result, print_turn,
    print_welcome,
};
