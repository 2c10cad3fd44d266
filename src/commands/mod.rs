//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{PlayOptions, PlaySummary, run_play};
pub use simulate::{
    GameRecord, SimulationConfig, SimulationResult, play_automatically, run_simulation,
};
