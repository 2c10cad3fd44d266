//! Tracing hooks for the partitioner and the game engine
//!
//! Both call an [`Observer`] at each step. The default [`NoopObserver`] ignores every
//! event; [`LogObserver`] forwards them to the `log` facade so `--debug` (or `RUST_LOG`)
//! shows how the house narrows the word list.

use crate::core::Letter;
use crate::game::Turn;
use crate::partition::Family;
use log::{Level, debug, log_enabled, trace};

/// Receives a callback for every partitioning step and every accepted turn
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Candidates were split into families for `letter`
    fn families_grouped(&self, _letter: Letter, _families: &[Family]) {}

    /// `chosen` was kept; `tied` families were equally adversarial
    fn family_chosen(&self, _letter: Letter, _chosen: &Family, _tied: usize) {}

    /// A guess was applied to the session
    fn turn_played(&self, _turn: &Turn) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that writes events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn families_grouped(&self, letter: Letter, families: &[Family]) {
        if log_enabled!(Level::Debug) {
            let summary: Vec<String> = families
                .iter()
                .map(|family| format!("{}x{}", family.pattern, family.len()))
                .collect();
            debug!("families for '{letter}': {}", summary.join(" "));
        }

        if log_enabled!(Level::Trace) {
            for family in families {
                let words: Vec<&str> = family.words.iter().map(|w| w.text()).collect();
                trace!("  {} -> [{}]", family.pattern, words.join(" "));
            }
        }
    }

    fn family_chosen(&self, letter: Letter, chosen: &Family, tied: usize) {
        debug!(
            "kept family {} for '{letter}' ({} words, {tied} tied)",
            chosen.pattern,
            chosen.len()
        );
    }

    fn turn_played(&self, turn: &Turn) {
        debug!(
            "turn '{}': {:?}, {} -> {} candidates in {} families, {} guesses left, {:?}",
            turn.letter,
            turn.outcome,
            turn.candidates_before,
            turn.candidates_after,
            turn.families,
            turn.remaining_guesses,
            turn.status
        );
    }
}
