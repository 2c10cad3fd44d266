//! Batch simulation against an automatic player
//!
//! Plays many independent games in parallel. The player always guesses the unguessed
//! letter that appears in the most remaining candidates.

use crate::core::Letter;
use crate::game::{Game, GameConfig, GuessError, Status};
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: usize,
    pub word_length: usize,
    pub guesses: u32,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, word_length: usize, guesses: u32, seed: u64) -> Self {
        Self {
            games,
            word_length,
            guesses,
            seed,
        }
    }

    fn game_config(&self, index: usize) -> GameConfig {
        GameConfig::new(self.word_length, self.guesses)
            .with_seed(self.seed.wrapping_add(index as u64))
    }
}

/// Result from playing a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub letters_guessed: usize,
    pub word: String,
}

/// Statistics from a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Letters guessed per game, mapped to how many games used that many
    pub letters_used: BTreeMap<usize, usize>,
    pub average_letters: f64,
    /// Final words, most frequent first
    pub final_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.games` games in parallel and collect statistics
///
/// # Errors
///
/// Returns an error if the configuration does not fit the dictionary or the progress bar
/// template is rejected.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimulationResult> {
    config.game_config(0).validate(dictionary)?;
    let words = dictionary.words_of_length(config.word_length);
    debug!(
        "simulating {} games over {} words of length {}",
        config.games,
        words.len(),
        config.word_length
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let records = (0..config.games)
        .into_par_iter()
        .map(|index| -> Result<GameRecord> {
            let mut game = Game::from_words(words.clone(), &config.game_config(index))?;
            let record = play_automatically(&mut game)?;
            pb.inc(1);
            Ok(record)
        })
        .collect::<Result<Vec<GameRecord>>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let wins = records.iter().filter(|r| r.won).count();
    let mut letters_used = BTreeMap::new();
    let mut word_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for record in &records {
        *letters_used.entry(record.letters_guessed).or_insert(0) += 1;
        *word_counts.entry(record.word.as_str()).or_insert(0) += 1;
    }

    let mut final_words: Vec<(String, usize)> = word_counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    final_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let total_letters: usize = records.iter().map(|r| r.letters_guessed).sum();
    let average_letters = if records.is_empty() {
        0.0
    } else {
        total_letters as f64 / records.len() as f64
    };
    let seconds = duration.as_secs_f64();

    Ok(SimulationResult {
        games: records.len(),
        wins,
        losses: records.len() - wins,
        letters_used,
        average_letters,
        final_words,
        duration,
        games_per_second: if seconds > 0.0 {
            records.len() as f64 / seconds
        } else {
            0.0
        },
    })
}

/// Guess the most common remaining letter until the game ends
///
/// # Errors
///
/// Returns [`GuessError::GameOver`] if the game had already ended.
pub fn play_automatically(game: &mut Game) -> Result<GameRecord, GuessError> {
    if game.is_over() {
        return Err(GuessError::GameOver(game.status()));
    }

    while !game.is_over() {
        let letter = next_letter(game);
        game.guess_letter(letter)?;
    }

    Ok(GameRecord {
        won: game.status() == Status::Won,
        letters_guessed: game.guessed_letters().len(),
        word: game
            .final_word()
            .map(|w| w.text().to_string())
            .unwrap_or_default(),
    })
}

fn next_letter(game: &Game) -> Letter {
    game.letter_hints(1)
        .first()
        .map(|&(letter, _)| letter)
        .or_else(|| {
            Letter::ALL
                .into_iter()
                .find(|letter| !game.guessed_letters().contains(letter))
        })
        .unwrap_or(Letter::ALL[0])
}
