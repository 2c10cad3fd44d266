//! Evil Hangman - CLI
//!
//! Play hangman against a house that never commits to a word, or pit an automatic
//! player against it in bulk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayOptions, SimulationConfig, run_play, run_simulation},
    game::DEFAULT_GUESSES,
    observer::{LogObserver, NoopObserver},
    output::{print_simulation_result, print_welcome},
    wordlists::{
        COMMON, Dictionary,
        loader::{SYSTEM_DICTIONARY, load_from_file, words_from_slice},
    },
};
use log::{LevelFilter, info};
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against a house that cheats by never picking a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'common' (default, embedded), 'system' (/usr/share/dict/words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "common")]
    wordlist: String,

    /// Use the system dictionary for a much bigger word list
    #[arg(long, global = true, conflicts_with = "wordlist")]
    harder: bool,

    /// Log every partitioning step
    #[arg(long, global = true)]
    debug: bool,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Word length (asked for if omitted)
        #[arg(short, long)]
        length: Option<usize>,

        /// Wrong guesses allowed (asked for if omitted)
        #[arg(short, long)]
        guesses: Option<u32>,

        /// Show the letters most likely to hit
        #[arg(long)]
        cheat: bool,
    },

    /// Play many games with an automatic player
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length (default: suggested length for the word list)
        #[arg(short, long)]
        length: Option<usize>,

        /// Wrong guesses allowed
        #[arg(short, long, default_value_t = DEFAULT_GUESSES)]
        guesses: u32,
    },
}

/// Load the dictionary selected by `-w` / `--harder`
///
/// clap rejects `--harder` together with an explicit `-w`.
///
/// - "common": embedded list of common English words
/// - "system": the system dictionary
/// - "<path>": one word per line
fn load_dictionary(wordlist: &str, harder: bool) -> Result<Dictionary> {
    let source = if harder { "system" } else { wordlist };

    let dictionary = match source {
        "common" => words_from_slice(COMMON),
        "system" => load_from_file(SYSTEM_DICTIONARY)
            .with_context(|| format!("failed to read {SYSTEM_DICTIONARY}"))?,
        path => load_from_file(path).with_context(|| format!("failed to read {path}"))?,
    };

    info!("loaded {} words from {source}", dictionary.len());
    Ok(dictionary)
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let dictionary = load_dictionary(&cli.wordlist, cli.harder)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        guesses: None,
        cheat: false,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            cheat,
        } => {
            let options = PlayOptions {
                length,
                guesses,
                cheat,
                seed: cli.seed,
            };
            let common = !cli.harder && cli.wordlist == "common";
            run_play_command(&dictionary, &options, common, cli.debug)
        }
        Commands::Simulate {
            count,
            length,
            guesses,
        } => {
            let length = length
                .or_else(|| dictionary.suggested_length())
                .context("the word list contains no playable words")?;
            let seed = cli.seed.unwrap_or_else(rand::random);
            let config = SimulationConfig::new(count, length, guesses, seed);
            run_simulate_command(&dictionary, &config)
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    options: &PlayOptions,
    common: bool,
    debug: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    print_welcome(&mut output, common)?;
    let summary = if debug {
        run_play(dictionary, options, LogObserver, &mut input, &mut output)?
    } else {
        run_play(dictionary, options, NoopObserver, &mut input, &mut output)?
    };
    output.flush()?;

    info!(
        "game finished: {} after {} letters",
        summary.status, summary.letters_guessed
    );
    Ok(())
}

fn run_simulate_command(dictionary: &Dictionary, config: &SimulationConfig) -> Result<()> {
    println!(
        "Simulating {} games with {}-letter words and {} guesses (seed {})...",
        config.games, config.word_length, config.guesses, config.seed
    );

    let result = run_simulation(dictionary, config, true)?;
    print_simulation_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_conflicts_with_explicit_wordlist() {
        assert!(Cli::try_parse_from(["evil_hangman", "--harder", "-w", "words.txt"]).is_err());
    }

    #[test]
    fn harder_alone_keeps_default_wordlist() {
        let cli = Cli::try_parse_from(["evil_hangman", "--harder"]).unwrap();
        assert!(cli.harder);
        assert_eq!(cli.wordlist, "common");
    }

    #[test]
    fn play_is_optional() {
        let cli = Cli::try_parse_from(["evil_hangman", "--seed", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.seed, Some(3));
    }
}
