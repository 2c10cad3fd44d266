//! Interactive text game
//!
//! Reads one line per turn and prints a short summary after every guess.

use crate::game::{ConfigError, DEFAULT_GUESSES, Game, GameConfig, Status};
use crate::observer::Observer;
use crate::output::{print_game_over, print_hints, print_round, print_turn};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Letters shown by `--cheat`
const HINT_COUNT: usize = 3;

/// Settings for an interactive game; `None` values are asked for
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub length: Option<usize>,
    pub guesses: Option<u32>,
    pub cheat: bool,
    pub seed: Option<u64>,
}

/// How an interactive game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    /// `Playing` if input ran out before the game finished
    pub status: Status,
    pub word: Option<String>,
    pub letters_guessed: usize,
}

/// Run one interactive game
///
/// Missing settings are prompted for, with the suggested word length and ten guesses as
/// defaults. Malformed and repeated guesses are reported and asked again. Reaching the end
/// of input stops the game quietly.
///
/// # Errors
///
/// Returns an error if a setting given up front does not fit the dictionary, if input ends
/// while a setting is being asked for, or on an I/O failure.
pub fn run_play<O, R, W>(
    dictionary: &Dictionary,
    options: &PlayOptions,
    observer: O,
    input: &mut R,
    output: &mut W,
) -> Result<PlaySummary>
where
    O: Observer,
    R: BufRead,
    W: Write,
{
    let word_length = choose_length(dictionary, options.length, input, output)?;
    let guesses = choose_guesses(options.guesses, input, output)?;

    let mut config = GameConfig::new(word_length, guesses);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    let mut game = Game::new(dictionary, &config)?.with_observer(observer);
    info!(
        "starting game: {} letters, {} guesses, {} candidates",
        word_length,
        guesses,
        game.candidates().len()
    );

    print_round(output, &game.render_state())?;

    while !game.is_over() {
        if options.cheat {
            print_hints(output, &game.letter_hints(HINT_COUNT))?;
        }

        write!(
            output,
            "\nGuess a letter ({} guesses left) > ",
            game.remaining_guesses()
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output, "\nGoodbye!")?;
            break;
        };

        match game.guess(line.trim()) {
            Ok(turn) => print_turn(output, &turn, &game.render_state())?,
            Err(err) if err.is_invalid_guess() => {
                writeln!(output, "{}", err.to_string().yellow())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(word) = game.final_word() {
        print_game_over(output, game.status(), word)?;
    }

    Ok(PlaySummary {
        status: game.status(),
        word: game.final_word().map(|w| w.text().to_string()),
        letters_guessed: game.guessed_letters().len(),
    })
}

/// Use the given length or ask until one with words is entered
fn choose_length<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    length: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    let range = dictionary
        .length_range()
        .ok_or(ConfigError::EmptyDictionary)?;

    if let Some(length) = length {
        GameConfig::new(length, DEFAULT_GUESSES).validate(dictionary)?;
        return Ok(length);
    }

    let suggested = dictionary.suggested_length().unwrap_or(*range.start());
    let prompt = format!(
        "What length word do you want ({}-{}) [{suggested}] > ",
        range.start(),
        range.end()
    );

    loop {
        let length = prompt_number(&prompt, suggested, input, output)?;
        match GameConfig::new(length, DEFAULT_GUESSES).validate(dictionary) {
            Ok(()) => return Ok(length),
            Err(err) => writeln!(output, "{}", err.to_string().yellow())?,
        }
    }
}

/// Use the given guess count or ask until a positive one is entered
fn choose_guesses<R: BufRead, W: Write>(
    guesses: Option<u32>,
    input: &mut R,
    output: &mut W,
) -> Result<u32> {
    if let Some(guesses) = guesses {
        if guesses == 0 {
            return Err(ConfigError::ZeroGuesses.into());
        }
        return Ok(guesses);
    }

    let prompt = format!("How many guesses do you want [{DEFAULT_GUESSES}] > ");
    loop {
        let guesses = prompt_number(&prompt, DEFAULT_GUESSES, input, output)?;
        if guesses > 0 {
            return Ok(guesses);
        }
        writeln!(output, "{}", ConfigError::ZeroGuesses.to_string().yellow())?;
    }
}

/// Ask for a number; an empty answer takes the default
fn prompt_number<T, R, W>(prompt: &str, default: T, input: &mut R, output: &mut W) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("input closed before a number was entered");
        };
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        if let Ok(value) = answer.parse() {
            return Ok(value);
        }
        writeln!(output, "{}", "You seem unclear on what numbers are!".yellow())?;
    }
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
