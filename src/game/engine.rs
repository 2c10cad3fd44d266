//! Game session state machine

use super::{ConfigError, GameConfig, GuessError, GuessOutcome, RoundView, Status, Turn};
use crate::core::{CandidateSet, Letter, Pattern, Word};
use crate::observer::{NoopObserver, Observer};
use crate::partition::{Partition, partition};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

/// One evil hangman session
///
/// Holds the words still consistent with every reveal so far. Each accepted guess
/// replaces the candidate set with the family the partitioner picks, so the set is never
/// empty and never grows.
///
/// # Examples
/// ```
/// use evil_hangman::game::{Game, GameConfig, GuessOutcome, Status};
/// use evil_hangman::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_lines(["foo", "off", "moo", "ore", "cat", "dog"]);
/// let config = GameConfig::new(3, 5).with_seed(7);
/// let mut game = Game::new(&dictionary, &config).unwrap();
///
/// let turn = game.guess("o").unwrap();
/// assert_eq!(turn.outcome, GuessOutcome::Hit);
/// assert_eq!(game.render_state().masked, "o__");
/// assert_eq!(game.status(), Status::Playing);
/// ```
#[derive(Debug)]
pub struct Game<O: Observer = NoopObserver> {
    candidates: CandidateSet,
    guessed: BTreeSet<Letter>,
    history: Vec<(Letter, Pattern)>,
    remaining: u32,
    max_guesses: u32,
    status: Status,
    rng: StdRng,
    observer: O,
}

impl Game {
    /// Start a game on the words of the configured length
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not fit the dictionary.
    pub fn new(dictionary: &Dictionary, config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate(dictionary)?;
        Self::from_words(dictionary.words_of_length(config.word_length), config)
    }

    /// Start a game on an explicit word list
    ///
    /// Every word must have `config.word_length` letters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGuesses`], [`ConfigError::LengthMismatch`] for a word of
    /// the wrong length, or [`ConfigError::NoWordsAvailable`] for an empty list.
    pub fn from_words(words: Vec<Word>, config: &GameConfig) -> Result<Self, ConfigError> {
        if config.guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }

        if let Some(word) = words.iter().find(|w| w.len() != config.word_length) {
            return Err(ConfigError::LengthMismatch {
                expected: config.word_length,
                word: word.text().to_string(),
            });
        }

        let candidates =
            CandidateSet::new(words).ok_or(ConfigError::NoWordsAvailable(config.word_length))?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            candidates,
            guessed: BTreeSet::new(),
            history: Vec::new(),
            remaining: config.guesses,
            max_guesses: config.guesses,
            status: Status::Playing,
            rng,
            observer: NoopObserver,
        })
    }
}

impl<O: Observer> Game<O> {
    /// Replace the observer that traces partitioning and turns
    #[must_use]
    pub fn with_observer<P: Observer>(self, observer: P) -> Game<P> {
        Game {
            candidates: self.candidates,
            guessed: self.guessed,
            history: self.history,
            remaining: self.remaining,
            max_guesses: self.max_guesses,
            status: self.status,
            rng: self.rng,
            observer,
        }
    }

    /// Apply a guess typed by the player
    ///
    /// The input must be exactly one letter; case is ignored. A rejected guess leaves the
    /// session untouched.
    ///
    /// # Errors
    ///
    /// [`GuessError::GameOver`] once the game has ended, [`GuessError::Malformed`] for
    /// anything but a single letter, [`GuessError::AlreadyGuessed`] for a repeat.
    pub fn guess(&mut self, input: &str) -> Result<Turn, GuessError> {
        self.ensure_playing()?;
        let letter =
            Letter::parse(input).ok_or_else(|| GuessError::Malformed(input.to_string()))?;
        self.guess_letter(letter)
    }

    /// Apply an already parsed letter
    ///
    /// # Errors
    ///
    /// [`GuessError::GameOver`] once the game has ended, [`GuessError::AlreadyGuessed`] for
    /// a repeat.
    pub fn guess_letter(&mut self, letter: Letter) -> Result<Turn, GuessError> {
        self.ensure_playing()?;
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let candidates_before = self.candidates.len();
        let Partition {
            candidates,
            pattern,
            families,
            ..
        } = partition(&self.candidates, letter, &mut self.rng, &self.observer);

        self.guessed.insert(letter);
        self.candidates = candidates;
        self.history.push((letter, pattern));

        let outcome = if pattern.is_empty() {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.status = Status::Lost;
            }
            GuessOutcome::Miss
        } else {
            if self.is_fully_revealed() {
                self.status = Status::Won;
            }
            GuessOutcome::Hit
        };

        let turn = Turn {
            letter,
            pattern,
            outcome,
            status: self.status,
            remaining_guesses: self.remaining,
            candidates_before,
            candidates_after: self.candidates.len(),
            families,
        };
        self.observer.turn_played(&turn);

        Ok(turn)
    }

    /// Masked word and guessed letters for display
    #[must_use]
    pub fn render_state(&self) -> RoundView {
        let masked = self
            .candidates
            .representative()
            .text()
            .chars()
            .map(|ch| match Letter::new(ch) {
                Some(letter) if self.guessed.contains(&letter) => ch,
                _ => '_',
            })
            .collect();

        RoundView {
            masked,
            guessed: self.guessed.iter().map(|l| l.as_char()).collect(),
        }
    }

    /// The word the house settles on, available only once the game is over
    #[must_use]
    pub fn final_word(&self) -> Option<&Word> {
        self.status
            .is_over()
            .then(|| self.candidates.representative())
    }

    /// Unguessed letters ranked by how many candidates contain them
    ///
    /// Letters no candidate contains are left out. Ties are broken alphabetically.
    #[must_use]
    pub fn letter_hints(&self, limit: usize) -> Vec<(Letter, usize)> {
        let mut counts = [0usize; 26];
        for word in &self.candidates {
            for letter in word.letters() {
                counts[letter.index()] += 1;
            }
        }

        let mut hints: Vec<(Letter, usize)> = Letter::ALL
            .into_iter()
            .filter(|letter| !self.guessed.contains(letter))
            .map(|letter| (letter, counts[letter.index()]))
            .filter(|&(_, count)| count > 0)
            .collect();
        hints.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        hints.truncate(limit);
        hints
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.candidates.word_length()
    }

    /// Words still consistent with every reveal
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    /// Each accepted letter with the positions it revealed, in guess order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Letter, Pattern)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    fn ensure_playing(&self) -> Result<(), GuessError> {
        if self.status.is_over() {
            Err(GuessError::GameOver(self.status))
        } else {
            Ok(())
        }
    }

    fn is_fully_revealed(&self) -> bool {
        self.candidates
            .representative()
            .letters()
            .all(|letter| self.guessed.contains(&letter))
    }
}
