//! Adversarial candidate-set partitioning
//!
//! On every guess the candidates are split into families by where the letter appears,
//! and the family that is worst for the player is kept.

mod grouping;
mod selector;

pub use grouping::{Family, group_by_pattern};
pub use selector::{Selection, most_adversarial, select_family};

use crate::core::{CandidateSet, Letter, Pattern};
use crate::observer::Observer;
use rand::Rng;

/// Result of partitioning the candidates on one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Candidates that survive the guess
    pub candidates: CandidateSet,
    /// Pattern every surviving candidate shows for the letter
    pub pattern: Pattern,
    /// Number of families the candidates split into
    pub families: usize,
    /// Number of families that were equally adversarial
    pub tied: usize,
}

/// Narrow `candidates` after `letter` is guessed
///
/// Groups the words by occurrence pattern, keeps the largest family, prefers the family
/// with the fewest occurrences among equally large ones, and picks uniformly at random
/// among any families still tied. The result is never empty.
///
/// # Panics
/// Never in practice: a non-empty candidate set always yields at least one family.
///
/// # Examples
/// ```
/// use evil_hangman::core::{CandidateSet, Letter, Word};
/// use evil_hangman::observer::NoopObserver;
/// use evil_hangman::partition::partition;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = ["foo", "off", "moo", "ore", "cat", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates = CandidateSet::new(words).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let result = partition(&candidates, Letter::new('o').unwrap(), &mut rng, &NoopObserver);
///
/// let kept: Vec<&str> = result.candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(kept, vec!["off", "ore"]);
/// assert_eq!(result.families, 4);
/// ```
pub fn partition<R: Rng + ?Sized>(
    candidates: &CandidateSet,
    letter: Letter,
    rng: &mut R,
    observer: &dyn Observer,
) -> Partition {
    let families = group_by_pattern(candidates.words(), letter);
    let family_count = families.len();
    observer.families_grouped(letter, &families);

    let Selection { family, tied } =
        select_family(families, rng).expect("non-empty candidates always form a family");
    observer.family_chosen(letter, &family, tied);

    let pattern = family.pattern;
    let candidates = CandidateSet::new(family.words).expect("selected family is never empty");

    Partition {
        candidates,
        pattern,
        families: family_count,
        tied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::observer::NoopObserver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    fn candidates(list: &[&str]) -> CandidateSet {
        CandidateSet::new(list.iter().map(|w| Word::new(*w).unwrap()).collect()).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[derive(Default)]
    struct Recorder {
        grouped: RefCell<Vec<usize>>,
        chosen: RefCell<Vec<(Pattern, usize)>>,
    }

    impl Observer for Recorder {
        fn families_grouped(&self, _letter: Letter, families: &[Family]) {
            self.grouped.borrow_mut().push(families.len());
        }

        fn family_chosen(&self, _letter: Letter, chosen: &Family, tied: usize) {
            self.chosen.borrow_mut().push((chosen.pattern, tied));
        }
    }

    #[test]
    fn classic_example_keeps_fewest_occurrences() {
        // foo/moo and off/ore both have two words; (0) reveals less than (1, 2)
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = partition(
                &candidates(&["foo", "off", "moo", "ore", "cat", "dog"]),
                letter('o'),
                &mut rng,
                &NoopObserver,
            );

            assert_eq!(texts(&result.candidates), vec!["off", "ore"]);
            assert_eq!(result.pattern, Pattern::from_positions(&[0]));
            assert_eq!(result.families, 4);
            assert_eq!(result.tied, 1);
        }
    }

    #[test]
    fn absent_letter_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(5);
        let input = candidates(&["cat", "dog", "owl"]);
        let result = partition(&input, letter('z'), &mut rng, &NoopObserver);

        assert_eq!(result.candidates, input);
        assert_eq!(result.pattern, Pattern::EMPTY);
        assert_eq!(result.families, 1);
    }

    #[test]
    fn result_is_consistent_with_pattern() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = candidates(&[
            "hello", "jello", "world", "cello", "below", "fellow", "yells", "llama",
        ]);
        let result = partition(&input, letter('l'), &mut rng, &NoopObserver);

        assert!(result.candidates.all_match(letter('l'), result.pattern));
    }

    #[test]
    fn observer_sees_each_step() {
        let recorder = Recorder::default();
        let mut rng = StdRng::seed_from_u64(9);
        let result = partition(
            &candidates(&["foo", "off", "moo", "ore", "cat", "dog"]),
            letter('o'),
            &mut rng,
            &recorder,
        );

        assert_eq!(*recorder.grouped.borrow(), vec![4]);
        assert_eq!(*recorder.chosen.borrow(), vec![(result.pattern, 1)]);
    }

    #[test]
    fn single_candidate_survives() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = partition(
            &candidates(&["rhythm"]),
            letter('h'),
            &mut rng,
            &NoopObserver,
        );

        assert_eq!(texts(&result.candidates), vec!["rhythm"]);
        assert_eq!(result.pattern, Pattern::from_positions(&[1, 4]));
    }
}
