//! Adversarial family selection
//!
//! Keeps the family that hurts the player most: the largest one, then the one that
//! reveals the fewest positions, then a uniform random pick among whatever is still tied.

use super::grouping::Family;
use rand::Rng;

/// The family kept by [`select_family`] and how many families tied with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub family: Family,
    pub tied: usize,
}

/// Indices of the families that are maximal under (size desc, occurrences asc)
///
/// Returned in family order. Empty only when `families` is empty.
#[must_use]
pub fn most_adversarial(families: &[Family]) -> Vec<usize> {
    let Some(max_size) = families.iter().map(Family::len).max() else {
        return Vec::new();
    };

    let fewest = families
        .iter()
        .filter(|family| family.len() == max_size)
        .map(Family::occurrences)
        .min()
        .unwrap_or(0);

    families
        .iter()
        .enumerate()
        .filter(|(_, family)| family.len() == max_size && family.occurrences() == fewest)
        .map(|(i, _)| i)
        .collect()
}

/// Select the family to keep
///
/// Returns `None` if there are no families.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Word};
/// use evil_hangman::partition::{group_by_pattern, select_family};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words: Vec<Word> = ["foo", "off", "moo", "ore", "cat", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let families = group_by_pattern(&words, Letter::new('o').unwrap());
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let kept = select_family(families, &mut rng).unwrap();
/// assert_eq!(kept.family.pattern.to_string(), "(0)");
/// assert_eq!(kept.tied, 1);
/// ```
pub fn select_family<R: Rng + ?Sized>(
    mut families: Vec<Family>,
    rng: &mut R,
) -> Option<Selection> {
    let tied = most_adversarial(&families);

    let pick = match tied.len() {
        0 => return None,
        1 => tied[0],
        n => tied[rng.random_range(0..n)],
    };

    Some(Selection {
        family: families.swap_remove(pick),
        tied: tied.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Pattern, Word};
    use crate::partition::group_by_pattern;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn family(positions: &[usize], list: &[&str]) -> Family {
        Family {
            pattern: Pattern::from_positions(positions),
            words: list.iter().map(|w| Word::new(*w).unwrap()).collect(),
        }
    }

    #[test]
    fn prefers_larger_family() {
        let families = vec![
            family(&[0], &["ab"]),
            family(&[], &["bc", "cd", "de"]),
            family(&[1], &["ba", "ca"]),
        ];
        assert_eq!(most_adversarial(&families), vec![1]);

        let mut rng = StdRng::seed_from_u64(1);
        let kept = select_family(families, &mut rng).unwrap();
        assert!(kept.family.pattern.is_empty());
        assert_eq!(kept.tied, 1);
    }

    #[test]
    fn larger_family_beats_fewer_occurrences() {
        // A size-3 family that reveals two positions still wins over a size-2 miss
        let families = vec![
            family(&[], &["xyz", "yzx"]),
            family(&[0, 2], &["aba", "aca", "ada"]),
        ];
        assert_eq!(most_adversarial(&families), vec![1]);
    }

    #[test]
    fn size_tie_broken_by_fewest_occurrences() {
        let families = vec![
            family(&[1, 2], &["foo", "moo"]),
            family(&[0], &["off", "ore"]),
        ];
        assert_eq!(most_adversarial(&families), vec![1]);
    }

    #[test]
    fn empty_pattern_wins_size_tie() {
        let families = vec![family(&[0], &["ab", "ac"]), family(&[], &["bc", "cb"])];
        assert_eq!(most_adversarial(&families), vec![1]);
    }

    #[test]
    fn full_tie_is_random_but_always_maximal() {
        let families = vec![
            family(&[0], &["ab", "ac"]),
            family(&[1], &["ba", "ca"]),
            family(&[0, 1], &["aa"]),
        ];
        assert_eq!(most_adversarial(&families), vec![0, 1]);

        let mut seen_first = false;
        let mut seen_second = false;
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let kept = select_family(families.clone(), &mut rng).unwrap();
            assert_eq!(kept.tied, 2);
            assert_eq!(kept.family.len(), 2);
            assert_eq!(kept.family.occurrences(), 1);
            if kept.family.pattern == Pattern::from_positions(&[0]) {
                seen_first = true;
            } else {
                seen_second = true;
            }
        }
        assert!(seen_first && seen_second);
    }

    #[test]
    fn no_families_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(most_adversarial(&[]).is_empty());
        assert!(select_family(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn never_prefers_smaller_family() {
        let words: Vec<Word> = [
            "able", "bale", "cable", "label", "ball", "lab", "bell", "all", "lull", "bulb",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect();

        let mut rng = StdRng::seed_from_u64(3);
        for letter in Letter::ALL {
            let families = group_by_pattern(&words, letter);
            let largest = families.iter().map(Family::len).max().unwrap();
            let kept = select_family(families, &mut rng).unwrap();
            assert_eq!(kept.family.len(), largest, "letter {letter}");
        }
    }
}
