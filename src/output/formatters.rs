//! Formatting utilities for terminal output

use crate::core::Letter;

/// Spread a masked word out so blanks are countable: `o__` becomes `o _ _`
#[must_use]
pub fn spaced(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, ch) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Guessed letters separated by spaces, or `none` before the first guess
#[must_use]
pub fn guessed_list(guessed: &[char]) -> String {
    if guessed.is_empty() {
        return "none".to_string();
    }
    spaced(&guessed.iter().collect::<String>())
}

/// Hint letters with their candidate counts: `e:120 a:98`
#[must_use]
pub fn hint_list(hints: &[(Letter, usize)]) -> String {
    hints
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `part` in `total` as a percentage, zero when `total` is zero
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
