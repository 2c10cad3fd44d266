//! Display functions for game rounds and command results

use super::formatters::{create_progress_bar, guessed_list, hint_list, percentage, spaced};
use crate::commands::SimulationResult;
use crate::core::{Letter, Word};
use crate::game::{RoundView, Status, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the opening banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_welcome<W: Write>(out: &mut W, common_words: bool) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "{}",
        "        Welcome to Happy Easy Fun-Time Hangman!"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(60).cyan())?;

    if common_words {
        writeln!(
            out,
            "To make things easy, I use only the most common English words!"
        )?;
        writeln!(
            out,
            "For a much bigger word list, run this with the --harder option!\n"
        )?;
    }
    Ok(())
}

/// Print the result of one accepted guess and, while playing, the board
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_turn<W: Write>(out: &mut W, turn: &Turn, view: &RoundView) -> io::Result<()> {
    if turn.is_hit() {
        writeln!(out, "{}", "Correct!".green().bold())?;
    } else {
        writeln!(out, "{}", "Wrong!".red().bold())?;
    }

    if turn.status == Status::Playing {
        print_round(out, view)?;
    }
    Ok(())
}

/// Print the masked word and the guessed letters
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_round<W: Write>(out: &mut W, view: &RoundView) -> io::Result<()> {
    writeln!(out, "\n  {}", spaced(&view.masked).bright_white().bold())?;
    writeln!(out, "  Guessed: {}", guessed_list(&view.guessed))
}

/// Print the cheat line of best letters to try
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_hints<W: Write>(out: &mut W, hints: &[(Letter, usize)]) -> io::Result<()> {
    if hints.is_empty() {
        return Ok(());
    }
    writeln!(out, "  {} {}", "Best letters:".bright_black(), hint_list(hints))
}

/// Print the win or lose banner and the word the house settled on
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_game_over<W: Write>(out: &mut W, status: Status, word: &Word) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match status {
        Status::Won => writeln!(out, "{}", "    *** You rock! ***".bright_green().bold())?,
        Status::Lost => writeln!(out, "{}", "    *** You lose! ***".red().bold())?,
        Status::Playing => {}
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\nThe word was: {}\n", word.text().bright_yellow().bold())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Player wins:      {} {}",
        result.wins,
        format!("({:.1}%)", percentage(result.wins, result.games)).green()
    );
    println!(
        "   House wins:       {} {}",
        result.losses,
        format!("({:.1}%)", percentage(result.losses, result.games)).red()
    );
    println!(
        "   Average letters:  {}",
        format!("{:.2}", result.average_letters)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.letters_used.is_empty() {
        println!("\n📈 {}", "Letters guessed per game:".bright_cyan().bold());
        let max_count = result.letters_used.values().copied().max().unwrap_or(1);
        for (&letters, &count) in &result.letters_used {
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!(
                "   {letters:2}: {} {count:5} ({:5.1}%)",
                bar.green(),
                percentage(count, result.games)
            );
        }
    }

    if !result.final_words.is_empty() {
        println!("\n🎯 {}", "Words the house settled on:".bright_cyan().bold());
        for (word, count) in result.final_words.iter().take(5) {
            println!("   {} ({count} times)", word.bright_yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::game::GuessOutcome;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn turn(outcome: GuessOutcome, status: Status) -> Turn {
        Turn {
            letter: Letter::new('o').unwrap(),
            pattern: Pattern::from_positions(&[0]),
            outcome,
            status,
            remaining_guesses: 4,
            candidates_before: 6,
            candidates_after: 2,
            families: 4,
        }
    }

    fn view() -> RoundView {
        RoundView {
            masked: "o__".to_string(),
            guessed: vec!['o', 'z'],
        }
    }

    #[test]
    fn turn_shows_board_while_playing() {
        let hit = turn(GuessOutcome::Hit, Status::Playing);
        let text = render(|out| print_turn(out, &hit, &view()));
        assert!(text.contains("Correct!"));
        assert!(text.contains("o _ _"));
        assert!(text.contains("Guessed: o z"));
    }

    #[test]
    fn final_turn_skips_board() {
        let text = render(|out| print_turn(out, &turn(GuessOutcome::Miss, Status::Lost), &view()));
        assert!(text.contains("Wrong!"));
        assert!(!text.contains("Guessed:"));
    }

    #[test]
    fn game_over_names_the_word() {
        let word = Word::new("off").unwrap();
        let text = render(|out| print_game_over(out, Status::Won, &word));
        assert!(text.contains("You rock!"));
        assert!(text.contains("The word was: off"));
    }

    #[test]
    fn hints_omitted_when_empty() {
        assert_eq!(render(|out| print_hints(out, &[])), "");
        let hints = [(Letter::new('e').unwrap(), 3)];
        assert!(render(|out| print_hints(out, &hints)).contains("e:3"));
    }

    #[test]
    fn welcome_mentions_harder_for_common_list() {
        assert!(render(|out| print_welcome(out, true)).contains("--harder"));
        assert!(!render(|out| print_welcome(out, false)).contains("--harder"));
    }
}
