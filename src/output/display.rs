//! Display functions for the line-based front ends

use super::formatters::{attempts_meter, guess_tiles, letter_tile, verdict_label};
use super::keyboard::{KEYBOARD_ROWS, KeyboardState};
use crate::core::{GuessResult, Verdict};
use crate::game::SubmitOutcome;
use colored::Colorize;

/// Print a scored guess as tiles followed by its emoji row
pub fn print_guess_result(result: &GuessResult) {
    println!("  {}  {}", guess_tiles(result), result.to_emoji());
}

/// Print a per-letter breakdown of a scored guess
pub fn print_verdict_breakdown(result: &GuessResult) {
    for (i, (letter, verdict)) in result.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            letter_tile(letter, Some(verdict)),
            verdict_label(verdict).bright_black()
        );
    }
}

/// Print the keyboard with the colors earned so far
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| letter_tile(letter, keyboard.status(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
}

/// Print the outcome of a submission
///
/// `max_attempts` is the round's budget, used for the attempts meter and
/// the guess count on a win.
pub fn print_outcome(outcome: &SubmitOutcome, max_attempts: u8) {
    match outcome {
        SubmitOutcome::Ignored => {}
        SubmitOutcome::IncompleteGuess => {
            println!("{}", "Not enough letters".yellow());
        }
        SubmitOutcome::Continue(result, remaining) => {
            print_guess_result(result);
            println!(
                "  {} {} left",
                attempts_meter(*remaining, max_attempts).cyan(),
                if *remaining == 1 { "attempt" } else { "attempts" }
            );
        }
        SubmitOutcome::Won(result) => {
            print_guess_result(result);
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!("{}", "    🎉  ¡Correcto! You guessed the word  🎉".bright_green().bold());
            println!("{}", "═".repeat(50).bright_cyan());
        }
        SubmitOutcome::LostAfterGuess(result, target) => {
            print_guess_result(result);
            print_loss(target.text());
        }
        SubmitOutcome::OutOfAttempts(target) => print_loss(target.text()),
    }

    if let Some(result) = outcome.result()
        && result.count(Verdict::Correct) == 4
        && !result.is_win()
    {
        println!("  {}", "So close!".bright_yellow());
    }
}

fn print_loss(target: &str) {
    println!(
        "\n{} The word was {}",
        "❌ Out of attempts!".red().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
}
