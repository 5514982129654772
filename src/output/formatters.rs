//! Formatting utilities for terminal output

use crate::core::{GuessResult, Verdict};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn letter_tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {} ", (letter as char).to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::WrongLocation) => tile.black().on_yellow().bold(),
        Some(Verdict::Wrong) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(result: &GuessResult) -> String {
    result
        .iter()
        .map(|(letter, verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Plain-text label for a verdict
#[must_use]
pub const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "correct",
        Verdict::WrongLocation => "wrong location",
        Verdict::Wrong => "not in word",
    }
}

/// Attempts left, e.g. "●●●○○○"
#[must_use]
pub fn attempts_meter(remaining: u8, max: u8) -> String {
    let remaining = remaining.min(max) as usize;
    format!(
        "{}{}",
        "●".repeat(remaining),
        "○".repeat(max as usize - remaining)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;

    #[test]
    fn tile_uppercases_letter() {
        colored::control::set_override(false);
        assert_eq!(letter_tile(b'a', None).to_string(), " A ");
        assert_eq!(letter_tile(b'z', Some(Verdict::Wrong)).to_string(), " Z ");
    }

    #[test]
    fn guess_tiles_keep_letter_order() {
        colored::control::set_override(false);
        let result = evaluate_str("manzo", "perro").unwrap();
        assert_eq!(guess_tiles(&result), " P  E  R  R  O ");
    }

    #[test]
    fn labels() {
        assert_eq!(verdict_label(Verdict::Correct), "correct");
        assert_eq!(verdict_label(Verdict::WrongLocation), "wrong location");
        assert_eq!(verdict_label(Verdict::Wrong), "not in word");
    }

    #[test]
    fn meter_shows_remaining_and_used() {
        assert_eq!(attempts_meter(4, 6), "●●●●○○");
        assert_eq!(attempts_meter(0, 6), "○○○○○○");
        assert_eq!(attempts_meter(9, 6), "●●●●●●");
    }
}
