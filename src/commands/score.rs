//! Score command
//!
//! Evaluates one guess against a chosen target without starting a game.

use crate::core::{GuessResult, evaluate_str};
use crate::output::{print_guess_result, print_verdict_breakdown};
use anyhow::{Context, Result};

/// Evaluate `guess` against `target` and return the scored guess
///
/// # Errors
/// Returns an error when either word is not five ASCII letters.
pub fn score_guess(target: &str, guess: &str) -> Result<GuessResult> {
    evaluate_str(target, guess)
        .with_context(|| format!("cannot score '{guess}' against '{target}'"))
}

/// Print the evaluation of `guess` against `target`
///
/// # Errors
/// Returns an error when either word is not five ASCII letters.
pub fn run_score(target: &str, guess: &str) -> Result<()> {
    let result = score_guess(target, guess)?;

    println!();
    print_guess_result(&result);
    println!();
    print_verdict_breakdown(&result);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn scores_valid_words() {
        let result = score_guess("MAMAS", "aaaaa").unwrap();
        assert_eq!(result.count(Verdict::Correct), 2);
        assert_eq!(result.count(Verdict::Wrong), 3);
    }

    #[test]
    fn invalid_words_carry_context() {
        let err = score_guess("mamas", "aaaa").unwrap_err();
        assert!(err.to_string().contains("cannot score 'aaaa'"));
        assert!(format!("{err:#}").contains("exactly 5 letters"));
    }
}
