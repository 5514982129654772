//! Core domain types for the guessing game
//!
//! Pure, rendering-free types: words, per-letter verdicts and the guess evaluator.

mod verdict;
mod word;

pub use verdict::{GuessResult, Verdict, evaluate, evaluate_str};
pub use word::{WORD_LENGTH, Word, WordError, is_letter};
