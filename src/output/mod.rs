//! Terminal output formatting
//!
//! Shared by both front ends: letter coloring, keyboard status and
//! pretty-printing for the line-based modes.

pub mod display;
pub mod formatters;
pub mod keyboard;

pub use display::{print_guess_result, print_keyboard, print_outcome, print_verdict_breakdown};
pub use keyboard::KeyboardState;
