//! Palabra
//!
//! A five-letter word-guessing game. The guess evaluator and round state
//! machine are plain library types with no terminal dependencies; the TUI
//! and line-based front ends are built on top of them.
//!
//! # Quick Start
//!
//! ```rust
//! use palabra::core::Word;
//! use palabra::game::{GameSession, SubmitOutcome};
//!
//! let mut session = GameSession::default();
//! session.initialize(Word::new("manzo").unwrap());
//!
//! for c in "manzo".chars() {
//!     session.append_letter(c);
//! }
//! assert!(matches!(session.submit(), SubmitOutcome::Won(_)));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Target word sources
pub mod provider;

// Word lists
pub mod wordlists;

// Command-line configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
