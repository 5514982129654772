//! Round state machine and per-process statistics
//!
//! `GameSession` owns the state of one round and turns key presses into
//! outcomes; it never renders anything.

mod session;
mod stats;

pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameSession, GameState, Phase, RoundId, SubmitOutcome,
};
pub use stats::Statistics;
