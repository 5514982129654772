//! Command implementations

pub mod score;
pub mod simple;

pub use score::run_score;
pub use simple::run_simple;
