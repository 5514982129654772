//! Interactive TUI interface

pub mod animation;
mod app;
mod rendering;

pub use app::{ALERT_DURATION, Alert, App, MessageStyle, run_tui};
