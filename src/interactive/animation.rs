//! Tile animation timing
//!
//! Pure timing math for the TUI effects: a staggered flip reveal after a
//! guess, a shake when the guess is incomplete, and a dance on a win. All
//! queries take `now` so they can be tested without a clock.

use crate::core::WORD_LENGTH;
use std::time::{Duration, Instant};

pub const FLIP_DURATION: Duration = Duration::from_millis(500);
pub const FLIP_STAGGER: Duration = Duration::from_millis(250);
pub const DANCE_DURATION: Duration = Duration::from_millis(500);
pub const DANCE_STAGGER: Duration = Duration::from_millis(100);
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);
const SHAKE_STEP: Duration = Duration::from_millis(50);

/// Visual effect applied to one grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Reveal { row: usize },
    Shake { row: usize },
    Dance { row: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    effect: Effect,
    started: Instant,
}

/// Offset of the `tile`-th element in a staggered sequence
fn stagger(step: Duration, tile: usize) -> Duration {
    step * u32::try_from(tile).unwrap_or(u32::MAX)
}

impl Animation {
    #[must_use]
    pub const fn new(effect: Effect, started: Instant) -> Self {
        Self { effect, started }
    }

    #[must_use]
    pub const fn effect(&self) -> Effect {
        self.effect
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        match self.effect {
            Effect::Reveal { row } | Effect::Shake { row } | Effect::Dance { row } => row,
        }
    }

    /// Total running time of the effect
    #[must_use]
    pub fn duration(&self) -> Duration {
        let last = WORD_LENGTH - 1;
        match self.effect {
            Effect::Reveal { .. } => stagger(FLIP_STAGGER, last) + FLIP_DURATION,
            Effect::Dance { .. } => stagger(DANCE_STAGGER, last) + DANCE_DURATION,
            Effect::Shake { .. } => SHAKE_DURATION,
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration()
    }

    /// Typing is locked while a reveal plays
    #[must_use]
    pub const fn blocks_input(&self) -> bool {
        matches!(self.effect, Effect::Reveal { .. })
    }

    /// Tiles of the row already showing their color
    ///
    /// A tile turns over halfway through its flip. Rows not being revealed
    /// are fully shown.
    #[must_use]
    pub fn revealed_tiles(&self, now: Instant) -> usize {
        let Effect::Reveal { .. } = self.effect else {
            return WORD_LENGTH;
        };
        let elapsed = self.elapsed(now);
        (0..WORD_LENGTH)
            .take_while(|&tile| elapsed >= stagger(FLIP_STAGGER, tile) + FLIP_DURATION / 2)
            .count()
    }

    /// Whether `tile` is in the first half of its flip, drawn edge-on
    #[must_use]
    pub fn is_flipping(&self, tile: usize, now: Instant) -> bool {
        let Effect::Reveal { .. } = self.effect else {
            return false;
        };
        let start = stagger(FLIP_STAGGER, tile);
        let elapsed = self.elapsed(now);
        elapsed >= start && elapsed < start + FLIP_DURATION / 2
    }

    /// Horizontal offset of a shaking row, in columns
    #[must_use]
    pub fn shake_offset(&self, now: Instant) -> i16 {
        let Effect::Shake { .. } = self.effect else {
            return 0;
        };
        if self.is_finished(now) {
            return 0;
        }
        let step = self.elapsed(now).as_millis() / SHAKE_STEP.as_millis();
        if step % 2 == 0 { -1 } else { 1 }
    }

    /// Whether `tile` is in the raised half of its dance bounce
    #[must_use]
    pub fn is_lifted(&self, tile: usize, now: Instant) -> bool {
        let Effect::Dance { .. } = self.effect else {
            return false;
        };
        let start = stagger(DANCE_STAGGER, tile);
        let elapsed = self.elapsed(now);
        elapsed >= start && elapsed < start + DANCE_DURATION / 2
    }
}
