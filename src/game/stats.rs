//! In-memory round statistics
//!
//! Lives for the process only; nothing is written to disk.

use super::session::SubmitOutcome;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n - 1]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished round
    ///
    /// `guesses_used` is only read for wins. Outcomes that do not end a
    /// round are ignored, so every submit result can be passed straight in.
    pub fn record(&mut self, outcome: &SubmitOutcome, guesses_used: usize) {
        match outcome {
            SubmitOutcome::Won(_) => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if guesses_used > 0 {
                    if self.guess_distribution.len() < guesses_used {
                        self.guess_distribution.resize(guesses_used, 0);
                    }
                    self.guess_distribution[guesses_used - 1] += 1;
                }
            }
            SubmitOutcome::LostAfterGuess(..) | SubmitOutcome::OutOfAttempts(_) => {
                self.games_played += 1;
                self.current_streak = 0;
            }
            SubmitOutcome::Ignored
            | SubmitOutcome::IncompleteGuess
            | SubmitOutcome::Continue(..) => {}
        }
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
