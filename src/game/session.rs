//! Game session controller
//!
//! Phases: `AwaitingWord → InProgress → Won | Lost`. Every edit made outside
//! `InProgress` is a silent no-op, so a front end can forward raw input
//! without checking the phase itself.

use crate::core::{GuessResult, WORD_LENGTH, Word, evaluate};
use std::fmt;
use tracing::debug;

/// Attempts per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// Identifier of one round, used to discard stale word-provider results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoundId(u64);

impl RoundId {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Target not resolved yet
    AwaitingWord,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost are both terminal
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State of a resolved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    attempts_remaining: u8,
    buffer: Vec<u8>,
    ended: bool,
    won: bool,
    guesses: Vec<GuessResult>,
}

impl GameState {
    fn new(target: Word, max_attempts: u8) -> Self {
        Self {
            target,
            attempts_remaining: max_attempts,
            buffer: Vec::with_capacity(WORD_LENGTH),
            ended: false,
            won: false,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Letters typed so far for the current guess
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub const fn ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Scored guesses of this round, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }
}

/// Result of [`GameSession::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session was not in progress; nothing changed
    Ignored,
    /// Buffer is not full; no attempt consumed
    IncompleteGuess,
    /// Submitted with no attempts left; the round is lost
    OutOfAttempts(Word),
    /// Guess matched the target
    Won(GuessResult),
    /// Last attempt used without a match; carries the target
    LostAfterGuess(GuessResult, Word),
    /// Scored, round continues with this many attempts left
    Continue(GuessResult, u8),
}

impl SubmitOutcome {
    /// The scored guess, when the submission was evaluated
    #[must_use]
    pub const fn result(&self) -> Option<&GuessResult> {
        match self {
            Self::Won(result) | Self::LostAfterGuess(result, _) | Self::Continue(result, _) => {
                Some(result)
            }
            Self::Ignored | Self::IncompleteGuess | Self::OutOfAttempts(_) => None,
        }
    }
}

/// Controller for one player's rounds
#[derive(Debug, Clone)]
pub struct GameSession {
    max_attempts: u8,
    round: RoundId,
    state: Option<GameState>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl GameSession {
    /// Create a session waiting for its first target word
    #[must_use]
    pub const fn new(max_attempts: u8) -> Self {
        Self {
            max_attempts,
            round: RoundId(0),
            state: None,
        }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Current round identifier
    #[must_use]
    pub const fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.state {
            None => Phase::AwaitingWord,
            Some(state) if state.won => Phase::Won,
            Some(state) if state.ended => Phase::Lost,
            Some(_) => Phase::InProgress,
        }
    }

    /// Letters typed so far; empty while awaiting a word
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        self.state.as_ref().map_or(&[][..], GameState::buffer)
    }

    /// Attempts left in the round; the full budget while awaiting a word
    #[must_use]
    pub fn attempts_remaining(&self) -> u8 {
        self.state
            .as_ref()
            .map_or(self.max_attempts, GameState::attempts_remaining)
    }

    /// Start the round with its target
    ///
    /// Only valid while awaiting a word. Returns `false` (and changes
    /// nothing) once a target is set; use [`GameSession::reset`] instead.
    pub fn initialize(&mut self, target: Word) -> bool {
        if self.state.is_some() {
            return false;
        }
        debug!(round = %self.round, "round started");
        self.state = Some(GameState::new(target, self.max_attempts));
        true
    }

    /// Drop the current round and wait for a new target
    ///
    /// The returned id must accompany the target passed to
    /// [`GameSession::resolve`].
    pub fn begin_round(&mut self) -> RoundId {
        self.round = self.round.next();
        self.state = None;
        debug!(round = %self.round, "awaiting target word");
        self.round
    }

    /// Deliver the target for `round`
    ///
    /// Results for any other round are stale and ignored.
    pub fn resolve(&mut self, round: RoundId, target: Word) -> bool {
        if round != self.round {
            debug!(stale = %round, current = %self.round, "ignoring stale target word");
            return false;
        }
        self.initialize(target)
    }

    /// Start a fresh round with `target`, whatever the current phase
    pub fn reset(&mut self, target: Word) -> RoundId {
        self.round = self.round.next();
        self.state = None;
        self.initialize(target);
        self.round
    }

    fn in_progress_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut().filter(|state| !state.ended)
    }

    /// Append a letter to the buffer
    ///
    /// Non-alphabetic input, a full buffer or a session that is not in
    /// progress leave everything unchanged. Returns whether a letter was added.
    pub fn append_letter(&mut self, c: char) -> bool {
        let Some(state) = self.in_progress_mut() else {
            return false;
        };
        if !c.is_ascii_alphabetic() || state.buffer.len() >= WORD_LENGTH {
            return false;
        }
        state.buffer.push(c.to_ascii_lowercase() as u8);
        true
    }

    /// Remove the last typed letter. Returns whether one was removed.
    pub fn delete_last_letter(&mut self) -> bool {
        self.in_progress_mut()
            .is_some_and(|state| state.buffer.pop().is_some())
    }

    /// Score the buffer against the target
    pub fn submit(&mut self) -> SubmitOutcome {
        let round = self.round;
        let Some(state) = self.in_progress_mut() else {
            return SubmitOutcome::Ignored;
        };

        if state.attempts_remaining == 0 {
            state.ended = true;
            debug!(%round, "submit with no attempts left");
            return SubmitOutcome::OutOfAttempts(state.target.clone());
        }

        if state.buffer.len() != WORD_LENGTH {
            return SubmitOutcome::IncompleteGuess;
        }
        // The buffer only ever holds a-z, so a full buffer is a valid word
        let Ok(guess) = Word::from_letters(&state.buffer) else {
            return SubmitOutcome::IncompleteGuess;
        };

        state.attempts_remaining -= 1;
        let result = evaluate(&state.target, &guess);
        state.guesses.push(result.clone());
        debug!(%round, guess = %guess, attempts_remaining = state.attempts_remaining, "guess scored");

        if result.is_win() {
            state.ended = true;
            state.won = true;
            SubmitOutcome::Won(result)
        } else if state.attempts_remaining == 0 {
            state.ended = true;
            SubmitOutcome::LostAfterGuess(result, state.target.clone())
        } else {
            state.buffer.clear();
            SubmitOutcome::Continue(result, state.attempts_remaining)
        }
    }
}
