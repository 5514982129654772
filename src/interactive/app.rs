//! TUI application state and logic

use super::animation::{Animation, Effect};
use crate::game::{GameSession, Phase, Statistics, SubmitOutcome};
use crate::output::KeyboardState;
use crate::provider::WordFetcher;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long a transient alert stays on screen
pub const ALERT_DURATION: Duration = Duration::from_millis(1000);

/// Maximum alerts kept on screen at once
const MAX_ALERTS: usize = 5;

/// Event poll interval; also the animation frame rate
const TICK: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub text: String,
    pub style: MessageStyle,
    /// `None` keeps the alert until the next round
    pub expires_at: Option<Instant>,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub keyboard: KeyboardState,
    pub stats: Statistics,
    pub alerts: Vec<Alert>,
    pub animation: Option<Animation>,
    pub fetch_failed: bool,
    pub should_quit: bool,
    fetcher: WordFetcher,
    /// Outcome whose presentation waits for the reveal to finish
    pending: Option<SubmitOutcome>,
}

impl App {
    #[must_use]
    pub fn new(fetcher: WordFetcher, max_attempts: u8) -> Self {
        Self {
            session: GameSession::new(max_attempts),
            keyboard: KeyboardState::new(),
            stats: Statistics::default(),
            alerts: Vec::new(),
            animation: None,
            fetch_failed: false,
            should_quit: false,
            fetcher,
            pending: None,
        }
    }

    /// Name of the word source, for the status bar
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.fetcher.provider_name()
    }

    /// Discard the current round and fetch a new target
    pub fn start_round(&mut self) {
        let round = self.session.begin_round();
        self.keyboard.clear();
        self.alerts.clear();
        self.animation = None;
        self.pending = None;
        self.fetch_failed = false;
        info!(%round, "starting new round");
        self.fetcher.request(round);
    }

    pub fn add_alert(&mut self, text: &str, style: MessageStyle, now: Instant, transient: bool) {
        self.alerts.push(Alert {
            text: text.to_string(),
            style,
            expires_at: transient.then(|| now + ALERT_DURATION),
        });

        if self.alerts.len() > MAX_ALERTS {
            self.alerts.remove(0);
        }
    }

    /// Advance timers and collect finished fetches
    pub fn tick(&mut self, now: Instant) {
        while let Some(fetched) = self.fetcher.try_next() {
            match fetched.result {
                Ok(word) => {
                    if self.session.resolve(fetched.round, word) {
                        self.add_alert("New word ready. Start typing!", MessageStyle::Info, now, true);
                    }
                }
                Err(err) if fetched.round == self.session.round() => {
                    warn!(error = %err, "no target word for this round");
                    self.fetch_failed = true;
                    self.add_alert(
                        &format!("Could not get a word: {err}. Press Enter to retry."),
                        MessageStyle::Error,
                        now,
                        false,
                    );
                }
                Err(_) => debug!(stale = %fetched.round, "ignoring stale fetch failure"),
            }
        }

        self.alerts
            .retain(|alert| alert.expires_at.is_none_or(|expires| expires > now));

        if let Some(animation) = self.animation
            && animation.is_finished(now)
        {
            self.animation = None;
            if animation.blocks_input() {
                self.finish_reveal(now);
            }
        }
    }

    fn input_locked(&self) -> bool {
        self.animation.is_some_and(|a| a.blocks_input())
    }

    /// Row the player is currently typing into
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.session.state().map_or(0, |s| s.guesses().len())
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_round();
            }
            KeyCode::F(5) => self.start_round(),
            _ if self.input_locked() => {}
            KeyCode::Enter if self.fetch_failed => self.start_round(),
            KeyCode::Enter => self.submit(now),
            KeyCode::Backspace | KeyCode::Delete => {
                self.session.delete_last_letter();
            }
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        let row = self.active_row();
        let outcome = self.session.submit();
        debug!(?outcome, "submitted");

        match &outcome {
            SubmitOutcome::Ignored => match self.session.phase() {
                Phase::AwaitingWord => {
                    self.add_alert("Still fetching a word...", MessageStyle::Info, now, true);
                }
                _ => self.add_alert(
                    "Round over. Press Ctrl-R for a new word.",
                    MessageStyle::Info,
                    now,
                    true,
                ),
            },
            SubmitOutcome::IncompleteGuess => {
                self.add_alert("Not enough letters", MessageStyle::Error, now, true);
                self.animation = Some(Animation::new(Effect::Shake { row }, now));
            }
            SubmitOutcome::OutOfAttempts(target) => {
                let text = format!("Out of attempts! The word was {}", target.text().to_uppercase());
                self.add_alert(&text, MessageStyle::Error, now, false);
                self.stats.record(&outcome, row);
            }
            SubmitOutcome::Won(_) | SubmitOutcome::LostAfterGuess(..) | SubmitOutcome::Continue(..) => {
                self.stats.record(&outcome, row + 1);
                self.animation = Some(Animation::new(Effect::Reveal { row }, now));
                self.pending = Some(outcome.clone());
            }
        }
    }

    /// Show what a guess earned once its tiles have turned over
    fn finish_reveal(&mut self, now: Instant) {
        let Some(outcome) = self.pending.take() else {
            return;
        };
        if let Some(result) = outcome.result() {
            self.keyboard.apply(result);
        }

        match outcome {
            SubmitOutcome::Won(_) => {
                let row = self.active_row().saturating_sub(1);
                let celebration = match row + 1 {
                    1 => "🎯 ¡Increíble! First try!",
                    2 => "🔥 ¡Magnífico! Two guesses!",
                    3 => "✨ ¡Espléndido! Three guesses!",
                    4 => "👏 ¡Muy bien! Four guesses!",
                    5 => "🎉 ¡Bien hecho! Five guesses!",
                    _ => "😅 ¡Uf! Just made it!",
                };
                self.add_alert(celebration, MessageStyle::Success, now, false);
                self.add_alert("Press Ctrl-R for a new word or Esc to quit.", MessageStyle::Info, now, false);
                self.animation = Some(Animation::new(Effect::Dance { row }, now));
            }
            SubmitOutcome::LostAfterGuess(_, target) => {
                let text = format!("Out of attempts! The word was {}", target.text().to_uppercase());
                self.add_alert(&text, MessageStyle::Error, now, false);
                self.add_alert("Press Ctrl-R for a new word or Esc to quit.", MessageStyle::Info, now, false);
            }
            SubmitOutcome::Continue(_, remaining) => {
                let text = if remaining == 1 {
                    "Last attempt!".to_string()
                } else {
                    format!("{remaining} attempts left")
                };
                self.add_alert(&text, MessageStyle::Info, now, true);
            }
            SubmitOutcome::Ignored | SubmitOutcome::IncompleteGuess | SubmitOutcome::OutOfAttempts(_) => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start_round();

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Verdict, Word};
    use crate::provider::{ProviderError, WordProvider};
    use std::sync::Arc;
    use std::thread;

    struct Fixed(&'static str);

    impl WordProvider for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn fetch_target_word(&self, _: &str, _: usize) -> Result<Word, ProviderError> {
            Ok(Word::new(self.0).unwrap())
        }
    }

    struct Down;

    impl WordProvider for Down {
        fn name(&self) -> &'static str {
            "down"
        }

        fn fetch_target_word(&self, _: &str, _: usize) -> Result<Word, ProviderError> {
            Err(ProviderError::Unavailable("offline".to_string()))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Start a round and tick until the fetch lands
    fn ready_app(provider: Arc<dyn WordProvider>) -> App {
        let mut app = App::new(WordFetcher::new(provider, "es"), 6);
        app.start_round();
        for _ in 0..500 {
            app.tick(Instant::now());
            if app.session.phase() != Phase::AwaitingWord || app.fetch_failed {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        app
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn round_starts_once_word_arrives() {
        let app = ready_app(Arc::new(Fixed("manzo")));
        assert_eq!(app.session.phase(), Phase::InProgress);
        assert_eq!(app.provider_name(), "fixed");
        assert!(app.alerts.iter().any(|a| a.text.contains("New word ready")));
    }

    #[test]
    fn incomplete_guess_shakes_and_alerts() {
        let mut app = ready_app(Arc::new(Fixed("manzo")));
        let now = Instant::now();
        type_word(&mut app, "man", now);
        app.handle_key(key(KeyCode::Enter), now);

        assert!(matches!(app.animation.map(|a| a.effect()), Some(Effect::Shake { row: 0 })));
        assert!(app.alerts.iter().any(|a| a.text == "Not enough letters"));
        assert_eq!(app.session.attempts_remaining(), 6);

        // Shake does not lock typing
        app.handle_key(key(KeyCode::Char('z')), now);
        assert_eq!(app.session.buffer(), b"manz");
    }

    #[test]
    fn reveal_locks_input_then_colors_keyboard() {
        let mut app = ready_app(Arc::new(Fixed("manzo")));
        let now = Instant::now();
        type_word(&mut app, "perro", now);
        app.handle_key(key(KeyCode::Enter), now);

        assert_eq!(app.session.attempts_remaining(), 5);
        assert!(app.input_locked());
        app.handle_key(key(KeyCode::Char('a')), now);
        assert!(app.session.buffer().is_empty());
        // Colors wait for the reveal
        assert_eq!(app.keyboard.status(b'o'), None);

        app.tick(now + Duration::from_secs(2));
        assert!(!app.input_locked());
        assert_eq!(app.keyboard.status(b'o'), Some(Verdict::Correct));
        assert_eq!(app.keyboard.status(b'p'), Some(Verdict::Wrong));
        assert!(app.alerts.iter().any(|a| a.text == "5 attempts left"));
        assert_eq!(app.active_row(), 1);
    }

    #[test]
    fn win_dances_and_records_stats() {
        let mut app = ready_app(Arc::new(Fixed("manzo")));
        let now = Instant::now();
        type_word(&mut app, "manzo", now);
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.session.phase(), Phase::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution, vec![1]);

        app.tick(now + Duration::from_secs(2));
        assert!(matches!(app.animation.map(|a| a.effect()), Some(Effect::Dance { row: 0 })));
        assert!(app.alerts.iter().any(|a| a.style == MessageStyle::Success));
    }

    #[test]
    fn alerts_expire() {
        let mut app = App::new(WordFetcher::new(Arc::new(Fixed("manzo")), "es"), 6);
        let now = Instant::now();
        app.add_alert("short", MessageStyle::Info, now, true);
        app.add_alert("sticky", MessageStyle::Error, now, false);

        app.tick(now + ALERT_DURATION + Duration::from_millis(1));
        let texts: Vec<_> = app.alerts.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["sticky"]);
    }

    #[test]
    fn alerts_are_capped() {
        let mut app = App::new(WordFetcher::new(Arc::new(Fixed("manzo")), "es"), 6);
        let now = Instant::now();
        for i in 0..8 {
            app.add_alert(&format!("alert {i}"), MessageStyle::Info, now, false);
        }
        assert_eq!(app.alerts.len(), MAX_ALERTS);
        assert_eq!(app.alerts[0].text, "alert 3");
    }

    #[test]
    fn fetch_failure_offers_retry() {
        let mut app = ready_app(Arc::new(Down));
        assert!(app.fetch_failed);
        assert_eq!(app.session.phase(), Phase::AwaitingWord);

        let round = app.session.round();
        app.handle_key(key(KeyCode::Enter), Instant::now());
        assert!(app.session.round() > round);
        assert!(!app.fetch_failed);
    }

    #[test]
    fn escape_quits() {
        let mut app = App::new(WordFetcher::new(Arc::new(Fixed("manzo")), "es"), 6);
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn restart_mid_round_discards_state() {
        let mut app = ready_app(Arc::new(Fixed("manzo")));
        type_word(&mut app, "per", Instant::now());
        app.handle_key(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert_eq!(app.session.phase(), Phase::AwaitingWord);
        assert!(app.session.buffer().is_empty());
    }
}
