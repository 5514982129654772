//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole guess and press Enter.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{GameSession, Phase, Statistics, SubmitOutcome};
use crate::output::{KeyboardState, print_keyboard, print_outcome};
use crate::provider::{ProviderError, WordFetcher};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// What the player asked for at a prompt
enum Command {
    Quit,
    NewRound,
    Keyboard,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewRound,
        "keys" | "k" => Command::Keyboard,
        guess => Command::Guess(guess.to_string()),
    }
}

/// Replace the session buffer with `guess`, one letter at a time
///
/// Returns `false` when the guess is longer than a word; the buffer then
/// holds its first five letters but should not be submitted.
fn type_guess(session: &mut GameSession, guess: &str) -> bool {
    while session.delete_last_letter() {}
    for c in guess.chars() {
        session.append_letter(c);
    }
    guess.chars().count() <= WORD_LENGTH
}

/// Wait for the fetch belonging to the session's current round
fn await_target(
    fetcher: &WordFetcher,
    session: &GameSession,
    timeout: Duration,
) -> Option<Result<Word, ProviderError>> {
    let deadline = Instant::now() + timeout;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return None;
        }
        let fetched = fetcher.wait(left)?;
        if fetched.round == session.round() {
            return Some(fetched.result);
        }
        debug!(stale = %fetched.round, "dropping stale fetch result");
    }
}

fn fetch_spinner(provider: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching a word ({provider})..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run the simple interactive CLI mode
///
/// `timeout` bounds how long to wait for a target word before offering a
/// retry.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(fetcher: &WordFetcher, max_attempts: u8, timeout: Duration) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 P A L A B R A                    ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Guess the {WORD_LENGTH}-letter word in {max_attempts} tries.");
    println!("Commands: 'keys' to show the keyboard, 'new' for a new word, 'quit' to exit\n");

    let mut session = GameSession::new(max_attempts);
    let mut stats = Statistics::default();
    let mut keyboard = KeyboardState::new();

    'rounds: loop {
        let round = session.begin_round();
        keyboard.clear();
        fetcher.request(round);

        let spinner = fetch_spinner(fetcher.provider_name());
        let fetched = await_target(fetcher, &session, timeout);
        spinner.finish_and_clear();

        match fetched {
            Some(Ok(word)) => {
                session.resolve(round, word);
            }
            Some(Err(err)) => {
                println!("{} {err}", "Could not get a word:".red().bold());
                if ask_yes_no("Try again?")? {
                    continue 'rounds;
                }
                return Ok(());
            }
            None => {
                println!("{}", "Timed out waiting for a word.".red().bold());
                if ask_yes_no("Try again?")? {
                    continue 'rounds;
                }
                return Ok(());
            }
        }

        while !session.phase().is_ended() {
            let used = session.max_attempts() - session.attempts_remaining();
            let prompt = format!("Guess {}/{}", used + 1, session.max_attempts());
            let Some(input) = get_user_input(&prompt)? else {
                return Ok(());
            };

            match parse_command(&input) {
                Command::Quit => {
                    print_stats(&stats);
                    println!("\n👋 ¡Hasta luego!\n");
                    return Ok(());
                }
                Command::NewRound => {
                    println!("\n🔄 New word!\n");
                    continue 'rounds;
                }
                Command::Keyboard => print_keyboard(&keyboard),
                Command::Guess(guess) => {
                    if !type_guess(&mut session, &guess) {
                        println!("{}", "Too many letters".yellow());
                        continue;
                    }
                    let outcome = session.submit();
                    if let Some(result) = outcome.result() {
                        keyboard.apply(result);
                    }
                    print_outcome(&outcome, session.max_attempts());

                    if matches!(
                        outcome,
                        SubmitOutcome::Won(_)
                            | SubmitOutcome::LostAfterGuess(..)
                            | SubmitOutcome::OutOfAttempts(_)
                    ) {
                        let guesses = session.state().map_or(0, |s| s.guesses().len());
                        stats.record(&outcome, guesses);
                    }
                }
            }
        }

        if session.phase() == Phase::Won {
            println!(
                "  Solved in {} of {} attempts",
                session.max_attempts() - session.attempts_remaining(),
                session.max_attempts()
            );
        }
        print_stats(&stats);

        if !ask_yes_no("Play again?")? {
            println!("\n👋 ¡Hasta luego!\n");
            return Ok(());
        }
    }
}

fn print_stats(stats: &Statistics) {
    println!(
        "\n  Played: {}  Won: {} ({:.0}%)  Streak: {}  Best: {}",
        stats.games_played,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );
    for (i, count) in stats.guess_distribution.iter().enumerate() {
        println!("  {}: {}", i + 1, "█".repeat(*count).green());
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    let answer = get_user_input(&format!("{prompt} (yes/no)"))?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y" | "si" | "s")
    ))
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{EmbeddedWordProvider, WordProvider};
    use std::sync::Arc;

    #[test]
    fn parse_commands() {
        assert!(matches!(parse_command("QUIT"), Command::Quit));
        assert!(matches!(parse_command(" n "), Command::NewRound));
        assert!(matches!(parse_command("keys"), Command::Keyboard));
        assert!(matches!(parse_command("Manzo"), Command::Guess(g) if g == "manzo"));
    }

    #[test]
    fn type_guess_replaces_buffer() {
        let mut session = GameSession::default();
        session.initialize(Word::new("manzo").unwrap());

        assert!(type_guess(&mut session, "per"));
        assert_eq!(session.buffer(), b"per");
        assert!(type_guess(&mut session, "gallo"));
        assert_eq!(session.buffer(), b"gallo");
    }

    #[test]
    fn type_guess_flags_overlong_input() {
        let mut session = GameSession::default();
        session.initialize(Word::new("manzo").unwrap());
        assert!(!type_guess(&mut session, "caballo"));
    }

    #[test]
    fn await_target_skips_stale_rounds() {
        let words = crate::wordlists::loader::words_from_slice(&["manzo"]);
        let provider: Arc<dyn WordProvider> = Arc::new(EmbeddedWordProvider::from_words(words));
        let fetcher = WordFetcher::new(provider, "es");
        let mut session = GameSession::default();

        let stale = session.begin_round();
        fetcher.request(stale);
        let current = session.begin_round();
        fetcher.request(current);

        let word = await_target(&fetcher, &session, Duration::from_secs(5))
            .unwrap()
            .unwrap();
        assert!(session.resolve(current, word));
    }
}
