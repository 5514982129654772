//! Palabra - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use palabra::{
    commands::{run_score, run_simple},
    config::GameConfig,
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
    provider::WordFetcher,
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "palabra",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: GameConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score a guess against a target word and exit
    Score {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config;
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&command, &config.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Off,
        (_, None) => LogTarget::Stderr,
    };
    init_logging(config.verbose, log_target)?;

    match command {
        Commands::Play => {
            let fetcher = WordFetcher::new(config.build_provider()?, config.language.clone());
            run_tui(App::new(fetcher, config.max_attempts))
        }
        Commands::Simple => {
            let fetcher = WordFetcher::new(config.build_provider()?, config.language.clone());
            // Allow the fallback provider time to answer after a remote timeout
            let wait = config.timeout() + Duration::from_secs(2);
            run_simple(&fetcher, config.max_attempts, wait)
        }
        Commands::Score { target, guess } => run_score(&target, &guess),
    }
}
