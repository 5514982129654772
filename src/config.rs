//! Game configuration
//!
//! Parsed from the command line and shared by every front end.

use crate::game::DEFAULT_MAX_ATTEMPTS;
use crate::provider::{
    DEFAULT_API_URL, DEFAULT_LANGUAGE, EmbeddedWordProvider, FallbackProvider,
    RemoteWordProvider, WordProvider,
};
use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Where target words come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordSource {
    /// Random-word web service
    Remote,
    /// Word list bundled with the binary (or --word-list)
    Embedded,
}

#[derive(Debug, Clone, Args)]
pub struct GameConfig {
    /// Language tag sent to the word service
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Guesses allowed per round
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u8).range(1..=12)
    )]
    pub max_attempts: u8,

    /// Word source: remote (default) or embedded
    #[arg(short, long, global = true, value_enum, default_value_t = WordSource::Remote)]
    pub source: WordSource,

    /// Word service endpoint
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout for the word service, in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Do not fall back to the local word list when the service fails
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Custom word list for the local provider, one word per line
    #[arg(short = 'w', long, global = true)]
    pub word_list: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            source: WordSource::Remote,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 10,
            no_fallback: false,
            word_list: None,
            verbose: 0,
            log_file: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check values clap cannot check on its own
    ///
    /// # Errors
    /// Returns an error for an empty language tag or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            bail!("language tag must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    fn local_provider(&self) -> Result<EmbeddedWordProvider> {
        let provider = match &self.word_list {
            Some(path) => EmbeddedWordProvider::from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?,
            None => EmbeddedWordProvider::from_embedded(),
        };
        if provider.is_empty() {
            bail!("word list contains no playable five-letter words");
        }
        Ok(provider)
    }

    /// Assemble the provider chain described by this configuration
    ///
    /// # Errors
    /// Returns an error if the word list cannot be loaded or is empty, or if
    /// the HTTP client cannot be built.
    pub fn build_provider(&self) -> Result<Arc<dyn WordProvider>> {
        self.validate()?;

        let provider: Arc<dyn WordProvider> = match self.source {
            WordSource::Embedded => Arc::new(self.local_provider()?),
            WordSource::Remote => {
                let remote = RemoteWordProvider::new(self.api_url.clone(), self.timeout())
                    .context("failed to set up word service client")?;
                if self.no_fallback {
                    Arc::new(remote)
                } else {
                    Arc::new(FallbackProvider::new(
                        Box::new(remote),
                        Box::new(self.local_provider()?),
                    ))
                }
            }
        };

        debug!(provider = provider.name(), language = %self.language, "word provider ready");
        Ok(provider)
    }
}
