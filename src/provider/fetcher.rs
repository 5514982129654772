//! Background word fetching
//!
//! Requests run on worker threads; results come back over a channel tagged
//! with the round that asked, so the event loop can poll without blocking
//! and drop answers that arrive after a restart.

use super::{ProviderError, WordProvider};
use crate::core::{WORD_LENGTH, Word};
use crate::game::RoundId;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Answer to one fetch request
#[derive(Debug)]
pub struct FetchResult {
    pub round: RoundId,
    pub result: Result<Word, ProviderError>,
}

pub struct WordFetcher {
    provider: Arc<dyn WordProvider>,
    language: String,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl WordFetcher {
    #[must_use]
    pub fn new(provider: Arc<dyn WordProvider>, language: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            language: language.into(),
            tx,
            rx,
        }
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Start fetching a target word for `round`
    ///
    /// Exactly one [`FetchResult`] is delivered per request.
    pub fn request(&self, round: RoundId) {
        let provider = Arc::clone(&self.provider);
        let language = self.language.clone();
        let tx = self.tx.clone();

        debug!(%round, provider = provider.name(), "fetch requested");
        thread::spawn(move || {
            let result = provider.fetch_target_word(&language, WORD_LENGTH);
            if let Err(err) = &result {
                error!(%round, error = %err, "failed to fetch target word");
            }
            // Receiver only disappears when the fetcher is dropped
            let _ = tx.send(FetchResult { round, result });
        });
    }

    /// Next finished fetch, if any, without blocking
    #[must_use]
    pub fn try_next(&self) -> Option<FetchResult> {
        self.rx.try_recv().ok()
    }

    /// Block up to `timeout` for the next finished fetch
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<FetchResult> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
