//! Offline provider drawing from a local word list

use super::{ProviderError, WordProvider, check_length};
use crate::core::Word;
use crate::wordlists::{WORDS, loader};
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::debug;

/// Picks a uniformly random word from a fixed list
///
/// The list carries no language tag; it answers every request the same way.
pub struct EmbeddedWordProvider {
    words: Vec<Word>,
}

impl EmbeddedWordProvider {
    /// Provider over the word list compiled into the binary
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Provider over a word list file, one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::from_words(loader::load_from_file(path)?))
    }

    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for EmbeddedWordProvider {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn fetch_target_word(&self, language: &str, length: usize) -> Result<Word, ProviderError> {
        check_length(length)?;
        debug!(language, candidates = self.words.len(), "picking word from local list");

        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(ProviderError::EmptyWordList)
    }
}
