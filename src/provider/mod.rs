//! Target word providers
//!
//! A provider hands out one target word per request. The session never
//! talks to a provider directly: [`WordFetcher`] runs requests off the UI
//! thread and tags each answer with the round that asked for it.

mod embedded;
mod fallback;
mod fetcher;
mod remote;

pub use embedded::EmbeddedWordProvider;
pub use fallback::FallbackProvider;
pub use fetcher::{FetchResult, WordFetcher};
pub use remote::{DEFAULT_API_URL, RemoteWordProvider};

use crate::core::{WORD_LENGTH, Word, WordError};
use thiserror::Error;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "es";

/// Errors raised while obtaining a target word
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("word provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("provider returned unusable word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("only 5-letter words are supported, requested {0}")]
    UnsupportedLength(usize),

    #[error("word list is empty")]
    EmptyWordList,
}

/// Source of target words
pub trait WordProvider: Send + Sync {
    /// Short name for logs and status lines
    fn name(&self) -> &'static str;

    /// Fetch one lowercase word of `length` letters in `language`
    ///
    /// # Errors
    /// Returns `ProviderError` when no usable word can be produced.
    fn fetch_target_word(&self, language: &str, length: usize) -> Result<Word, ProviderError>;
}

/// Fold a raw provider word into the game alphabet
///
/// Trims, transliterates accented letters to ASCII (`á` → `a`, `ñ` → `n`)
/// and lowercases before validating.
///
/// # Errors
/// Returns `ProviderError::InvalidWord` when the folded word is not five
/// letters of `a..=z`.
///
/// # Examples
/// ```
/// use palabra::provider::normalize_word;
///
/// assert_eq!(normalize_word(" Árbol ").unwrap().text(), "arbol");
/// assert!(normalize_word("casas!").is_err());
/// ```
pub fn normalize_word(raw: &str) -> Result<Word, ProviderError> {
    let folded = deunicode::deunicode(raw.trim()).to_lowercase();
    Word::new(folded).map_err(|source| ProviderError::InvalidWord {
        word: raw.to_string(),
        source,
    })
}

pub(crate) fn check_length(length: usize) -> Result<(), ProviderError> {
    if length == WORD_LENGTH {
        Ok(())
    } else {
        Err(ProviderError::UnsupportedLength(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_accents_and_case() {
        assert_eq!(normalize_word("LIMÓN").unwrap().text(), "limon");
        assert_eq!(normalize_word("señal").unwrap().text(), "senal");
        assert_eq!(normalize_word("  perro\n").unwrap().text(), "perro");
    }

    #[test]
    fn normalize_rejects_wrong_length() {
        let err = normalize_word("sol").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidWord {
                source: WordError::InvalidLength(3),
                ..
            }
        ));
    }

    #[test]
    fn normalize_rejects_symbols() {
        assert!(matches!(
            normalize_word("ca-sa"),
            Err(ProviderError::InvalidWord {
                source: WordError::InvalidCharacters,
                ..
            })
        ));
    }

    #[test]
    fn check_length_only_accepts_five() {
        assert!(check_length(5).is_ok());
        assert!(matches!(
            check_length(6),
            Err(ProviderError::UnsupportedLength(6))
        ));
    }
}
