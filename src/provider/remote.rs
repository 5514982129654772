//! HTTP word provider backed by a random-word API

use super::{ProviderError, WordProvider, check_length, normalize_word};
use crate::core::Word;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Random-word service queried by default
pub const DEFAULT_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Fetches words with `GET {base_url}?lang={language}&length={length}`
///
/// The service answers with a JSON array of strings; the first entry is used.
pub struct RemoteWordProvider {
    client: Client,
    base_url: String,
}

impl RemoteWordProvider {
    /// Build a provider with a per-request timeout
    ///
    /// # Errors
    /// Returns `ProviderError::Unavailable` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Extract the target from a response body like `["manzo"]`
pub(crate) fn parse_response(body: &str) -> Result<Word, ProviderError> {
    let words: Vec<String> =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let first = words
        .first()
        .ok_or_else(|| ProviderError::Malformed("empty word array".to_string()))?;

    normalize_word(first)
}

impl WordProvider for RemoteWordProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn fetch_target_word(&self, language: &str, length: usize) -> Result<Word, ProviderError> {
        check_length(length)?;

        let length_param = length.to_string();
        debug!(url = %self.base_url, language, length, "requesting target word");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("lang", language), ("length", length_param.as_str())])
            .send()
            .map_err(|e| ProviderError::Unavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "service returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| ProviderError::Unavailable(format!("failed to read body: {e}")))?;

        let word = parse_response(&body)?;
        info!("target word received from remote provider");
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_takes_first_word() {
        let word = parse_response(r#"["Manzo", "perro"]"#).unwrap();
        assert_eq!(word.text(), "manzo");
    }

    #[test]
    fn parse_folds_accents() {
        let word = parse_response(r#"["lápiz"]"#).unwrap();
        assert_eq!(word.text(), "lapiz");
    }

    #[test]
    fn parse_rejects_empty_array() {
        assert!(matches!(
            parse_response("[]"),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(matches!(
            parse_response(r#"{"word": "manzo"}"#),
            Err(ProviderError::Malformed(_))
        ));
        assert!(matches!(
            parse_response("<html>"),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_wrong_length_word() {
        assert!(matches!(
            parse_response(r#"["camion"]"#),
            Err(ProviderError::InvalidWord { .. })
        ));
    }

    #[test]
    fn unsupported_length_fails_before_any_request() {
        // Unroutable address: reaching the network would fail differently
        let provider =
            RemoteWordProvider::new("http://127.0.0.1:9/word", Duration::from_millis(50)).unwrap();
        assert!(matches!(
            provider.fetch_target_word("es", 7),
            Err(ProviderError::UnsupportedLength(7))
        ));
    }

    #[test]
    fn unreachable_service_is_unavailable() {
        let provider =
            RemoteWordProvider::new("http://127.0.0.1:9/word", Duration::from_millis(200)).unwrap();
        assert_eq!(provider.base_url(), "http://127.0.0.1:9/word");
        assert!(matches!(
            provider.fetch_target_word("es", 5),
            Err(ProviderError::Unavailable(_))
        ));
    }
}
