//! Provider chain: try one source, then another

use super::{ProviderError, WordProvider};
use crate::core::Word;
use tracing::warn;

/// Asks `primary` first and `fallback` only when it fails
pub struct FallbackProvider {
    primary: Box<dyn WordProvider>,
    fallback: Box<dyn WordProvider>,
}

impl FallbackProvider {
    #[must_use]
    pub fn new(primary: Box<dyn WordProvider>, fallback: Box<dyn WordProvider>) -> Self {
        Self { primary, fallback }
    }
}

impl WordProvider for FallbackProvider {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn fetch_target_word(&self, language: &str, length: usize) -> Result<Word, ProviderError> {
        match self.primary.fetch_target_word(language, length) {
            Ok(word) => Ok(word),
            Err(err) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "primary word provider failed, falling back"
                );
                self.fallback.fetch_target_word(language, length)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn uses_primary_when_it_works() {
        let provider = FallbackProvider::new(Box::new(Fixed("manzo")), Box::new(Fixed("perro")));
        assert_eq!(provider.fetch_target_word("es", 5).unwrap().text(), "manzo");
    }

    #[test]
    fn falls_back_on_failure() {
        let provider = FallbackProvider::new(Box::new(Down), Box::new(Fixed("perro")));
        assert_eq!(provider.fetch_target_word("es", 5).unwrap().text(), "perro");
    }

    #[test]
    fn reports_fallback_error_when_both_fail() {
        let provider = FallbackProvider::new(Box::new(Down), Box::new(Down));
        assert!(matches!(
            provider.fetch_target_word("es", 5),
            Err(ProviderError::Unavailable(_))
        ));
    }
}
