//! Word lists for offline play
//!
//! The embedded list backs the offline provider and is the fallback when
//! the remote service cannot be reached.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not playable");
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn list_is_not_trivial() {
        assert!(WORDS_COUNT >= 100, "expected a usable word list");
    }
}
