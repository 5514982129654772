//! On-screen keyboard status
//!
//! Maps each letter to the best verdict it has earned this round.

use crate::core::{GuessResult, Verdict};

/// Keyboard layout rows, as drawn
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best verdict seen for every letter `a..=z`
///
/// A letter only ever moves up: `Wrong < WrongLocation < Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<Verdict>; 26],
}

const fn index(letter: u8) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower - b'a') as usize)
    } else {
        None
    }
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the key colors
    pub fn apply(&mut self, result: &GuessResult) {
        for (letter, verdict) in result.iter() {
            if let Some(i) = index(letter) {
                self.keys[i] = Some(self.keys[i].map_or(verdict, |seen| seen.max(verdict)));
            }
        }
    }

    /// Status for a letter, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<Verdict> {
        index(letter).and_then(|i| self.keys[i])
    }

    pub fn clear(&mut self) {
        self.keys = [None; 26];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;

    #[test]
    fn unseen_letters_have_no_status() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.status(b'a'), None);
        assert_eq!(keyboard.status(b'1'), None);
    }

    #[test]
    fn apply_records_verdicts() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&evaluate_str("perro", "pared").unwrap());

        assert_eq!(keyboard.status(b'p'), Some(Verdict::Correct));
        assert_eq!(keyboard.status(b'e'), Some(Verdict::WrongLocation));
        assert_eq!(keyboard.status(b'a'), Some(Verdict::Wrong));
        assert_eq!(keyboard.status(b'P'), Some(Verdict::Correct));
    }

    #[test]
    fn status_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&evaluate_str("perro", "pared").unwrap());
        // 'p' is wrong-location here, but it was already correct
        keyboard.apply(&evaluate_str("perro", "sopas").unwrap());
        assert_eq!(keyboard.status(b'p'), Some(Verdict::Correct));
        // 'o' upgrades from unseen to wrong-location
        assert_eq!(keyboard.status(b'o'), Some(Verdict::WrongLocation));
    }

    #[test]
    fn duplicate_letter_keeps_best_verdict() {
        let mut keyboard = KeyboardState::new();
        // second 'a' is correct, first is wrong; the key shows correct
        keyboard.apply(&evaluate_str("mamas", "aaaaa").unwrap());
        assert_eq!(keyboard.status(b'a'), Some(Verdict::Correct));
    }

    #[test]
    fn clear_resets_everything() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&evaluate_str("perro", "pared").unwrap());
        keyboard.clear();
        assert_eq!(keyboard, KeyboardState::new());
    }

    #[test]
    fn layout_covers_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }
}
