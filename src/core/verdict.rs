//! Guess evaluation and per-letter verdicts
//!
//! The evaluator scores a guess against the target with the standard
//! two-pass rules, so repeated letters never receive more hints than the
//! target can account for.

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    /// Letter is not in the target (or every copy is already accounted for)
    Wrong,
    /// Letter is in the target, at another position
    WrongLocation,
    /// Letter is at the correct position
    Correct,
}

impl Verdict {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// Scored guess: each guessed letter paired with its verdict
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    guess: Word,
    verdicts: [Verdict; WORD_LENGTH],
}

impl GuessResult {
    /// The guessed word
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Verdicts in letter order
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// `(letter, verdict)` pairs in letter order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Render the verdicts as a row of emoji squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and remove them from the
///    pool of available target letters
/// 2. Second pass: for the remaining positions, left to right, mark
///    `WrongLocation` while the pool still holds that letter, else `Wrong`
///
/// # Examples
/// ```
/// use palabra::core::{Verdict, Word, evaluate};
///
/// let target = Word::new("abcde").unwrap();
/// let guess = Word::new("eabcd").unwrap();
/// let result = evaluate(&target, &guess);
///
/// assert_eq!(result.count(Verdict::WrongLocation), 5);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> GuessResult {
    let mut verdicts = [Verdict::Wrong; WORD_LENGTH];
    let mut available = target.letter_counts();

    // Allow: index needed to compare guess[i] with target[i] and set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.letter_at(i);
        if letter == target.letter_at(i) {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            verdicts[i] = Verdict::WrongLocation;
            *count -= 1;
        }
    }

    GuessResult {
        guess: guess.clone(),
        verdicts,
    }
}

/// Score raw strings, validating both sides first
///
/// # Errors
/// Returns `WordError::InvalidLength` (or another `WordError`) when either
/// string is not a valid five-letter word. A mismatch here means the caller
/// skipped validation.
pub fn evaluate_str(target: &str, guess: &str) -> Result<GuessResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&target, &guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Correct, Wrong, WrongLocation};

    fn score(target: &str, guess: &str) -> GuessResult {
        evaluate_str(target, guess).unwrap()
    }

    /// Non-`Wrong` verdicts for `letter` across the whole guess
    fn hinted(result: &GuessResult, letter: u8) -> usize {
        result
            .iter()
            .filter(|&(l, v)| l == letter && v != Wrong)
            .count()
    }

    #[test]
    fn exact_guess_is_all_correct() {
        let result = score("manzo", "manzo");
        assert_eq!(result.verdicts(), &[Correct; 5]);
        assert!(result.is_win());
    }

    #[test]
    fn rotation_is_all_wrong_location() {
        let result = score("abcde", "eabcd");
        assert_eq!(result.verdicts(), &[WrongLocation; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn disjoint_letters_are_all_wrong() {
        let result = score("perro", "lunas");
        assert_eq!(result.verdicts(), &[Wrong; 5]);
    }

    #[test]
    fn exact_matches_consume_the_pool_first() {
        // Two 'a's in the target, both matched in place; the other three are spent
        let result = score("mamas", "aaaaa");
        assert_eq!(hinted(&result, b'a'), 2);
        assert_eq!(result.verdicts(), &[Wrong, Correct, Wrong, Correct, Wrong]);
    }

    #[test]
    fn single_target_letter_hints_once() {
        // One 'o' in the target: the first guessed 'o' is hinted, the second is not
        let result = score("lindo", "oosas");
        assert_eq!(result.verdicts()[0], WrongLocation);
        assert_eq!(result.verdicts()[1], Wrong);
        assert_eq!(hinted(&result, b'o'), 1);
    }

    #[test]
    fn later_exact_match_beats_earlier_misplaced_copy() {
        // 'o' only at position 4 in the target; the exact match keeps it
        let result = score("lindo", "ocaso");
        assert_eq!(result.verdicts()[0], Wrong);
        assert_eq!(result.verdicts()[4], Correct);
    }

    #[test]
    fn mixed_feedback() {
        let result = score("perro", "pared");
        assert_eq!(
            result.verdicts(),
            &[Correct, Wrong, Correct, WrongLocation, Wrong]
        );
    }

    #[test]
    fn hints_never_exceed_target_multiplicity() {
        let words = [
            "mamas", "aaaaa", "perro", "arroz", "sueno", "llama", "rocas", "abcde", "eabcd",
            "zorro",
        ];
        for target in words {
            for guess in words {
                let result = score(target, guess);
                let target_word = Word::new(target).unwrap();
                let counts = target_word.letter_counts();
                for letter in b'a'..=b'z' {
                    let allowed = counts.get(&letter).copied().unwrap_or(0) as usize;
                    assert!(
                        hinted(&result, letter) <= allowed,
                        "{guess} vs {target}: letter {} over-hinted",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn evaluation_is_pure() {
        assert_eq!(score("llama", "malla"), score("llama", "malla"));
    }

    #[test]
    fn evaluate_str_rejects_bad_length() {
        assert_eq!(
            evaluate_str("abcd", "abcde"),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            evaluate_str("abcde", "abcdef"),
            Err(WordError::InvalidLength(6))
        );
    }

    #[test]
    fn emoji_and_counts() {
        let result = score("perro", "pared");
        assert_eq!(result.to_emoji(), "🟩⬜🟩🟨⬜");
        assert_eq!(result.count(Correct), 2);
        assert_eq!(result.count(WrongLocation), 1);
        assert_eq!(result.count(Wrong), 2);
        assert_eq!(format!("{result}"), "pared 🟩⬜🟩🟨⬜");
    }

    #[test]
    fn iter_pairs_letters_with_verdicts() {
        let result = score("abcde", "abzzz");
        let pairs: Vec<_> = result.iter().collect();
        assert_eq!(pairs[0], (b'a', Correct));
        assert_eq!(pairs[2], (b'z', Wrong));
        assert_eq!(pairs.len(), 5);
    }

    #[test]
    fn verdict_ordering_ranks_correct_highest() {
        assert!(Correct > WrongLocation);
        assert!(WrongLocation > Wrong);
    }
}
