//! Guess evaluation
//!
//! Classifies every letter of a guess against the answer and collects the
//! per-guess hint sets. Duplicate letters are resolved in three passes:
//! exact matches, letters absent from the answer, then misplaced letters
//! drawn from a claimable multiset of the answer letters not already
//! matched exactly.

use super::{LetterCounts, LetterStatus, WORD_LENGTH, Word, WordError};
use std::collections::BTreeSet;

/// The scored outcome of one guess
///
/// Letter sets are filled per position. A symbol that is correct at one
/// index can also be unused at another index of the same guess, but it is
/// never added to `misplaced_letters` once it is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    statuses: [LetterStatus; WORD_LENGTH],
    correct_letters: BTreeSet<char>,
    misplaced_letters: BTreeSet<char>,
    unused_letters: BTreeSet<char>,
    is_correct: bool,
}

impl GuessResult {
    /// Score `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("babes").unwrap();
    /// let answer = Word::new("abbey").unwrap();
    /// let result = GuessResult::evaluate(&guess, &answer);
    ///
    /// assert_eq!(result.statuses()[0], LetterStatus::Misplaced);
    /// assert_eq!(result.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(result.statuses()[4], LetterStatus::Unused);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut statuses = [LetterStatus::Unknown; WORD_LENGTH];
        let mut correct_letters = BTreeSet::new();
        let mut misplaced_letters = BTreeSet::new();
        let mut unused_letters = BTreeSet::new();

        // First pass: exact position matches
        for (i, (&letter, &target)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if letter == target {
                statuses[i] = LetterStatus::Correct;
                correct_letters.insert(letter);
            }
        }

        // Second pass: letters that appear nowhere in the original answer
        for (status, &letter) in statuses.iter_mut().zip(guess.chars()) {
            if *status == LetterStatus::Unknown && !answer.has_letter(letter) {
                *status = LetterStatus::Unused;
                unused_letters.insert(letter);
            }
        }

        let mut claimable: LetterCounts = statuses
            .iter()
            .zip(answer.chars())
            .filter(|(status, _)| **status != LetterStatus::Correct)
            .map(|(_, &target)| target)
            .collect();

        // Third pass: misplaced while unclaimed copies remain, unused after
        for (status, &letter) in statuses.iter_mut().zip(guess.chars()) {
            if *status != LetterStatus::Unknown {
                continue;
            }

            if claimable.claim(letter) {
                *status = LetterStatus::Misplaced;
                if !correct_letters.contains(&letter) {
                    misplaced_letters.insert(letter);
                }
            } else {
                *status = LetterStatus::Unused;
                unused_letters.insert(letter);
            }
        }

        let is_correct = statuses.iter().all(|&s| s == LetterStatus::Correct);

        tracing::trace!(
            guess = %guess,
            statuses = %statuses.iter().map(|s| s.code()).collect::<String>(),
            "evaluated guess"
        );

        Self {
            guess: *guess,
            statuses,
            correct_letters,
            misplaced_letters,
            unused_letters,
            is_correct,
        }
    }

    /// The word that was scored
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Status of each position, index-aligned with the guess
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Letters matched at their exact position in this guess
    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    /// Letters present elsewhere in the answer and not correct in this guess
    #[inline]
    #[must_use]
    pub const fn misplaced_letters(&self) -> &BTreeSet<char> {
        &self.misplaced_letters
    }

    /// Letters with at least one position judged unused
    #[inline]
    #[must_use]
    pub const fn unused_letters(&self) -> &BTreeSet<char> {
        &self.unused_letters
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Iterate over `(letter, status)` pairs in guess order
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.guess
            .chars()
            .iter()
            .copied()
            .zip(self.statuses.iter().copied())
    }
}

/// Score a guess string against an answer string
///
/// # Errors
/// Returns [`WordError::InvalidLength`] if either string is not
/// [`WORD_LENGTH`] characters long.
///
/// # Examples
/// ```
/// use wordle_hints::core::evaluate;
///
/// let result = evaluate("crane", "crane").unwrap();
/// assert!(result.is_correct());
///
/// assert!(evaluate("cranes", "crane").is_err());
/// ```
pub fn evaluate(guess: &str, answer: &str) -> Result<GuessResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(GuessResult::evaluate(&guess, &answer))
}
