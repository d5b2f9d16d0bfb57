//! Game session state
//!
//! Owns the answer and the guess history, and keeps the aggregate letter
//! sets used for keyboard hints.

use super::KeyboardHints;
use crate::core::{GuessResult, Word, WordError};
use std::collections::BTreeSet;

/// One game against a fixed answer
///
/// `add_guess` is the only mutator. The aggregate sets are unions of every
/// guess's sets, except that a letter known to be correct is never kept in
/// the misplaced set.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    history: Vec<GuessResult>,
    correct_letters: BTreeSet<char>,
    misplaced_letters: BTreeSet<char>,
    unused_letters: BTreeSet<char>,
}

impl GameSession {
    /// Start a session for `answer`
    ///
    /// # Errors
    /// Returns [`WordError::InvalidLength`] if the answer has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::game::GameSession;
    ///
    /// let mut session = GameSession::new("abbey").unwrap();
    /// let result = session.add_guess("babes").unwrap();
    /// assert!(!result.is_correct());
    /// assert_eq!(session.guess_count(), 1);
    /// ```
    pub fn new(answer: &str) -> Result<Self, WordError> {
        Ok(Self::with_answer(Word::new(answer)?))
    }

    /// Start a session for an already validated answer
    #[must_use]
    pub const fn with_answer(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::new(),
            correct_letters: BTreeSet::new(),
            misplaced_letters: BTreeSet::new(),
            unused_letters: BTreeSet::new(),
        }
    }

    /// Score a guess and fold it into the aggregate letter sets
    ///
    /// # Errors
    /// Returns [`WordError::InvalidLength`] if the guess has the wrong length.
    /// The session is left untouched in that case.
    pub fn add_guess(&mut self, guess: &str) -> Result<&GuessResult, WordError> {
        let guess = Word::new(guess)?;
        let result = GuessResult::evaluate(&guess, &self.answer);

        self.correct_letters
            .extend(result.correct_letters().iter().copied());
        self.misplaced_letters
            .extend(result.misplaced_letters().iter().copied());
        self.unused_letters
            .extend(result.unused_letters().iter().copied());

        // A letter correct in any guess clears earlier misplaced marks
        let correct = &self.correct_letters;
        self.misplaced_letters.retain(|letter| !correct.contains(letter));

        self.history.push(result);
        tracing::debug!(
            guess = %guess,
            turn = self.history.len(),
            solved = self.is_solved(),
            "guess added"
        );

        Ok(&self.history[self.history.len() - 1])
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// The answer, for the end-of-game reveal
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Every scored guess, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The most recent guess, if any
    #[must_use]
    pub fn last_guess(&self) -> Option<&GuessResult> {
        self.history.last()
    }

    /// Check whether the most recent guess was fully correct
    ///
    /// This is a query only; the session keeps accepting guesses.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_guess().is_some_and(GuessResult::is_correct)
    }

    /// Letters correct in at least one guess
    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    /// Letters misplaced in some guess and never correct in any
    #[inline]
    #[must_use]
    pub const fn misplaced_letters(&self) -> &BTreeSet<char> {
        &self.misplaced_letters
    }

    /// Letters judged unused in at least one guess
    #[inline]
    #[must_use]
    pub const fn unused_letters(&self) -> &BTreeSet<char> {
        &self.unused_letters
    }

    /// Per-key keyboard state built from the aggregate sets
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_sets(
            &self.correct_letters,
            &self.misplaced_letters,
            &self.unused_letters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use pretty_assertions::assert_eq;

    fn set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn new_session_is_empty() {
        let session = GameSession::new("crane").unwrap();
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.answer().to_string(), "crane");
        assert!(session.history().is_empty());
        assert!(session.last_guess().is_none());
        assert!(!session.is_solved());
        assert!(session.correct_letters().is_empty());
        assert!(session.misplaced_letters().is_empty());
        assert!(session.unused_letters().is_empty());
    }

    #[test]
    fn new_session_rejects_bad_answer_length() {
        assert_eq!(
            GameSession::new("cranes").unwrap_err(),
            WordError::InvalidLength {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn add_guess_returns_result_and_records_history() {
        let mut session = GameSession::new("abbey").unwrap();
        let result = session.add_guess("babes").unwrap().clone();

        assert_eq!(session.guess_count(), 1);
        assert_eq!(session.history(), &[result.clone()]);
        assert_eq!(session.last_guess(), Some(&result));
        assert_eq!(session.correct_letters(), &set("be"));
        assert_eq!(session.misplaced_letters(), &set("a"));
        assert_eq!(session.unused_letters(), &set("s"));
    }

    #[test]
    fn later_correct_clears_earlier_misplaced() {
        let mut session = GameSession::new("crane").unwrap();

        session.add_guess("react").unwrap();
        assert_eq!(session.correct_letters(), &set("a"));
        assert_eq!(session.misplaced_letters(), &set("cer"));

        // r was misplaced above and is correct here
        session.add_guess("brand").unwrap();
        assert_eq!(session.correct_letters(), &set("anr"));
        assert_eq!(session.misplaced_letters(), &set("ce"));
        assert!(session.misplaced_letters().is_disjoint(session.correct_letters()));
    }

    #[test]
    fn misplaced_after_correct_is_not_readded() {
        let mut session = GameSession::new("crane").unwrap();
        session.add_guess("crust").unwrap();
        assert_eq!(session.correct_letters(), &set("cr"));

        // c is misplaced in this guess but already known to be correct
        session.add_guess("amice").unwrap();
        assert!(!session.misplaced_letters().contains(&'c'));
        assert_eq!(session.misplaced_letters(), &set("a"));
        assert_eq!(session.correct_letters(), &set("cer"));
    }

    #[test]
    fn unused_set_accumulates() {
        let mut session = GameSession::new("crane").unwrap();
        session.add_guess("fight").unwrap();
        session.add_guess("plumb").unwrap();
        assert_eq!(session.unused_letters(), &set("bfghilmptu"));
    }

    #[test]
    fn invalid_guess_leaves_session_untouched() {
        let mut session = GameSession::new("crane").unwrap();
        session.add_guess("react").unwrap();
        let before = session.clone();

        assert!(matches!(
            session.add_guess("re"),
            Err(WordError::InvalidLength { actual: 2, .. })
        ));
        assert!(session.add_guess("reacts").is_err());

        assert_eq!(session.guess_count(), 1);
        assert_eq!(session.history(), before.history());
        assert_eq!(session.correct_letters(), before.correct_letters());
        assert_eq!(session.misplaced_letters(), before.misplaced_letters());
        assert_eq!(session.unused_letters(), before.unused_letters());
    }

    #[test]
    fn guess_count_tracks_successful_guesses() {
        let mut session = GameSession::new("crane").unwrap();
        let mut accepted = 0;
        for guess in ["slate", "x", "brine", "crane", "cranes"] {
            if session.add_guess(guess).is_ok() {
                accepted += 1;
            }
            assert_eq!(session.guess_count(), accepted);
        }
        assert_eq!(session.guess_count(), 3);
    }

    #[test]
    fn solved_is_a_query_not_a_terminal_state() {
        let mut session = GameSession::new("crane").unwrap();
        session.add_guess("crane").unwrap();
        assert!(session.is_solved());

        session.add_guess("slate").unwrap();
        assert!(!session.is_solved());
        assert_eq!(session.guess_count(), 2);
    }

    #[test]
    fn replaying_guesses_gives_identical_state() {
        let guesses = ["erase", "speck", "spied", "speed"];
        let play = || {
            let mut session = GameSession::new("speed").unwrap();
            for guess in guesses {
                session.add_guess(guess).unwrap();
            }
            session
        };

        let first = play();
        let second = play();
        assert_eq!(first.history(), second.history());
        assert_eq!(first.correct_letters(), second.correct_letters());
        assert_eq!(first.misplaced_letters(), second.misplaced_letters());
        assert_eq!(first.unused_letters(), second.unused_letters());
        assert!(first.is_solved());
    }

    #[test]
    fn keyboard_hints_follow_aggregates() {
        let mut session = GameSession::new("crane").unwrap();
        session.add_guess("react").unwrap();
        session.add_guess("brand").unwrap();

        let hints = session.keyboard_hints();
        assert_eq!(hints.status_of('r'), LetterStatus::Correct);
        assert_eq!(hints.status_of('c'), LetterStatus::Misplaced);
        assert_eq!(hints.status_of('t'), LetterStatus::Unused);
        assert_eq!(hints.status_of('z'), LetterStatus::Unknown);
    }
}
