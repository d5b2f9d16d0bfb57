//! Batch scoring command
//!
//! Scores a list of guesses against an answer and reports the per-guess
//! results along with the final hint sets.

use crate::core::{GuessResult, Word, WordError};
use crate::game::{GameSession, KeyboardHints};
use std::collections::BTreeSet;

/// Configuration for scoring a sequence of guesses
pub struct ScoreConfig {
    pub answer: String,
    pub guesses: Vec<String>,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(answer: String, guesses: Vec<String>) -> Self {
        Self { answer, guesses }
    }
}

/// Result of scoring every guess in order
pub struct ScoreResult {
    pub answer: Word,
    pub steps: Vec<GuessResult>,
    pub correct_letters: BTreeSet<char>,
    pub misplaced_letters: BTreeSet<char>,
    pub unused_letters: BTreeSet<char>,
    pub keyboard: KeyboardHints,
    /// 1-based index of the first fully correct guess
    pub solved_at: Option<usize>,
}

/// Score every guess in `config` against its answer
///
/// Guesses after a winning one are still scored.
///
/// # Errors
///
/// Returns [`WordError::InvalidLength`] if the answer or any guess has the
/// wrong length. No partial result is returned.
pub fn score_guesses(config: &ScoreConfig) -> Result<ScoreResult, WordError> {
    let mut session = GameSession::new(&config.answer)?;
    let mut solved_at = None;

    for guess in &config.guesses {
        let result = session.add_guess(guess)?;
        if solved_at.is_none() && result.is_correct() {
            solved_at = Some(session.guess_count());
        }
    }

    Ok(ScoreResult {
        answer: *session.answer(),
        steps: session.history().to_vec(),
        correct_letters: session.correct_letters().clone(),
        misplaced_letters: session.misplaced_letters().clone(),
        unused_letters: session.unused_letters().clone(),
        keyboard: session.keyboard_hints(),
        solved_at,
    })
}
