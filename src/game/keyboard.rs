//! Keyboard hint state
//!
//! Maps each key of a QWERTY layout to the best status known for it.

use crate::core::LetterStatus;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Key rows, top to bottom
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Status of every keyboard key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    keys: FxHashMap<char, LetterStatus>,
}

impl KeyboardHints {
    /// Build key states from aggregate letter sets
    ///
    /// Sets are applied unused, then misplaced, then correct, so a later
    /// set overwrites an earlier one for the same key.
    #[must_use]
    pub fn from_sets(
        correct: &BTreeSet<char>,
        misplaced: &BTreeSet<char>,
        unused: &BTreeSet<char>,
    ) -> Self {
        let mut keys = FxHashMap::default();
        for (letters, status) in [
            (unused, LetterStatus::Unused),
            (misplaced, LetterStatus::Misplaced),
            (correct, LetterStatus::Correct),
        ] {
            for &letter in letters {
                keys.insert(letter, status);
            }
        }
        Self { keys }
    }

    /// Status of one key; `Unknown` if no guess has touched it
    #[must_use]
    pub fn status_of(&self, key: char) -> LetterStatus {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Every row of the layout with each key's status
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(char, LetterStatus)>> {
        KEY_ROWS
            .iter()
            .map(|row| row.chars().map(|key| (key, self.status_of(key))).collect())
            .collect()
    }
}
