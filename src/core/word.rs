//! Fixed-length word representation
//!
//! A Word is exactly [`WORD_LENGTH`] symbols. Symbols are compared exactly;
//! case normalization is the caller's job.

use super::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

/// Error type for words that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Guess or answer is not [`WORD_LENGTH`] symbols long
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// A fixed-length guess or answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [char; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns [`WordError::InvalidLength`] if `text` is not exactly
    /// [`WORD_LENGTH`] characters. The text is never truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut chars = ['\0'; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        Ok(Self { chars })
    }

    /// Get the word as a symbol array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific symbol anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
