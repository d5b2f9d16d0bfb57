//! Per-letter feedback status
//!
//! The status of a single guess position. Single-character codes, emoji and
//! color names are display helpers only; the core works with the enum.

use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Not yet classified. Only seen while a guess is being evaluated,
    /// or on keyboard keys that no guess has touched.
    #[default]
    Unknown,
    /// Right letter, right position
    Correct,
    /// Letter is in the answer at a position not already claimed
    Misplaced,
    /// Letter is not in the answer, or every copy is already claimed
    Unused,
}

impl LetterStatus {
    /// Single-character code: `U`, `C`, `M` or `I`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Unknown => 'U',
            Self::Correct => 'C',
            Self::Misplaced => 'M',
            Self::Unused => 'I',
        }
    }

    /// Parse a single-character code (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::from_code('c'), Some(LetterStatus::Correct));
    /// assert_eq!(LetterStatus::from_code('x'), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'U' => Some(Self::Unknown),
            'C' => Some(Self::Correct),
            'M' => Some(Self::Misplaced),
            'I' => Some(Self::Unused),
            _ => None,
        }
    }

    /// Square emoji used when sharing a result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Unused | Self::Unknown => '⬜',
        }
    }

    /// Background color name for a tile in this state
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Unknown => "white",
            Self::Correct => "green",
            Self::Misplaced => "yellow",
            Self::Unused => "gray",
        }
    }

    /// True for every status except `Unknown`
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Unused => "unused",
        };
        f.write_str(name)
    }
}
