//! Core domain types for Wordle scoring
//!
//! Pure, synchronous types: words, letter statuses, the claimable letter
//! multiset and the guess evaluator. Nothing here does I/O.

mod counts;
mod guess;
mod status;
mod word;

pub use counts::LetterCounts;
pub use guess::{GuessResult, evaluate};
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Number of symbols in every guess and answer
pub const WORD_LENGTH: usize = 5;
