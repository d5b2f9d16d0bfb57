//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayConfig, PlayOutcome, run_play};
pub use score::{ScoreConfig, ScoreResult, score_guesses};
