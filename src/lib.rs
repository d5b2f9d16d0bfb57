//! Wordle Hints
//!
//! Scores Wordle guesses with correct duplicate-letter handling and keeps
//! the running letter hints for a game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::LetterStatus;
//! use wordle_hints::game::GameSession;
//!
//! let mut session = GameSession::new("abbey").unwrap();
//!
//! let result = session.add_guess("babes").unwrap();
//! assert_eq!(result.statuses()[2], LetterStatus::Correct);
//! assert_eq!(result.statuses()[4], LetterStatus::Unused);
//!
//! assert!(session.correct_letters().contains(&'b'));
//! assert!(session.unused_letters().contains(&'s'));
//! ```

// Core domain types
pub mod core;

// Session state and keyboard hints
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
