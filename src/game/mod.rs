//! Game state built on the core evaluator
//!
//! A session accumulates guesses against one answer and exposes the
//! aggregate letter hints.

mod keyboard;
mod session;

pub use keyboard::{KEY_ROWS, KeyboardHints};
pub use session::GameSession;
