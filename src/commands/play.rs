//! Line-oriented interactive game
//!
//! Reads guesses one per line, prints colored feedback and keyboard hints,
//! and stops on a win, on the guess limit, on `quit`, or at end of input.

use crate::core::WORD_LENGTH;
use crate::game::GameSession;
use crate::output::formatters::{colored_guess, keyboard_rows, result_to_emoji};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Configuration for an interactive game
pub struct PlayConfig {
    pub answer: String,
    pub max_guesses: usize,
}

impl PlayConfig {
    pub const DEFAULT_MAX_GUESSES: usize = 6;

    #[must_use]
    pub const fn new(answer: String) -> Self {
        Self {
            answer,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    Lost,
    Abandoned { guesses: usize },
}

/// Run an interactive game reading guesses from `input`
///
/// Guesses are trimmed and lowercased before scoring. A guess of the wrong
/// length is reported and does not use up a turn.
///
/// # Errors
///
/// Returns an error if the answer has the wrong length or if reading input
/// or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome> {
    let mut session = GameSession::new(&config.answer.to_lowercase())?;
    let reveal = session.answer().to_string().to_uppercase();

    writeln!(
        output,
        "Guess the {WORD_LENGTH}-letter word in {} tries. Type 'quit' to give up.\n",
        config.max_guesses
    )?;

    while session.guess_count() < config.max_guesses {
        let turn = session.guess_count() + 1;
        let Some(guess) = read_guess(&mut input, &mut output, turn, config.max_guesses)? else {
            writeln!(output)?;
            return Ok(PlayOutcome::Abandoned {
                guesses: session.guess_count(),
            });
        };

        if matches!(guess.as_str(), "quit" | "q" | "exit") {
            writeln!(output, "The word was {}", reveal.bright_yellow().bold())?;
            return Ok(PlayOutcome::Abandoned {
                guesses: session.guess_count(),
            });
        }

        match session.add_guess(&guess) {
            Ok(result) => {
                writeln!(output, "{} {}", colored_guess(result), result_to_emoji(result))?;
            }
            Err(err) => {
                writeln!(output, "❌ {err}")?;
                continue;
            }
        }

        for row in keyboard_rows(&session.keyboard_hints()) {
            writeln!(output, "  {row}")?;
        }
        writeln!(output)?;

        if session.is_solved() {
            let noun = if turn == 1 { "guess" } else { "guesses" };
            writeln!(
                output,
                "{}",
                format!("🎉 Solved in {turn} {noun}!").green().bold()
            )?;
            tracing::debug!(turn, "game won");
            return Ok(PlayOutcome::Won { guesses: turn });
        }
    }

    writeln!(
        output,
        "{} The word was {}",
        "Out of guesses!".red().bold(),
        reveal.bright_yellow().bold()
    )?;
    tracing::debug!(guesses = session.guess_count(), "game lost");
    Ok(PlayOutcome::Lost)
}

/// Prompt for one guess; `None` at end of input
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    turn: usize,
    max_guesses: usize,
) -> Result<Option<String>> {
    write!(output, "Guess {turn}/{max_guesses}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(answer: &str, max_guesses: usize, lines: &str) -> (PlayOutcome, String) {
        let config = PlayConfig {
            answer: answer.to_string(),
            max_guesses,
        };
        let mut output = Vec::new();
        let outcome = run_play(&config, lines.as_bytes(), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn default_config_allows_six_guesses() {
        let config = PlayConfig::new("crane".to_string());
        assert_eq!(config.max_guesses, 6);
    }

    #[test]
    fn win_on_second_guess() {
        let (outcome, output) = play("crane", 6, "slate\ncrane\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(output.contains("⬜⬜🟩⬜🟩"));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn input_is_normalized_before_scoring() {
        let (outcome, _) = play("CRANE", 6, "  Crane  \n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 1 });
    }

    #[test]
    fn wrong_length_guess_does_not_use_a_turn() {
        let (outcome, output) = play("crane", 2, "cra\nslate\ncrane\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(output.contains("word must be exactly 5 letters, got 3"));
        assert!(output.contains("Guess 2/2"));
    }

    #[test]
    fn running_out_of_guesses_reveals_answer() {
        let (outcome, output) = play("crane", 2, "slate\nbrick\ncrane\n");
        assert_eq!(outcome, PlayOutcome::Lost);
        assert!(output.contains("Out of guesses!"));
        assert!(output.contains("CRANE"));
        assert!(!output.contains("Guess 3/2"));
    }

    #[test]
    fn quit_abandons_game() {
        let (outcome, output) = play("crane", 6, "slate\nquit\n");
        assert_eq!(outcome, PlayOutcome::Abandoned { guesses: 1 });
        assert!(output.contains("CRANE"));
    }

    #[test]
    fn end_of_input_abandons_game() {
        let (outcome, _) = play("crane", 6, "");
        assert_eq!(outcome, PlayOutcome::Abandoned { guesses: 0 });
    }

    #[test]
    fn invalid_answer_is_an_error() {
        let config = PlayConfig::new("cranes".to_string());
        let result = run_play(&config, "crane\n".as_bytes(), Vec::new());
        assert!(result.is_err());
    }
}
