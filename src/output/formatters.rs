//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus};
use crate::game::KeyboardHints;
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Format a result as emoji squares
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.statuses().iter().map(|s| s.emoji()).collect()
}

/// Format a result as single-character status codes
#[must_use]
pub fn result_to_codes(result: &GuessResult) -> String {
    result.statuses().iter().map(|s| s.code()).collect()
}

/// Color one uppercase tile by its status
fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green(),
        LetterStatus::Misplaced => text.black().on_yellow(),
        LetterStatus::Unused => text.white().on_bright_black(),
        LetterStatus::Unknown => text.normal(),
    }
}

/// Format a guess as colored uppercase tiles
#[must_use]
pub fn colored_guess(result: &GuessResult) -> String {
    result
        .letters()
        .map(|(letter, status)| tile(letter, status).to_string())
        .collect()
}

/// Format each keyboard row as colored keys, offset like a real keyboard
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    hints
        .rows()
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .iter()
                .map(|&(key, status)| tile(key, status).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Format a letter set as space-separated uppercase letters, `-` if empty
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|letter| letter.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
