//! Display functions for command results

use super::formatters::{format_letters, keyboard_rows, result_to_codes, result_to_emoji};
use crate::commands::ScoreResult;
use colored::Colorize;

/// Print the result of scoring a sequence of guesses
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Answer: {}",
        result.answer.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "{}. {} {} {}",
            i + 1,
            step.guess().to_string().to_uppercase(),
            result_to_emoji(step),
            result_to_codes(step)
        );
    }

    println!("\n{}", "Letters:".bright_cyan().bold());
    println!("   Correct:    {}", format_letters(&result.correct_letters).green());
    println!(
        "   Misplaced:  {}",
        format_letters(&result.misplaced_letters).yellow()
    );
    println!(
        "   Unused:     {}",
        format_letters(&result.unused_letters).bright_black()
    );

    println!("\n{}", "Keyboard:".bright_cyan().bold());
    for row in keyboard_rows(&result.keyboard) {
        println!("   {row}");
    }

    println!();
    match result.solved_at {
        Some(turn) => println!(
            "{}",
            format!("✅ Solved in {turn} {}!", guess_noun(turn))
                .green()
                .bold()
        ),
        None => println!(
            "{}",
            format!(
                "❌ Not solved after {} {}",
                result.steps.len(),
                guess_noun(result.steps.len())
            )
            .red()
            .bold()
        ),
    }
}

const fn guess_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
