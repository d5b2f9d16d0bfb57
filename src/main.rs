//! Wordle Hints - CLI
//!
//! Scores guesses against an answer, or plays a line-oriented game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;
use wordle_hints::{
    commands::{PlayConfig, ScoreConfig, run_play, score_guesses},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle guess scoring with duplicate-aware letter hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every scored guess to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score guesses against an answer
    Score {
        /// The answer word
        answer: String,

        /// Guesses, scored in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play a game, reading one guess per line from stdin
    Play {
        /// The answer word
        #[arg(short, long)]
        answer: String,

        /// Maximum number of guesses
        #[arg(short, long, default_value_t = PlayConfig::DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "wordle_hints=debug"
    } else {
        "wordle_hints=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Score { answer, guesses } => run_score_command(&answer, &guesses),
        Commands::Play {
            answer,
            max_guesses,
        } => run_play_command(answer, max_guesses),
    }
}

fn run_score_command(answer: &str, guesses: &[String]) -> Result<()> {
    let config = ScoreConfig::new(
        answer.to_lowercase(),
        guesses.iter().map(|g| g.to_lowercase()).collect(),
    );
    let result = score_guesses(&config)?;

    print_score_result(&result);
    Ok(())
}

fn run_play_command(answer: String, max_guesses: usize) -> Result<()> {
    let mut config = PlayConfig::new(answer);
    config.max_guesses = max_guesses;

    let stdin = io::stdin();
    let outcome = run_play(&config, stdin.lock(), io::stdout())?;
    tracing::info!(?outcome, "game finished");
    Ok(())
}
