//! Command-line interface for noughts.

use crate::config::GameMode;
use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with an optional computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays O: another human at the keyboard, or the computer
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Milliseconds the computer pretends to think before moving
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's move sampling, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a config file (defaults to ./noughts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
