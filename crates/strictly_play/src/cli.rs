//! Command-line interface for strictly_play.

use crate::config::HumanSide;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Play - perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_play")]
#[command(about = "Play tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine
    Play {
        /// Which mark the human plays (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<HumanSide>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Search root moves in parallel
        #[arg(long)]
        parallel: bool,

        /// Show the engine's recommended move before each human turn
        #[arg(long)]
        hints: bool,
    },

    /// Analyze a position, e.g. `solve "X.O/.X./..O"`
    Solve {
        /// Nine cells: X, O and `.` for empty (whitespace, `/` and `|` between rows are ignored)
        board: String,

        /// Disable cutoffs and visit every reachable position
        #[arg(long)]
        exhaustive: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay {
        /// Search root moves in parallel
        #[arg(long)]
        parallel: bool,
    },
}
