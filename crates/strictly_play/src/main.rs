//! Strictly Play - Unified CLI
//!
//! Perfect-play tic-tac-toe with multiple modes of operation.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use strictly_minimax::{Board, Mark, Pruning};
use strictly_play::{
    Cli, Command, EnginePlayer, HumanPlayer, HumanSide, Orchestrator, PlayConfig, Player,
    SolveReport,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            config,
            parallel,
            hints,
        } => run_play(human, config, parallel, hints),
        Command::Solve {
            board,
            exhaustive,
            json,
        } => run_solve(&board, exhaustive, json),
        Command::SelfPlay { parallel } => run_self_play(parallel),
    }
}

/// Human against the engine.
#[instrument]
fn run_play(
    human: Option<HumanSide>,
    config: Option<PathBuf>,
    parallel: bool,
    hints: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(human, parallel, hints);
    info!(?config, "Starting interactive game");

    let human_player: Box<dyn Player> = Box::new(
        HumanPlayer::new("You", io::stdin().lock(), io::stdout()).with_hints(*config.show_hints()),
    );
    let engine: Box<dyn Player> = Box::new(EnginePlayer::new("Engine", *config.parallel()));

    let (player_x, player_o) = match Mark::from(*config.human_mark()) {
        Mark::X => (human_player, engine),
        Mark::O => (engine, human_player),
    };

    Orchestrator::new(player_x, player_o, io::stdout()).run()?;
    Ok(())
}

/// Print the analysis of a single position.
#[instrument]
fn run_solve(board: &str, exhaustive: bool, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let pruning = if exhaustive {
        Pruning::Disabled
    } else {
        Pruning::Enabled
    };

    let report = SolveReport::analyze(&board, pruning).context("Cannot analyze board")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n\n{}", board, report);
    }
    Ok(())
}

/// Engine against itself from the empty board.
#[instrument]
fn run_self_play(parallel: bool) -> Result<()> {
    let finished = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X", parallel)),
        Box::new(EnginePlayer::new("Engine O", parallel)),
        io::stdout(),
    )
    .run()?;
    info!(outcome = %finished.outcome(), "Self-play finished");
    Ok(())
}
