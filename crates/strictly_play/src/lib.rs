//! Strictly Play - terminal front end for the strictly_minimax engine.
//!
//! The engine owns no I/O; this crate is the caller that holds the
//! authoritative game, collects human input and renders the board.
//!
//! # Architecture
//!
//! - **Cli**: clap command definitions (`play`, `solve`, `self-play`)
//! - **Config**: optional TOML settings for interactive games
//! - **Players**: human (line input) and engine (minimax) players
//! - **Orchestrator**: alternates players until the session finishes
//! - **Report**: position analysis for `solve`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod report;

pub use cli::{Cli, Command};
pub use config::{ConfigError, HumanSide, PlayConfig};
pub use orchestrator::Orchestrator;
pub use players::{EnginePlayer, HumanPlayer, Player};
pub use report::SolveReport;
