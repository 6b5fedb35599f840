//! Strictly Minimax - perfect-play tic-tac-toe.
//!
//! This library provides the complete rules of 3x3 tic-tac-toe over an
//! immutable [`Board`], plus an exhaustive minimax search that returns the
//! game-theoretically optimal move from any reachable position.
//!
//! # Architecture
//!
//! - **Board**: immutable snapshot; the side to move is derived from mark counts
//! - **Rules**: move generation, the transition function, win/draw/outcome
//! - **Search**: mutually recursive max/min search with cutoffs at ±1
//! - **Game**: typestate session holding the authoritative board and history
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Position, best_action};
//!
//! let board = Board::initial()
//!     .apply(Position::TopLeft)?
//!     .apply(Position::Center)?
//!     .apply(Position::TopCenter)?;
//!
//! // O must block the top row.
//! assert_eq!(best_action(&board)?, Some(Position::TopRight));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod position;
mod types;

pub mod rules;
pub mod search;

pub use action::Move;
pub use contracts::{Contract, MoveContract};
pub use error::{BoardError, MoveError, ScoreError};
pub use game::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, MarkBalanceInvariant, NoPlayAfterWinInvariant,
    SingleWinnerInvariant, validate,
};
pub use position::Position;
pub use rules::{Outcome, apply, is_terminal, legal_actions, outcome, score, winner};
pub use search::{
    Evaluation, Pruning, best_action, best_action_parallel, evaluate, evaluate_parallel,
};
pub use types::{Board, MarkCounts, Player, Square};

/// Alias for clarity in callers that talk about marks rather than players.
pub type Mark = Player;
