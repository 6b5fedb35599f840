//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the search, the game
//! session and the contracts all share one definition of each rule.

pub mod draw;
pub mod moves;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply, legal_actions};
pub(crate) use moves::successor;
pub use outcome::{Outcome, is_terminal, outcome, score};
pub use win::{WINNING_LINES, lines_for, winner};
