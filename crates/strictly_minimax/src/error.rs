//! Error types for moves, scoring and board validation.

use super::position::Position;
use super::types::Player;
use derive_more::{Display, Error};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The coordinates do not address a square on the board.
    #[display("Coordinates ({}, {}) are off the board (must be 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error returned when scoring a board whose outcome is not decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ScoreError {
    /// Only terminal boards have a score.
    #[display("Board is not terminal; no score exists for an undetermined outcome")]
    NotTerminal,
}

/// Error describing a malformed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Wrong number of cells in a board string.
    #[display("Board string has {} cells, expected {}", got, expected)]
    InvalidLength {
        /// Required number of cells.
        expected: usize,
        /// Cells actually found.
        got: usize,
    },

    /// Unrecognized cell character.
    #[display("Invalid character '{}' at cell {}", character, position)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index (0-8).
        position: usize,
    },

    /// Mark counts not reachable by alternating play with X first.
    #[display("Invalid mark counts: X={}, O={} (must be equal or X ahead by 1)", x, o)]
    InvalidMarkCounts {
        /// Marks placed by X.
        x: usize,
        /// Marks placed by O.
        o: usize,
    },

    /// Both players have three in a row.
    #[display("Both players have three in a row")]
    ConflictingWinners,

    /// A move was made after the game was already won.
    #[display("Player {} has won but the mark counts show play continued", winner)]
    PlayAfterWin {
        /// The player holding the line.
        winner: Player,
    },
}
