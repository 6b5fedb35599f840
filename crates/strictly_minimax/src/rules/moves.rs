//! Move generation and the transition function.

use super::super::{Board, MoveError, Position, Square};

/// Returns every legal action on the board, in row-major order.
///
/// The result is empty iff the board is full. Note that a won board still
/// reports its empty squares; callers stop at [`super::is_terminal`].
pub fn legal_actions(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Returns the board that results from the side to move playing `action`.
///
/// The mark placed is [`Board::player_to_move`] of the input board, which
/// is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square is taken.
pub fn apply(board: &Board, action: Position) -> Result<Board, MoveError> {
    if !board.is_empty(action) {
        return Err(MoveError::SquareOccupied(action));
    }
    Ok(successor(board, action))
}

/// Places the side to move's mark on a square known to be empty.
///
/// Used by the search, which only ever feeds it actions from
/// [`legal_actions`] of the same board.
pub(crate) fn successor(board: &Board, action: Position) -> Board {
    debug_assert!(
        board.is_empty(action),
        "successor called with occupied square {action}"
    );
    board.with_square(action, Square::Occupied(board.player_to_move()))
}

impl Board {
    /// See [`legal_actions`].
    pub fn legal_actions(&self) -> Vec<Position> {
        legal_actions(self)
    }

    /// See [`apply`].
    pub fn apply(&self, action: Position) -> Result<Board, MoveError> {
        apply(self, action)
    }

    /// Applies a move addressed by (row, column).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates off the board and
    /// [`MoveError::SquareOccupied`] for a taken square.
    pub fn apply_at(&self, row: usize, col: usize) -> Result<Board, MoveError> {
        apply(self, Position::from_coords(row, col)?)
    }
}
