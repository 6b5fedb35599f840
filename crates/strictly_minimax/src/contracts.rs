//! Contract-based validation for game transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use super::invariants::{BoardInvariants, InvariantSet};
use super::{Board, BoardError, MoveError, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error reported when a precondition fails.
    type Error;

    /// Error reported when the resulting state is broken.
    type Violation;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Violation>;
}

/// Contract for placing a mark.
///
/// Precondition: the square is empty.
/// Postcondition: the new board satisfies every board invariant and holds
/// exactly one more mark than before.
pub struct MoveContract;

impl Contract<Board, Position> for MoveContract {
    type Error = MoveError;
    type Violation = BoardError;

    #[instrument(skip(board))]
    fn pre(board: &Board, action: &Position) -> Result<(), MoveError> {
        if board.is_empty(*action) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(*action))
        }
    }

    fn post(before: &Board, after: &Board) -> Result<(), BoardError> {
        BoardInvariants::check_all(after).inspect_err(|violation| {
            warn!(%violation, board = %after.encode(), "Postcondition failed");
        })?;
        debug_assert_eq!(before.empty_count(), after.empty_count() + 1);
        Ok(())
    }
}
