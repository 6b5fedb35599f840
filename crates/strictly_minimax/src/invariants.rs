//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties every board reachable from the empty
//! board satisfies. The primitive rule functions never check them; the
//! search and the game session do, so a malformed board is reported
//! instead of being silently evaluated.

use super::rules::lines_for;
use super::{Board, BoardError, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks the invariant, describing the first violation found.
    fn check(state: &S) -> Result<(), BoardError>;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;

    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool {
        Self::check(state).is_ok()
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples; members are checked left to right.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, stopping at the first violation.
    fn check_all(state: &S) -> Result<(), BoardError>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), BoardError> {
        I1::check(state)?;
        I2::check(state)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), BoardError> {
        I1::check(state)?;
        I2::check(state)?;
        I3::check(state)
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn check(board: &Board) -> Result<(), BoardError> {
        let counts = board.mark_counts();
        if counts.x == counts.o || counts.x == counts.o + 1 {
            Ok(())
        } else {
            Err(BoardError::InvalidMarkCounts {
                x: counts.x,
                o: counts.o,
            })
        }
    }

    fn description() -> &'static str {
        "X and O counts are equal or X leads by one"
    }
}

/// Invariant: at most one player has three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn check(board: &Board) -> Result<(), BoardError> {
        if lines_for(board).len() > 1 {
            Err(BoardError::ConflictingWinners)
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "At most one player has a complete line"
    }
}

/// Invariant: the winner made the last move.
///
/// An X line requires X to lead by one; an O line requires equal counts.
pub struct NoPlayAfterWinInvariant;

impl Invariant<Board> for NoPlayAfterWinInvariant {
    fn check(board: &Board) -> Result<(), BoardError> {
        let counts = board.mark_counts();
        for winner in lines_for(board) {
            let consistent = match winner {
                Player::X => counts.x == counts.o + 1,
                Player::O => counts.x == counts.o,
            };
            if !consistent {
                return Err(BoardError::PlayAfterWin { winner });
            }
        }
        Ok(())
    }

    fn description() -> &'static str {
        "No move follows a completed line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    NoPlayAfterWinInvariant,
);

/// Validates that a board could arise from alternating play starting with X.
///
/// # Errors
///
/// Returns the first [`BoardError`] violation found.
pub fn validate(board: &Board) -> Result<(), BoardError> {
    BoardInvariants::check_all(board)
}

impl Board {
    /// See [`validate`].
    pub fn validate(&self) -> Result<(), BoardError> {
        validate(self)
    }
}
