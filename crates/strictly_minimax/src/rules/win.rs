//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight lines of three: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player owning the first complete line, if any.
///
/// Lines are checked in [`WINNING_LINES`] order, so a malformed board with
/// lines for both players reports whichever comes first.
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES
        .iter()
        .find_map(|&line| line_owner(board, line))
}

/// Returns every player that owns at least one complete line.
///
/// On a legal board this holds at most one player.
pub fn lines_for(board: &Board) -> Vec<Player> {
    let mut owners = Vec::new();
    for line in WINNING_LINES {
        if let Some(player) = line_owner(board, line)
            && !owners.contains(&player)
        {
            owners.push(player);
        }
    }
    owners
}

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}
