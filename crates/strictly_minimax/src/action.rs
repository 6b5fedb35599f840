//! Plies recorded by a game session.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// One ply: which mark went on which square.
///
/// Search works on bare [`Position`]s; a `Move` exists only in session
/// history, where the mark is worth keeping next to the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Mark placed.
    pub player: Player,
    /// Square it went on.
    pub position: Position,
}

impl Move {
    /// Pairs a mark with a square.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// The ply the side to move on `board` makes by playing `position`.
    pub fn on(board: &Board, position: Position) -> Self {
        Self::new(board.player_to_move(), position)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.player, self.position.to_index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_uses_side_to_move() {
        let board = Board::initial();
        assert_eq!(Move::on(&board, Position::Center).player, Player::X);

        let board = board.apply(Position::Center).unwrap();
        assert_eq!(
            Move::on(&board, Position::TopLeft),
            Move::new(Player::O, Position::TopLeft)
        );
    }

    #[test]
    fn test_display_uses_square_number() {
        assert_eq!(Move::new(Player::O, Position::BottomRight).to_string(), "O@9");
    }
}
