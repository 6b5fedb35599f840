//! Terminal detection, outcomes and scores.

use super::super::{Board, Player, ScoreError};
use super::draw::is_full;
use super::win::winner;
use serde::{Deserialize, Serialize};

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still going.
    Undetermined,
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Undetermined | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the outcome is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undetermined)
    }

    /// Score from X's point of view: +1 X wins, -1 O wins, 0 draw.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotTerminal`] for [`Outcome::Undetermined`].
    pub fn score(&self) -> Result<i8, ScoreError> {
        match self {
            Outcome::Winner(Player::X) => Ok(1),
            Outcome::Winner(Player::O) => Ok(-1),
            Outcome::Draw => Ok(0),
            Outcome::Undetermined => Err(ScoreError::NotTerminal),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undetermined => write!(f, "Undetermined"),
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Winner(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undetermined
    }
}

/// True iff someone has won or no legal action remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of a terminal board from X's point of view.
///
/// # Errors
///
/// Returns [`ScoreError::NotTerminal`] if the game is still undecided.
pub fn score(board: &Board) -> Result<i8, ScoreError> {
    outcome(board).score()
}

impl Board {
    /// See [`outcome`].
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }

    /// See [`is_terminal`].
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    /// See [`winner`].
    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }

    /// See [`score`].
    pub fn score(&self) -> Result<i8, ScoreError> {
        score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_undetermined() {
        let board = Board::initial();
        assert_eq!(outcome(&board), Outcome::Undetermined);
        assert!(!is_terminal(&board));
        assert_eq!(score(&board), Err(ScoreError::NotTerminal));
    }

    #[test]
    fn test_row_of_x_only() {
        let board: Board = "XXX/.../...".parse().unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.outcome(), Outcome::Winner(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.score(), Ok(1));
    }

    #[test]
    fn test_o_win_scores_negative() {
        let board: Board = "XX./OOO/X..".parse().unwrap();
        assert_eq!(board.outcome(), Outcome::Winner(Player::O));
        assert_eq!(board.score(), Ok(-1));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(board.outcome(), Outcome::Draw);
        assert!(board.is_terminal());
        assert_eq!(board.score(), Ok(0));
    }
}
