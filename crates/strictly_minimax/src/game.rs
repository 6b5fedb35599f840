//! Phase-specific typestate structs for a tic-tac-toe session.
//!
//! Each phase is its own type. A `GameFinished` ALWAYS has a decided
//! outcome, and only a `GameInProgress` accepts moves. The board inside is
//! the authoritative position; every move replaces it with the successor
//! produced by [`Board::apply`].

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::rules::Outcome;
use super::{Board, MoveError, Player, Position};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game. X always moves first.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
}

impl GameInProgress {
    /// Plays `position` for the side to move, consuming self.
    ///
    /// Returns either a new in-progress game or a finished one. The game is
    /// consumed even on error, so interactive callers check
    /// [`GameInProgress::is_legal`] first.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn make_move(self, position: Position) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self.board, &position)?;

        let ply = Move::on(&self.board, position);
        let next = self.board.apply(position)?;

        debug_assert!(
            MoveContract::post(&self.board, &next).is_ok(),
            "move broke a board invariant"
        );

        let mut history = self.history;
        history.push(ply);
        debug!(%ply, moves = history.len(), "Move applied");

        let outcome = next.outcome();
        if outcome.is_terminal() {
            return Ok(GameResult::Finished(GameFinished {
                board: next,
                history,
                outcome,
            }));
        }

        Ok(GameResult::InProgress(GameInProgress {
            board: next,
            history,
        }))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.board.player_to_move()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.legal_actions()
    }

    /// True if `position` is currently empty.
    pub fn is_legal(&self, position: Position) -> bool {
        self.board.is_empty(position)
    }

    /// Replays positions from the initial state, alternating players.
    ///
    /// Positions after the game ends are rejected with
    /// [`MoveError::GameOver`].
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameSetup::new().start());

        for &position in positions {
            result = match result {
                GameResult::InProgress(game) => game.make_move(position)?,
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            };
        }

        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome; never [`Outcome::Undetermined`].
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the board in either phase.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(game) => game.board(),
            GameResult::Finished(game) => game.board(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_gives_x_the_move() {
        let game = GameSetup::new().start();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_move_switches_player() {
        let game = GameSetup::new().start();
        let GameResult::InProgress(game) = game.make_move(Position::Center).unwrap() else {
            panic!("Game shouldn't finish after one move");
        };
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Move::new(Player::X, Position::Center)]);
        assert!(!game.is_legal(Position::Center));
    }

    #[test]
    fn test_replay_after_finish_rejected() {
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
            Position::BottomLeft,
        ];
        assert!(matches!(
            GameInProgress::replay(&positions),
            Err(MoveError::GameOver)
        ));
    }
}
