//! Sequential minimax with cutoffs at the absolute score bounds.

use crate::rules::{is_terminal, legal_actions, score, successor};
use crate::{Board, BoardError, Player, Position, validate};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best attainable score for X.
const WIN: i8 = 1;
/// Best attainable score for O.
const LOSS: i8 = -1;

/// Whether the search stops once a side has found a forced win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    /// Stop scanning a node's actions once the mover reaches its bound
    /// (+1 for X, -1 for O). Changes only cost and which of several equally
    /// winning actions is reported.
    #[default]
    Enabled,
    /// Visit every reachable position.
    Disabled,
}

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Minimax value from X's point of view.
    pub score: i8,
    /// First action achieving `score`; `None` on terminal boards.
    pub action: Option<Position>,
    /// Positions visited, including this one.
    pub nodes: u64,
}

impl Evaluation {
    fn leaf(score: i8) -> Self {
        Self {
            score,
            action: None,
            nodes: 1,
        }
    }
}

/// Searches a position where X is to move.
///
/// Returns the highest score X can force and the first action reaching it.
/// The board is not validated; see [`evaluate`].
pub fn max_search(board: &Board, pruning: Pruning) -> Evaluation {
    if let Ok(value) = score(board) {
        return Evaluation::leaf(value);
    }

    let mut best = Evaluation {
        score: i8::MIN,
        action: None,
        nodes: 1,
    };
    for action in legal_actions(board) {
        let reply = min_search(&successor(board, action), pruning);
        best.nodes += reply.nodes;
        if reply.score > best.score {
            best.score = reply.score;
            best.action = Some(action);
            if pruning == Pruning::Enabled && best.score == WIN {
                break;
            }
        }
    }
    best
}

/// Searches a position where O is to move. Mirror of [`max_search`].
pub fn min_search(board: &Board, pruning: Pruning) -> Evaluation {
    if let Ok(value) = score(board) {
        return Evaluation::leaf(value);
    }

    let mut best = Evaluation {
        score: i8::MAX,
        action: None,
        nodes: 1,
    };
    for action in legal_actions(board) {
        let reply = max_search(&successor(board, action), pruning);
        best.nodes += reply.nodes;
        if reply.score < best.score {
            best.score = reply.score;
            best.action = Some(action);
            if pruning == Pruning::Enabled && best.score == LOSS {
                break;
            }
        }
    }
    best
}

/// Validates the board and searches it for the side to move.
///
/// # Errors
///
/// Returns a [`BoardError`] if the board could not arise from legal play.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn evaluate(board: &Board, pruning: Pruning) -> Result<Evaluation, BoardError> {
    validate(board)?;

    let evaluation = match board.player_to_move() {
        Player::X => max_search(board, pruning),
        Player::O => min_search(board, pruning),
    };

    debug!(
        score = evaluation.score,
        action = ?evaluation.action,
        nodes = evaluation.nodes,
        "Search complete"
    );
    Ok(evaluation)
}

/// Returns the optimal action for the side to move.
///
/// `Ok(None)` means the game is already decided.
///
/// # Errors
///
/// Returns a [`BoardError`] if the board could not arise from legal play.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn best_action(board: &Board) -> Result<Option<Position>, BoardError> {
    if is_terminal(board) {
        validate(board)?;
        return Ok(None);
    }
    Ok(evaluate(board, Pruning::Enabled)?.action)
}

impl Board {
    /// See [`best_action`].
    pub fn best_action(&self) -> Result<Option<Position>, BoardError> {
        best_action(self)
    }
}
