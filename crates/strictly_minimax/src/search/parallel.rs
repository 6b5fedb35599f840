//! First-level parallel search.
//!
//! Each root action is searched on its own copy of the board by the rayon
//! pool. Results come back in action order and are merged with the same
//! strict-improvement rule as the sequential search, so the reported
//! action is identical.

use super::minimax::{Evaluation, Pruning, max_search, min_search};
use crate::rules::{is_terminal, legal_actions, successor};
use crate::{Board, BoardError, Player, Position, validate};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Parallel counterpart of [`super::evaluate`].
///
/// Every root action is searched, so `nodes` can exceed the sequential
/// count when pruning would have skipped later siblings.
///
/// # Errors
///
/// Returns a [`BoardError`] if the board could not arise from legal play.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn evaluate_parallel(board: &Board, pruning: Pruning) -> Result<Evaluation, BoardError> {
    validate(board)?;

    if is_terminal(board) {
        return Ok(match board.player_to_move() {
            Player::X => max_search(board, pruning),
            Player::O => min_search(board, pruning),
        });
    }

    let mover = board.player_to_move();
    let replies: Vec<(Position, Evaluation)> = legal_actions(board)
        .into_par_iter()
        .map(|action| {
            let child = successor(board, action);
            let reply = match mover {
                Player::X => min_search(&child, pruning),
                Player::O => max_search(&child, pruning),
            };
            (action, reply)
        })
        .collect();

    let evaluation = merge(mover, &replies);
    debug!(
        score = evaluation.score,
        action = ?evaluation.action,
        nodes = evaluation.nodes,
        branches = replies.len(),
        "Parallel search complete"
    );
    Ok(evaluation)
}

/// Parallel counterpart of [`super::best_action`].
///
/// # Errors
///
/// Returns a [`BoardError`] if the board could not arise from legal play.
pub fn best_action_parallel(board: &Board) -> Result<Option<Position>, BoardError> {
    Ok(evaluate_parallel(board, Pruning::Enabled)?.action)
}

fn merge(mover: Player, replies: &[(Position, Evaluation)]) -> Evaluation {
    let mut best = Evaluation {
        score: match mover {
            Player::X => i8::MIN,
            Player::O => i8::MAX,
        },
        action: None,
        nodes: 1,
    };

    for &(action, reply) in replies {
        best.nodes += reply.nodes;
        let improves = match mover {
            Player::X => reply.score > best.score,
            Player::O => reply.score < best.score,
        };
        if improves {
            best.score = reply.score;
            best.action = Some(action);
        }
    }
    best
}

impl Board {
    /// See [`best_action_parallel`].
    pub fn best_action_parallel(&self) -> Result<Option<Position>, BoardError> {
        best_action_parallel(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{best_action, evaluate};

    #[test]
    fn test_matches_sequential_from_empty_board() {
        let board = Board::initial();
        assert_eq!(best_action_parallel(&board), best_action(&board));
        let eval = evaluate_parallel(&board, Pruning::Disabled).unwrap();
        assert_eq!(eval, evaluate(&board, Pruning::Disabled).unwrap());
    }

    #[test]
    fn test_matches_sequential_with_multiple_wins() {
        // X to move with two immediate wins; the first in row-major order is reported.
        let board: Board = "XX./XOO/.O.".parse().unwrap();
        assert_eq!(best_action(&board), Ok(Some(Position::TopRight)));
        assert_eq!(best_action_parallel(&board), Ok(Some(Position::TopRight)));
    }

    #[test]
    fn test_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(best_action_parallel(&board), Ok(None));
    }
}
