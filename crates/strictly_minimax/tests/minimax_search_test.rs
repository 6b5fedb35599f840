//! Tests for optimal-play search.

use std::collections::HashSet;
use strictly_minimax::search::{max_search, min_search};
use strictly_minimax::{
    Board, BoardError, Outcome, Player, Position, Pruning, best_action, best_action_parallel,
    evaluate, is_terminal, legal_actions, outcome,
};

fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::initial()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(board.apply(action).expect("legal action applies"));
        }
    }
    seen
}

fn exhaustive_score(board: &Board) -> i8 {
    match board.player_to_move() {
        Player::X => max_search(board, Pruning::Disabled).score,
        Player::O => min_search(board, Pruning::Disabled).score,
    }
}

#[test]
fn test_perfect_play_is_a_draw() {
    let mut board = Board::initial();
    while let Some(action) = best_action(&board).expect("valid board") {
        board = board.apply(action).expect("engine plays legal moves");
    }
    assert_eq!(outcome(&board), Outcome::Draw);
    assert_eq!(evaluate(&Board::initial(), Pruning::Enabled).unwrap().score, 0);
}

#[test]
fn test_terminal_board_returns_no_action() {
    let won: Board = "XXX/OO./...".parse().unwrap();
    let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(best_action(&won), Ok(None));
    assert_eq!(best_action(&drawn), Ok(None));
}

#[test]
fn test_pruned_action_is_exhaustively_optimal() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let pruned = evaluate(&board, Pruning::Enabled).unwrap();
        let full = evaluate(&board, Pruning::Disabled).unwrap();
        assert_eq!(pruned.score, full.score, "{}", board.encode());
        assert!(pruned.nodes <= full.nodes);

        let action = pruned.action.expect("non-terminal board has an action");
        let child = board.apply(action).unwrap();
        assert_eq!(exhaustive_score(&child), pruned.score, "{}", board.encode());
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for board in reachable_boards()
        .into_iter()
        .filter(|b| b.empty_count() >= 6)
    {
        assert_eq!(best_action_parallel(&board), best_action(&board), "{}", board.encode());
    }
}

/// The engine never loses, whichever side it plays and whatever the
/// opponent does.
#[test]
fn test_engine_never_loses() {
    for engine in [Player::X, Player::O] {
        let mut stack = vec![Board::initial()];
        while let Some(board) = stack.pop() {
            if is_terminal(&board) {
                assert_ne!(
                    outcome(&board),
                    Outcome::Winner(engine.opponent()),
                    "{}",
                    board.encode()
                );
                continue;
            }
            if board.player_to_move() == engine {
                let action = best_action(&board).unwrap().expect("engine has a move");
                stack.push(board.apply(action).unwrap());
            } else {
                for action in legal_actions(&board) {
                    stack.push(board.apply(action).unwrap());
                }
            }
        }
    }
}

#[test]
fn test_first_forced_win_is_reported() {
    // X can win at once on the diagonal, but top-center (a double threat)
    // also forces a win and comes first in row-major order.
    let board: Board = "X.O/OX./...".parse().unwrap();
    let pruned = evaluate(&board, Pruning::Enabled).unwrap();
    let full = evaluate(&board, Pruning::Disabled).unwrap();
    assert_eq!(pruned.score, 1);
    assert_eq!(pruned.action, Some(Position::TopCenter));
    assert_eq!(full.action, Some(Position::TopCenter));
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_malformed_boards_rejected() {
    let o_first: Board = "O........".parse().unwrap();
    assert_eq!(
        best_action(&o_first),
        Err(BoardError::InvalidMarkCounts { x: 0, o: 1 })
    );

    let two_winners: Board = "XXX/OOO/X..".parse().unwrap();
    assert_eq!(best_action(&two_winners), Err(BoardError::ConflictingWinners));
    assert_eq!(
        best_action_parallel(&two_winners),
        Err(BoardError::ConflictingWinners)
    );
}

#[test]
fn test_evaluation_serializes() {
    let eval = evaluate(&"XX./OO./...".parse().unwrap(), Pruning::Enabled).unwrap();
    let json = serde_json::to_value(eval).unwrap();
    assert_eq!(json["score"], 1);
    assert_eq!(json["action"], "TopRight");
}
