//! Position analysis for the `solve` command.

use serde::Serialize;
use strictly_minimax::{Board, BoardError, Mark, Outcome, Position, Pruning, evaluate};
use tracing::instrument;

/// Everything the engine knows about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// Compact nine-character board encoding.
    pub board: String,
    /// Side to move; absent once the game is decided.
    pub to_move: Option<Mark>,
    /// Current outcome of the board itself.
    pub outcome: Outcome,
    /// Minimax value from X's point of view.
    pub value: i8,
    /// Optimal move for the side to move.
    pub best_move: Option<Position>,
    /// Positions visited by the search.
    pub nodes: u64,
    /// Whether cutoffs were enabled.
    pub pruning: Pruning,
}

impl SolveReport {
    /// Validates and searches `board`.
    #[instrument(skip(board), fields(board = %board.encode()))]
    pub fn analyze(board: &Board, pruning: Pruning) -> Result<Self, BoardError> {
        let evaluation = evaluate(board, pruning)?;
        let outcome = board.outcome();
        Ok(Self {
            board: board.encode(),
            to_move: (!outcome.is_terminal()).then(|| board.player_to_move()),
            outcome,
            value: evaluation.score,
            best_move: evaluation.action,
            nodes: evaluation.nodes,
            pruning,
        })
    }

    /// Human-readable verdict, e.g. "X wins with perfect play".
    pub fn verdict(&self) -> &'static str {
        match (self.outcome, self.value) {
            (Outcome::Undetermined, 1) => "X wins with perfect play",
            (Outcome::Undetermined, -1) => "O wins with perfect play",
            (Outcome::Undetermined, _) => "Draw with perfect play",
            (Outcome::Winner(Mark::X), _) => "X has won",
            (Outcome::Winner(Mark::O), _) => "O has won",
            (Outcome::Draw, _) => "The game is drawn",
        }
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:    {}", self.board)?;
        match self.to_move {
            Some(mark) => writeln!(f, "To move:  {}", mark)?,
            None => writeln!(f, "To move:  -")?,
        }
        writeln!(f, "Verdict:  {} (value {:+})", self.verdict(), self.value)?;
        match self.best_move {
            Some(position) => writeln!(f, "Best:     {}", position)?,
            None => writeln!(f, "Best:     none (game over)")?,
        }
        write!(f, "Searched: {} positions", self.nodes)
    }
}
