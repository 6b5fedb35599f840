//! Exhaustive minimax search.
//!
//! The search is a pure function of its board argument: no caches, no
//! global counters. Scores are from X's point of view (+1 X wins,
//! -1 O wins, 0 draw), so X maximizes and O minimizes.

mod minimax;
mod parallel;

pub use minimax::{Evaluation, Pruning, best_action, evaluate, max_search, min_search};
pub use parallel::{best_action_parallel, evaluate_parallel};
