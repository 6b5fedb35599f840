//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_minimax::{GameInProgress, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a legal position for the side to move.
    fn choose(&mut self, game: &GameInProgress) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
