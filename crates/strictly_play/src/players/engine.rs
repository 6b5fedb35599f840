//! Engine player backed by exhaustive minimax search.

use super::Player;
use anyhow::{Result, bail};
use strictly_minimax::{GameInProgress, Position, best_action, best_action_parallel};
use tracing::{debug, instrument};

/// Plays the game-theoretically optimal move every turn.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
    parallel: bool,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>, parallel: bool) -> Self {
        Self {
            name: name.into(),
            parallel,
        }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, game), fields(engine = %self.name))]
    fn choose(&mut self, game: &GameInProgress) -> Result<Position> {
        let choice = if self.parallel {
            best_action_parallel(game.board())?
        } else {
            best_action(game.board())?
        };

        match choice {
            Some(position) => {
                debug!(%position, "Engine chose position");
                Ok(position)
            }
            None => bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
