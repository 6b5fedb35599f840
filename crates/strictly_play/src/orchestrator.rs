//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Result, anyhow};
use std::io::Write;
use strictly_minimax::{GameFinished, GameResult, GameSetup, Mark};
use tracing::{debug, info};

/// Runs a session between two players, printing progress to `output`.
pub struct Orchestrator<W> {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, output: W) -> Self {
        Self {
            player_x,
            player_o,
            output,
        }
    }

    /// Runs the game loop until the session finishes.
    pub fn run(&mut self) -> Result<GameFinished> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );
        let mut game = GameSetup::new().start();

        loop {
            writeln!(self.output, "\n{}\n", game.board())?;

            let mark = game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = player.name(), "Waiting for move");
            let position = player.choose(&game)?;
            let name = player.name().to_string();

            let result = game
                .make_move(position)
                .map_err(|e| anyhow!("{}: {}", name, e))?;
            writeln!(self.output, "{} ({}) plays {}", name, mark, position)?;

            game = match result {
                GameResult::InProgress(next) => next,
                GameResult::Finished(done) => {
                    let verdict = self.describe(&done);
                    writeln!(self.output, "\n{}\n\n{}", done.board(), verdict)?;
                    info!(outcome = %done.outcome(), moves = done.history().len(), "Game over");
                    return Ok(done);
                }
            };
        }
    }

    fn describe(&self, finished: &GameFinished) -> String {
        match finished.outcome().winner() {
            Some(Mark::X) => format!("{} (X) wins!", self.player_x.name()),
            Some(Mark::O) => format!("{} (O) wins!", self.player_o.name()),
            None => "It's a draw.".to_string(),
        }
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
