//! Human player reading moves from a line-oriented input.

use super::Player;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{GameInProgress, Position, best_action};
use tracing::debug;

/// Human player prompting on `output` and reading answers from `input`.
///
/// Accepts the square number shown on the board (1-9), `row,col`
/// coordinates (0-2 each) or a label such as `center`. Malformed or
/// occupied choices are reported and asked again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints: false,
        }
    }

    /// Show the engine's recommendation before each move.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    fn parse(answer: &str) -> Option<Position> {
        match answer.trim().parse::<usize>() {
            Ok(number) => number.checked_sub(1).and_then(Position::from_index),
            Err(_) => Position::from_label_or_number(answer),
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose(&mut self, game: &GameInProgress) -> Result<Position> {
        if self.hints
            && let Some(hint) = best_action(game.board())?
        {
            writeln!(self.output, "Hint: {}", hint)?;
        }

        loop {
            write!(
                self.output,
                "{} ({}) - enter 1-9, row,col or a label: ",
                self.name,
                game.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match Self::parse(&line) {
                Some(position) if game.is_legal(position) => {
                    debug!(player = %self.name, %position, "Human chose position");
                    return Ok(position);
                }
                Some(position) => writeln!(self.output, "{} is already taken.", position)?,
                None => writeln!(self.output, "Could not understand '{}'.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_minimax::{GameResult, GameSetup};

    fn game_after(positions: &[Position]) -> GameInProgress {
        match GameInProgress::replay(positions).unwrap() {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => panic!("unexpected finish"),
        }
    }

    #[test]
    fn test_accepts_grid_number() {
        let game = GameSetup::new().start();
        let mut human = HumanPlayer::new("you", Cursor::new("5\n"), Vec::new());
        assert_eq!(human.choose(&game).unwrap(), Position::Center);
    }

    #[test]
    fn test_reprompts_on_bad_and_taken_input() {
        let game = game_after(&[Position::Center]);
        let mut output = Vec::new();
        let mut human = HumanPlayer::new("you", Cursor::new("banana\n5\n0,2\n"), &mut output);
        assert_eq!(human.choose(&game).unwrap(), Position::TopRight);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Could not understand 'banana'"));
        assert!(transcript.contains("already taken"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let game = GameSetup::new().start();
        let mut human = HumanPlayer::new("you", Cursor::new(""), std::io::sink());
        assert!(human.choose(&game).is_err());
    }

    #[test]
    fn test_hint_is_printed() {
        let game = game_after(&[Position::TopLeft, Position::Center, Position::TopCenter]);
        let mut output = Vec::new();
        let mut human =
            HumanPlayer::new("you", Cursor::new("3\n"), &mut output).with_hints(true);
        assert_eq!(human.choose(&game).unwrap(), Position::TopRight);
        assert!(String::from_utf8(output).unwrap().starts_with("Hint: Top-right"));
    }
}
