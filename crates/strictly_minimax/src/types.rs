//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used by the compact board encoding.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a single cell character.
    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' | '0' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Number of marks each player has on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    /// Marks placed by X.
    pub x: usize,
    /// Marks placed by O.
    pub o: usize,
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Every transition produces a fresh `Board`; nothing mutates a board in
/// place, so search branches can never observe each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// The empty starting board.
    pub const fn initial() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self::initial()
    }

    /// Builds a board from squares in row-major order.
    pub const fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with one square replaced.
    ///
    /// This bypasses turn order entirely; use [`Board::apply`] for real moves.
    pub fn with_square(&self, pos: Position, square: Square) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = square;
        Self { squares }
    }

    /// Counts the marks of each player.
    pub fn mark_counts(&self) -> MarkCounts {
        self.squares
            .iter()
            .fold(MarkCounts::default(), |mut counts, square| {
                match square {
                    Square::Occupied(Player::X) => counts.x += 1,
                    Square::Occupied(Player::O) => counts.o += 1,
                    Square::Empty => {}
                }
                counts
            })
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves whenever the counts are equal (including the empty board),
    /// O otherwise.
    pub fn player_to_move(&self) -> Player {
        let counts = self.mark_counts();
        if counts.x <= counts.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Compact nine-character encoding, e.g. `"XO..X...O"`.
    pub fn encode(&self) -> String {
        self.squares.iter().map(|s| s.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    /// Renders a 3-line grid; empty squares show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell characters. Whitespace, `/` and `|` separate rows
    /// and are ignored, so `"X.O/.X./..O"`, `"X.O .X. ..O"` and
    /// `"X.O.X...O"` are equivalent. Empty cells are `.`, `_` or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(*c, '/' | '|'))
            .collect();

        if chars.len() != 9 {
            return Err(BoardError::InvalidLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut squares = [Square::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            squares[i] = Square::from_char(c).ok_or(BoardError::InvalidCharacter {
                character: c,
                position: i,
            })?;
        }

        Ok(Self { squares })
    }
}
