//! Board state representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::{Error, MoveRejection, Result};

/// Number of rows (and columns) on the board
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(Error::InvalidPlayer {
                player: other.to_string(),
            }),
        }
    }
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(player) => player.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Player::X)),
            'O' | 'o' | '0' => Some(Cell::Mark(Player::O)),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Mark(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// A validated board coordinate.
///
/// Row and column are both in `0..3`; cells are ordered row-major, so
/// `(0, 0)` has index 0 and `(2, 2)` has index 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate, validating it lies on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] with [`MoveRejection::OutOfBounds`] if
    /// either component is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Ok(Coord { row, col })
        } else {
            Err(Error::InvalidMove {
                row,
                col,
                reason: MoveRejection::OutOfBounds,
            })
        }
    }

    /// Coordinate for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE).then(|| Coord {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        })
    }

    /// All nine coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).map(|index| Coord {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index of this cell
    pub fn index(&self) -> usize {
        self.row * BOARD_SIDE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a position, derived purely from the board contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// True for a win or a draw
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// The 3x3 grid, row-major.
///
/// The board enforces one mark per cell. Turn alternation is the caller's
/// responsibility: [`Board::place`] accepts either player at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board directly from row-major cells
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check whether a cell holds a mark.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        assert!(
            row < BOARD_SIDE && col < BOARD_SIDE,
            "cell ({row}, {col}) is out of bounds"
        );
        self.cells[row * BOARD_SIDE + col] != Cell::Empty
    }

    /// Place a mark for `player` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the coordinates are out of range or
    /// the cell is occupied. The board is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<()> {
        let coord = Coord::new(row, col)?;
        self.place_at(coord, player)
    }

    /// Place a mark at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the cell is occupied.
    pub fn place_at(&mut self, coord: Coord, player: Player) -> Result<()> {
        let cell = &mut self.cells[coord.index()];
        if *cell != Cell::Empty {
            return Err(Error::InvalidMove {
                row: coord.row,
                col: coord.col,
                reason: MoveRejection::Occupied,
            });
        }
        *cell = Cell::Mark(player);
        Ok(())
    }

    /// Clear a cell without checking what was there.
    ///
    /// Only the search engine uses this, to undo its own simulated moves.
    pub(crate) fn remove(&mut self, row: usize, col: usize) {
        self.cells[row * BOARD_SIDE + col] = Cell::Empty;
    }

    /// Place a mark that is removed again when the returned guard drops.
    ///
    /// The cell must be empty; the search only calls this for cells taken
    /// from [`Board::empty_cells`].
    pub(crate) fn scoped_place(&mut self, coord: Coord, player: Player) -> PlacedMark<'_> {
        debug_assert_eq!(self.cell(coord), Cell::Empty, "scoped_place on {coord}");
        self.cells[coord.index()] = Cell::Mark(player);
        PlacedMark { board: self, coord }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.cell(coord) == Cell::Empty)
    }

    /// Number of marks the player has on the board
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The owner of the first completed line, if any
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_line(&self.cells).map(|(player, _)| player)
    }

    /// Classify the position. A completed line wins even on a full board.
    pub fn outcome(&self) -> GameOutcome {
        if let Some(player) = self.winner() {
            GameOutcome::Win(player)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Whose turn it is under standard X-first alternation.
    ///
    /// Returns `None` when the mark counts could not arise from alternating
    /// play starting with X.
    pub fn next_player(&self) -> Option<Player> {
        let x = self.mark_count(Player::X);
        let o = self.mark_count(Player::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Clear every cell for a new game
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIDE) && i < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters, ignoring whitespace and `/` or `|`
    /// row separators.
    ///
    /// ```
    /// use tictactoe_ai::tictactoe::{Board, GameOutcome, Player};
    ///
    /// let board: Board = "XXX/OO./...".parse().unwrap();
    /// assert_eq!(board.outcome(), GameOutcome::Win(Player::X));
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != BOARD_SIZE {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (position, (&character, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = Cell::from_char(character).ok_or_else(|| Error::InvalidCellCharacter {
                character,
                position,
                context: s.to_string(),
            })?;
        }
        Ok(Board { cells })
    }
}

/// A simulated mark that is cleared when dropped.
///
/// Dereferences to the board so the search can recurse through it.
pub(crate) struct PlacedMark<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl Deref for PlacedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for PlacedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board.remove(self.coord.row, self.coord.col);
    }
}
