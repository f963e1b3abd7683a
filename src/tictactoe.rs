//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIDE, BOARD_SIZE, Board, Cell, Coord, GameOutcome, Player};
pub use game::{GameSession, TurnReport};
pub use lines::{LineAnalyzer, WINNING_LINES};
