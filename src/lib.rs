//! Optimal tic-tac-toe play
//!
//! This crate provides:
//! - A 3x3 board with placement, occupancy and terminal-state queries
//! - An exhaustive minimax search with alpha-beta pruning that never loses
//! - A human-versus-engine game session for presentation layers
//! - Strategy baselines and head-to-head evaluation
//! - A command-line front end (`tictactoe` binary)
//!
//! ```
//! use tictactoe_ai::{best_move, tictactoe::{Board, Coord, Player}};
//!
//! let mut board: Board = "XX./OO./...".parse()?;
//! let result = best_move(&mut board, Player::X).unwrap();
//! assert_eq!(result.coord, Coord::new(0, 2)?);
//! assert_eq!(result.score, 1);
//! # Ok::<(), tictactoe_ai::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use config::{Config, EngineConfig};
pub use error::{Error, MoveRejection, Result};
pub use search::{MoveEvaluation, SearchEngine, SearchResult, SearchStats, best_move};
