//! Strategy port - abstraction over move selection
//!
//! Anything that can pick a move for a side implements this trait:
//! - the optimal minimax engine
//! - baselines such as uniform random play

use crate::{
    Result,
    tictactoe::{Board, Coord, Player},
};

/// Move-selection interface used by game pipelines.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::ports::Strategy;
/// use tictactoe_ai::pipeline::OptimalStrategy;
/// use tictactoe_ai::tictactoe::{Board, Player};
///
/// fn opening<S: Strategy>(strategy: &mut S) -> tictactoe_ai::Result<String> {
///     let coord = strategy.select_move(&Board::new(), Player::X)?;
///     Ok(format!("{} opens at {coord}", strategy.name()))
/// }
///
/// assert_eq!(opening(&mut OptimalStrategy::default())?, "Optimal opens at (0, 0)");
/// # Ok::<(), tictactoe_ai::Error>(())
/// ```
pub trait Strategy {
    /// Choose an empty cell for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Coord>;

    /// Name used in logs and reports
    fn name(&self) -> &str;
}
