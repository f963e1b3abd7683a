//! Human-versus-engine game session

use serde::Serialize;
use tracing::{debug, info};

use super::board::{Board, Coord, GameOutcome, Player};
use crate::{
    Error, Result,
    config::Config,
    search::{SearchEngine, SearchResult},
};

/// What happened during one human turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The human's placement
    pub human_move: Coord,
    /// The engine's reply, absent if the human's move ended the game
    pub engine_move: Option<SearchResult>,
    /// Outcome after both placements
    pub outcome: GameOutcome,
}

/// A single game between a human and the search engine.
///
/// The session owns the board and lends it to the engine for each search.
/// X always moves first; when the human plays O, call
/// [`GameSession::engine_turn`] to get the opening move.
///
/// ```
/// use tictactoe_ai::search::SearchEngine;
/// use tictactoe_ai::tictactoe::{GameOutcome, GameSession, Player};
///
/// let mut game = GameSession::new(Player::X, SearchEngine::default());
/// let report = game.play(1, 1)?;
/// assert!(report.engine_move.is_some());
/// assert_eq!(report.outcome, GameOutcome::InProgress);
/// # Ok::<(), tictactoe_ai::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human: Player,
    to_move: Player,
    engine: SearchEngine,
}

impl GameSession {
    pub fn new(human: Player, engine: SearchEngine) -> Self {
        Self {
            board: Board::new(),
            human,
            to_move: Player::X,
            engine,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.play.human, SearchEngine::new(config.engine))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn engine_player(&self) -> Player {
        self.human.opponent()
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Apply the human's move at `(row, col)` and let the engine reply.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has already ended
    /// - [`Error::OutOfTurn`] if the engine is due to move
    /// - [`Error::InvalidMove`] if the cell is occupied or off the board
    ///
    /// The board is unchanged when an error is returned.
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnReport> {
        self.ensure_in_progress()?;
        if self.to_move != self.human {
            return Err(Error::OutOfTurn {
                expected: self.to_move,
            });
        }

        let coord = Coord::new(row, col)?;
        self.board.place_at(coord, self.human)?;
        self.to_move = self.engine_player();
        debug!(player = %self.human, coord = %coord, "human move");

        let engine_move = if self.outcome().is_terminal() {
            None
        } else {
            self.engine_turn()?
        };

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(outcome = ?outcome, "game finished");
        }

        Ok(TurnReport {
            human_move: coord,
            engine_move,
            outcome,
        })
    }

    /// Let the engine make its move.
    ///
    /// Returns `Ok(None)` only if the board has no empty cell.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has already ended
    /// - [`Error::OutOfTurn`] if the human is due to move
    pub fn engine_turn(&mut self) -> Result<Option<SearchResult>> {
        self.ensure_in_progress()?;
        let engine_player = self.engine_player();
        if self.to_move != engine_player {
            return Err(Error::OutOfTurn {
                expected: self.to_move,
            });
        }

        let Some(result) = self.engine.best_move(&mut self.board, engine_player) else {
            return Ok(None);
        };
        self.board.place_at(result.coord, engine_player)?;
        self.to_move = self.human;
        debug!(
            player = %engine_player,
            coord = %result.coord,
            score = result.score,
            "engine move"
        );
        Ok(Some(result))
    }

    /// Clear the board for a new game; X moves first again
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        debug!("game reset");
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.outcome().is_terminal() {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MoveRejection, tictactoe::Cell};

    #[test]
    fn test_engine_replies_to_human() {
        let mut game = GameSession::new(Player::X, SearchEngine::default());
        let report = game.play(0, 0).unwrap();

        let reply = report.engine_move.unwrap();
        assert_eq!(game.board().cell(reply.coord), Cell::Mark(Player::O));
        assert_eq!(game.board().mark_count(Player::X), 1);
        assert_eq!(game.board().mark_count(Player::O), 1);
        assert_eq!(game.to_move(), Player::X);
        // Against a corner opening the only non-losing reply is the centre.
        assert_eq!(reply.coord, Coord::new(1, 1).unwrap());
        assert_eq!(reply.score, 0);
    }

    #[test]
    fn test_invalid_move_leaves_board_untouched() {
        let mut game = GameSession::new(Player::X, SearchEngine::default());
        game.play(0, 0).unwrap();
        let before = *game.board();

        let err = game.play(0, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::Occupied,
                ..
            }
        ));
        let err = game.play(5, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::OutOfBounds,
                ..
            }
        ));
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_human_as_o_waits_for_engine() {
        let mut game = GameSession::new(Player::O, SearchEngine::default());
        assert!(matches!(
            game.play(1, 1),
            Err(Error::OutOfTurn { expected: Player::X })
        ));

        let opening = game.engine_turn().unwrap().unwrap();
        assert_eq!(opening.coord, Coord::new(0, 0).unwrap());
        assert_eq!(opening.score, 0);
        assert!(matches!(
            game.engine_turn(),
            Err(Error::OutOfTurn { expected: Player::O })
        ));
        assert!(game.play(1, 1).is_ok());
    }

    #[test]
    fn test_game_over_and_reset() {
        let mut game = GameSession::new(Player::X, SearchEngine::default());
        // Feed the first empty cell until the game ends.
        while !game.outcome().is_terminal() {
            let coord = game.board().empty_cells().next().unwrap();
            game.play(coord.row(), coord.col()).unwrap();
        }
        assert_ne!(game.outcome(), GameOutcome::Win(Player::X));
        assert!(matches!(game.play(0, 0), Err(Error::GameOver)));

        game.reset();
        assert_eq!(*game.board(), Board::new());
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(game.to_move(), Player::X);
    }
}
