//! Head-to-head evaluation of two strategies

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, GameOutcome, Player},
};

/// Play one complete game from the empty board; X moves first.
///
/// # Errors
///
/// Propagates any error from a strategy, and [`crate::Error::InvalidMove`]
/// if a strategy picks an occupied cell.
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<GameOutcome> {
    let mut board = Board::new();
    let mut player = Player::X;

    loop {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        let strategy: &mut dyn Strategy = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let coord = strategy.select_move(&board, player)?;
        board.place_at(coord, player)?;
        player = player.opponent();
    }
}

/// Win/draw/loss tally from one side's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationSummary {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl EvaluationSummary {
    /// Count a finished game for `perspective`. Unfinished games are ignored.
    pub fn record(&mut self, outcome: GameOutcome, perspective: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == perspective => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        self.games += 1;
    }

    /// Fraction of games won
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Plays a series of games between a candidate and an opponent
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    games: usize,
    candidate_side: Player,
}

impl Evaluation {
    pub fn new(games: usize, candidate_side: Player) -> Self {
        Self {
            games,
            candidate_side,
        }
    }

    /// Run every game, calling `on_game` after each one with its outcome.
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by [`play_game`].
    pub fn run(
        &self,
        candidate: &mut dyn Strategy,
        opponent: &mut dyn Strategy,
        mut on_game: impl FnMut(GameOutcome),
    ) -> Result<EvaluationSummary> {
        let mut summary = EvaluationSummary::default();

        for game in 0..self.games {
            let outcome = match self.candidate_side {
                Player::X => play_game(candidate, opponent)?,
                Player::O => play_game(opponent, candidate)?,
            };
            debug!(game, outcome = ?outcome, "evaluation game finished");
            summary.record(outcome, self.candidate_side);
            on_game(outcome);
        }

        info!(
            candidate = candidate.name(),
            opponent = opponent.name(),
            side = %self.candidate_side,
            wins = summary.wins,
            draws = summary.draws,
            losses = summary.losses,
            "evaluation complete"
        );

        Ok(summary)
    }
}
