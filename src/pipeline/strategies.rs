//! Strategy implementations: the optimal engine and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Strategy,
    search::SearchEngine,
    tictactoe::{Board, Coord, Player},
};

/// Plays the minimax engine's choice
#[derive(Debug, Clone, Default)]
pub struct OptimalStrategy {
    engine: SearchEngine,
}

impl OptimalStrategy {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }
}

impl Strategy for OptimalStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Coord> {
        // The search needs exclusive access; work on a private copy.
        let mut scratch = *board;
        self.engine
            .best_move(&mut scratch, player)
            .map(|result| result.coord)
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "Optimal"
    }
}

/// Picks uniformly among empty cells
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<Coord> {
        let moves: Vec<Coord> = board.empty_cells().collect();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
