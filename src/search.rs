//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The engine searches every legal continuation to the end of the game, so
//! the value it reports is the game-theoretic value of the position: `+1`
//! if the searching player wins with perfect play, `0` for a draw, `-1` for
//! a loss. There is no depth limit and no transposition table; the 3x3
//! tree is small enough that a full search from the empty board finishes
//! almost instantly.
//!
//! Simulated moves are made directly on the caller's board and undone before
//! each recursive call returns, so the board is identical before and after
//! every search.

use serde::Serialize;
use tracing::debug;

use crate::{
    config::EngineConfig,
    tictactoe::{Board, Cell, Coord, GameOutcome, Player},
};

/// Score of a won position
pub const WIN: i32 = 1;

/// Score of a drawn position
pub const DRAW: i32 = 0;

/// Score of a lost position
pub const LOSS: i32 = -1;

const NEG_INFINITY: i32 = i32::MIN;
const POS_INFINITY: i32 = i32::MAX;

/// Chosen move and its value for the player who searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub coord: Coord,
    pub score: i32,
}

/// Exact value of one legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEvaluation {
    pub coord: Coord,
    pub score: i32,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Nodes whose remaining siblings were skipped
    pub cutoffs: u64,
}

/// Minimax search engine.
///
/// The engine holds only configuration; each call is independent.
///
/// ```
/// use tictactoe_ai::search::SearchEngine;
/// use tictactoe_ai::tictactoe::{Board, Player};
///
/// let mut board = Board::new();
/// let result = SearchEngine::default().best_move(&mut board, Player::X).unwrap();
/// assert_eq!(result.score, 0);
/// assert_eq!(board, Board::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Find the best move for `player`.
    ///
    /// Among equally valued moves the earliest cell in row-major order is
    /// chosen, so the result is reproducible for a given board.
    ///
    /// Returns `None` if the board has no empty cell. Searching a board
    /// that already has a winner is a caller error: the result is some
    /// empty cell scored with the existing winner's value.
    pub fn best_move(&self, board: &mut Board, player: Player) -> Option<SearchResult> {
        self.best_move_with_stats(board, player).0
    }

    /// [`SearchEngine::best_move`] together with node counters.
    pub fn best_move_with_stats(
        &self,
        board: &mut Board,
        player: Player,
    ) -> (Option<SearchResult>, SearchStats) {
        let mut search = Search::new(player, self.config.pruning);
        let result = search.root(board);

        debug!(
            player = %player,
            coord = ?result.map(|r| r.coord),
            score = ?result.map(|r| r.score),
            nodes = search.stats.nodes,
            cutoffs = search.stats.cutoffs,
            pruning = self.config.pruning,
            "search complete"
        );

        (result, search.stats)
    }

    /// Exact value of every legal move for `player`, in row-major order.
    ///
    /// Each move is searched with a full window, so unlike
    /// [`SearchEngine::best_move`] none of the values are bounds.
    pub fn evaluate_moves(&self, board: &mut Board, player: Player) -> Vec<MoveEvaluation> {
        let mut search = Search::new(player, self.config.pruning);
        let mut evaluations = Vec::new();

        for coord in Coord::all() {
            if board.cell(coord) != Cell::Empty {
                continue;
            }
            let score = {
                let mut placed = board.scoped_place(coord, player);
                search.minimax(&mut placed, false, NEG_INFINITY, POS_INFINITY)
            };
            evaluations.push(MoveEvaluation { coord, score });
        }

        debug!(
            player = %player,
            moves = evaluations.len(),
            nodes = search.stats.nodes,
            "evaluated root moves"
        );

        evaluations
    }
}

/// Find the best move for `player` with the default engine.
pub fn best_move(board: &mut Board, player: Player) -> Option<SearchResult> {
    SearchEngine::default().best_move(board, player)
}

/// State of a single search call
struct Search {
    maximizer: Player,
    pruning: bool,
    stats: SearchStats,
}

impl Search {
    fn new(maximizer: Player, pruning: bool) -> Self {
        Self {
            maximizer,
            pruning,
            stats: SearchStats::default(),
        }
    }

    /// Maximizing root: keep the first move whose value strictly beats the
    /// best so far.
    fn root(&mut self, board: &mut Board) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;
        let mut alpha = NEG_INFINITY;

        for coord in Coord::all() {
            if board.cell(coord) != Cell::Empty {
                continue;
            }
            let score = {
                let mut placed = board.scoped_place(coord, self.maximizer);
                self.minimax(&mut placed, false, alpha, POS_INFINITY)
            };
            if best.is_none_or(|b| score > b.score) {
                best = Some(SearchResult { coord, score });
            }
            if self.pruning {
                // A later move that fails low returns a bound <= alpha and
                // can never replace the current best.
                alpha = alpha.max(score);
            }
        }

        best
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        match board.outcome() {
            GameOutcome::Win(player) if player == self.maximizer => return WIN,
            GameOutcome::Win(_) => return LOSS,
            GameOutcome::Draw => return DRAW,
            GameOutcome::InProgress => {}
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { NEG_INFINITY } else { POS_INFINITY };

        for coord in Coord::all() {
            if board.cell(coord) != Cell::Empty {
                continue;
            }
            let value = {
                let mut placed = board.scoped_place(coord, mover);
                self.minimax(&mut placed, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        let result = best_move(&mut b, Player::X).unwrap();
        assert_eq!(result.score, DRAW);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_completes_own_row() {
        // XX.
        // OO.
        // ...
        let mut b = board("XX./OO./...");
        let result = best_move(&mut b, Player::X).unwrap();
        assert_eq!(result.coord, Coord::new(0, 2).unwrap());
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // XX.
        // .O.
        // ...
        let mut b = board("XX./.O./...");
        let result = best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.coord, Coord::new(0, 2).unwrap());
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_lost_position_scores_loss() {
        // X has a double threat; O cannot stop both.
        // X.X
        // .O.
        // X.O
        let mut b = board("X.X/.O./X.O");
        let result = best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.score, LOSS);
        // Every move loses, so the earliest empty cell is kept.
        assert_eq!(result.coord, Coord::new(0, 1).unwrap());
    }

    #[test]
    fn test_earlier_forced_win_beats_immediate_win() {
        // .O.
        // ..X
        // XOX
        // (1, 1) wins at once, but (0, 2) comes first and also forks.
        let mut b = board(".O./..X/XOX");
        let result = best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.coord, Coord::new(0, 2).unwrap());
        assert_eq!(result.score, WIN);

        let values = SearchEngine::default().evaluate_moves(&mut b, Player::O);
        let immediate = values
            .iter()
            .find(|evaluation| evaluation.coord == Coord::new(1, 1).unwrap())
            .unwrap();
        assert_eq!(immediate.score, WIN);
        assert_eq!(values[0].coord, Coord::new(0, 0).unwrap());
        assert_eq!(values[0].score, LOSS);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOX/XOO/OXX");
        assert_eq!(best_move(&mut b, Player::X), None);
        assert_eq!(best_move(&mut b, Player::O), None);
    }

    #[test]
    fn test_decided_board_is_degenerate_not_fatal() {
        // X already won; O's search just reports the existing result.
        let mut b = board("XXX/OO./...");
        let before = b;
        let result = best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.score, LOSS);
        assert_eq!(result.coord, Coord::new(1, 2).unwrap());
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let pruned = SearchEngine::new(EngineConfig { pruning: true });
        let plain = SearchEngine::new(EngineConfig { pruning: false });

        let (fast, fast_stats) = pruned.best_move_with_stats(&mut Board::new(), Player::X);
        let (slow, slow_stats) = plain.best_move_with_stats(&mut Board::new(), Player::X);

        assert_eq!(fast, slow);
        assert_eq!(slow_stats.cutoffs, 0);
        assert!(fast_stats.cutoffs > 0);
        assert!(fast_stats.nodes < slow_stats.nodes);
        // Plain minimax visits every node of the full game tree.
        assert_eq!(slow_stats.nodes, 549_945);
    }

    #[test]
    fn test_evaluate_moves_exact_values() {
        // X to move with a win at (0,2); the other moves let O win or draw.
        // XX.
        // OO.
        // ...
        let mut b = board("XX./OO./...");
        let evaluations = SearchEngine::default().evaluate_moves(&mut b, Player::X);
        assert_eq!(evaluations.len(), 5);
        assert_eq!(evaluations[0].coord, Coord::new(0, 2).unwrap());
        assert_eq!(evaluations[0].score, WIN);
        // Not blocking at (1,2) hands O the middle row.
        for evaluation in &evaluations[2..] {
            assert_eq!(evaluation.score, LOSS, "{:?}", evaluation.coord);
        }
        assert_eq!(evaluations[1].coord, Coord::new(1, 2).unwrap());
        assert_eq!(b, board("XX./OO./..."));
    }
}
