//! Solve command - Best move and move values for a position

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use super::parse_player_token;
use crate::{
    cli::output::{print_kv, print_section, render_board},
    config::Config,
    search::{MoveEvaluation, SearchEngine, SearchResult, SearchStats},
    tictactoe::{Board, Coord, GameOutcome, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SolveArgs {
    /// Board as nine cells, row-major (`X`, `O`, `.`); `/` separates rows
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Side to search for (`x` or `o`); inferred from mark counts if omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything the solver found for one position
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub player: Player,
    pub outcome: GameOutcome,
    pub best: Option<SearchResult>,
    pub moves: Vec<MoveEvaluation>,
    pub immediate_wins: Vec<Coord>,
    pub opponent_threats: Vec<Coord>,
    pub stats: SearchStats,
}

/// Analyse `board` for `player`.
///
/// A finished board is reported as-is, without searching.
pub fn solve(board: &Board, player: Player, engine: &SearchEngine) -> SolveReport {
    let outcome = board.outcome();
    let mut scratch = *board;

    let (best, moves, stats) = if outcome.is_terminal() {
        (None, Vec::new(), SearchStats::default())
    } else {
        let (best, stats) = engine.best_move_with_stats(&mut scratch, player);
        let moves = engine.evaluate_moves(&mut scratch, player);
        (best, moves, stats)
    };

    let to_coords = |cells: Vec<usize>| -> Vec<Coord> {
        cells.into_iter().filter_map(Coord::from_index).collect()
    };

    SolveReport {
        board: board.cells().iter().map(|cell| cell.to_char()).collect(),
        player,
        outcome,
        best,
        moves,
        immediate_wins: to_coords(LineAnalyzer::winning_moves(board.cells(), player)),
        opponent_threats: to_coords(LineAnalyzer::winning_moves(
            board.cells(),
            player.opponent(),
        )),
        stats,
    }
}

pub fn execute(args: SolveArgs, mut config: Config) -> Result<()> {
    if args.no_pruning {
        config = config.with_pruning(false);
    }

    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let player = match &args.player {
        Some(token) => parse_player_token(token)?,
        None => match board.next_player() {
            Some(player) => player,
            None => bail!("cannot infer the side to move from '{}'; pass --player", args.board),
        },
    };

    let report = solve(&board, player, &SearchEngine::new(config.engine));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&board));
    print_kv("Player", &player.to_string());
    print_kv("Outcome", &format!("{:?}", report.outcome));

    if report.outcome.is_terminal() {
        return Ok(());
    }

    print_section("Search");
    match report.best {
        Some(best) => {
            print_kv("Best move", &best.coord.to_string());
            print_kv("Value", &describe_score(best.score));
        }
        None => print_kv("Best move", "none"),
    }
    print_kv("Nodes", &report.stats.nodes.to_string());
    print_kv("Cutoffs", &report.stats.cutoffs.to_string());
    print_kv("Immediate wins", &format_coords(&report.immediate_wins));
    print_kv("Opponent threats", &format_coords(&report.opponent_threats));

    print_section("Move values");
    for evaluation in &report.moves {
        print_kv(
            &evaluation.coord.to_string(),
            &describe_score(evaluation.score),
        );
    }

    Ok(())
}

fn describe_score(score: i32) -> String {
    let label = match score.signum() {
        1 => "win",
        -1 => "loss",
        _ => "draw",
    };
    format!("{score:+} ({label})")
}

fn format_coords(coords: &[Coord]) -> String {
    if coords.is_empty() {
        return "none".to_string();
    }
    coords
        .iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
