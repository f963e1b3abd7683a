//! Evaluate command - Play the engine against a random opponent

use anyhow::{Result, bail};
use clap::Parser;

use super::parse_player_token;
use crate::{
    cli::output::{create_game_progress, print_kv, print_section},
    config::Config,
    pipeline::{Evaluation, OptimalStrategy, RandomStrategy},
    search::SearchEngine,
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the engine against a random opponent")]
pub struct EvaluateArgs {
    /// Number of evaluation games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for the opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token the engine controls (`x` or `o`)
    #[arg(long)]
    pub engine: Option<String>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: EvaluateArgs, mut config: Config) -> Result<()> {
    if let Some(games) = args.games {
        config.evaluate.games = games;
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(token) = &args.engine {
        config.evaluate.engine = parse_player_token(token)?;
    }
    if args.no_pruning {
        config = config.with_pruning(false);
    }

    let settings = config.evaluate;
    let mut candidate = OptimalStrategy::new(SearchEngine::new(config.engine));
    let mut opponent = match settings.seed {
        Some(seed) => RandomStrategy::with_seed(seed),
        None => RandomStrategy::new(),
    };

    let progress = if args.quiet {
        None
    } else {
        Some(create_game_progress(settings.games as u64)?)
    };

    let mut draws = 0;
    let summary = Evaluation::new(settings.games, settings.engine).run(
        &mut candidate,
        &mut opponent,
        |outcome| {
            if outcome == GameOutcome::Draw {
                draws += 1;
            }
            if let Some(pb) = &progress {
                pb.set_message(format!("{draws} draws"));
                pb.inc(1);
            }
        },
    )?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Evaluation");
    print_kv("Engine plays", &settings.engine.to_string());
    print_kv("Games", &summary.games.to_string());
    print_kv("Wins", &summary.wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Losses", &summary.losses.to_string());
    print_kv("Win rate", &format!("{:.1}%", summary.win_rate() * 100.0));

    if summary.losses > 0 {
        bail!("engine lost {} of {} games", summary.losses, summary.games);
    }
    Ok(())
}
