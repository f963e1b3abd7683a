//! tictactoe CLI - play against, query, and evaluate the minimax engine

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_ai::{Config, cli};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Optimal tic-tac-toe via minimax search", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(cli::commands::play::PlayArgs),

    /// Find the optimal move for a position
    Solve(cli::commands::solve::SolveArgs),

    /// Play the engine against a random opponent
    Evaluate(cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let config = Config::load_or_default(args.config.as_deref())?;

    match args.command {
        Commands::Play(play) => cli::commands::play::execute(play, config),
        Commands::Solve(solve) => cli::commands::solve::execute(solve, config),
        Commands::Evaluate(evaluate) => cli::commands::evaluate::execute(evaluate, config),
    }
}
