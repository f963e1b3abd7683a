//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use super::parse_player_token;
use crate::{
    Error,
    cli::output::render_board,
    config::Config,
    tictactoe::{GameOutcome, GameSession},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Side you play (`x` or `o`); X always moves first
    #[arg(long)]
    pub human: Option<String>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: PlayArgs, mut config: Config) -> Result<()> {
    if let Some(token) = &args.human {
        config = config.with_human(parse_player_token(token)?);
    }
    if args.no_pruning {
        config = config.with_pruning(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config)
}

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(usize, usize),
    Quit,
}

/// Accepts `row col`, `row,col`, a keypad number 1-9, or `q`.
///
/// Range checking of `row col` is left to the game session.
fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if matches!(line, "q" | "quit" | "exit") {
        return Some(Input::Quit);
    }

    let numbers: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<_, _>>()
        .ok()?;

    match numbers.as_slice() {
        &[row, col] => Some(Input::Move(row, col)),
        &[cell @ 1..=9] => Some(Input::Move((cell - 1) / 3, (cell - 1) % 3)),
        _ => None,
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Drive games over arbitrary input and output streams until the player
/// quits, declines a rematch, or input ends.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W, config: &Config) -> Result<()> {
    let mut game = GameSession::from_config(config);
    writeln!(
        out,
        "You are {}. Enter a move as `row col` (0-2) or a cell number 1-9; `q` quits.",
        game.human()
    )?;

    loop {
        if game.to_move() == game.engine_player() {
            if let Some(opening) = game.engine_turn()? {
                writeln!(out, "Engine plays {}", opening.coord)?;
            }
        }

        while !game.outcome().is_terminal() {
            writeln!(out, "\n{}", render_board(game.board()))?;
            write!(out, "Your move ({}): ", game.human())?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            match parse_input(&line) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Move(row, col)) => match game.play(row, col) {
                    Ok(report) => {
                        if let Some(reply) = report.engine_move {
                            writeln!(out, "Engine plays {}", reply.coord)?;
                        }
                    }
                    Err(err @ Error::InvalidMove { .. }) => writeln!(out, "{err}; try again")?,
                    Err(err) => return Err(err.into()),
                },
                None => writeln!(
                    out,
                    "Could not read '{}'; enter `row col` or 1-9",
                    line.trim()
                )?,
            }
        }

        writeln!(out, "\n{}", render_board(game.board()))?;
        let message = match game.outcome() {
            GameOutcome::Win(winner) if winner == game.human() => "You win!",
            GameOutcome::Win(_) => "The engine wins.",
            GameOutcome::Draw => "It's a draw!",
            GameOutcome::InProgress => "Game abandoned.",
        };
        writeln!(out, "{message}")?;

        write!(out, "Play again? [y/N]: ")?;
        out.flush()?;
        let Some(answer) = read_line(&mut input)? else {
            return Ok(());
        };
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            return Ok(());
        }
        game.reset();
    }
}
