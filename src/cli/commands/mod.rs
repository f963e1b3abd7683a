//! Subcommand implementations

pub mod evaluate;
pub mod play;
pub mod solve;

use anyhow::{Context, Result};

use crate::tictactoe::Player;

/// Parse an `x`/`o` token from the command line
pub fn parse_player_token(token: &str) -> Result<Player> {
    token
        .parse()
        .with_context(|| format!("invalid player '{token}', expected 'x' or 'o'"))
}
