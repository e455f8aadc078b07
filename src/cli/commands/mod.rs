//! CLI commands

pub mod analyze;
pub mod play;

use anyhow::{Result, anyhow};

use crate::board::Player;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
