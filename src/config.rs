//! Per-game settings from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

pub const SEED_VAR: &str = "ARCADE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the game's random source.
    pub seed: u32,
}

impl GameConfig {
    /// `ARCADE_SEED` when set, otherwise a seed taken from the clock.
    pub fn from_env() -> Result<Self> {
        let seed = match env::var(SEED_VAR) {
            Ok(raw) => parse_seed(&raw)?,
            Err(_) => clock_seed(),
        };
        Ok(Self { seed })
    }
}

fn parse_seed(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid {SEED_VAR} value '{raw}'"))
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
