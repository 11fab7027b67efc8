//! Launcher settings, taken from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::GAME_PREFIX;

pub const GAMES_DIR_VAR: &str = "ARCADE_GAMES_DIR";
pub const GAME_PREFIX_VAR: &str = "ARCADE_GAME_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Directory scanned for game executables.
    pub games_dir: PathBuf,
    /// File name prefix that marks a game.
    pub prefix: String,
}

impl LauncherConfig {
    /// `ARCADE_GAMES_DIR` (default: the launcher's own directory) and
    /// `ARCADE_GAME_PREFIX` (default `game_`).
    pub fn from_env() -> Result<Self> {
        let games_dir = match env::var_os(GAMES_DIR_VAR) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => executable_dir()?,
        };
        let prefix = env::var(GAME_PREFIX_VAR)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| GAME_PREFIX.to_string());
        Ok(Self { games_dir, prefix })
    }

    pub fn new(games_dir: impl Into<PathBuf>) -> Self {
        Self {
            games_dir: games_dir.into(),
            prefix: GAME_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the launcher executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .context("launcher executable has no parent directory")
}
