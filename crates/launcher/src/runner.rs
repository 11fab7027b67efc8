//! Running a game as a child process.

use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};

use tui_arcade_engine::ShutdownSignal;

use crate::catalog::GameEntry;

/// How a launched game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The game exited on its own; `None` when it died from a signal.
    Exited(Option<i32>),
    /// The launcher killed it because of a shutdown request.
    Killed,
}

impl LaunchOutcome {
    pub fn describe(&self, name: &str) -> String {
        match self {
            LaunchOutcome::Exited(Some(code)) => format!("{name} exited with status {code}"),
            LaunchOutcome::Exited(None) => format!("{name} was terminated by a signal"),
            LaunchOutcome::Killed => format!("{name} was stopped"),
        }
    }
}

/// Capability to run a game to completion while the launcher waits.
pub trait GameRunner {
    fn run(&mut self, game: &GameEntry, shutdown: &ShutdownSignal) -> Result<LaunchOutcome>;
}

/// Spawns the game executable with no arguments and inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    poll_interval: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(20),
        }
    }
}

impl ProcessRunner {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl GameRunner for ProcessRunner {
    fn run(&mut self, game: &GameEntry, shutdown: &ShutdownSignal) -> Result<LaunchOutcome> {
        info!("launching {} ({})", game.name, game.path.display());
        let mut child = Command::new(&game.path)
            .spawn()
            .with_context(|| format!("failed to launch {}", game.path.display()))?;

        loop {
            if let Some(status) = child
                .try_wait()
                .with_context(|| format!("failed to wait for {}", game.name))?
            {
                info!("{} exited: {}", game.name, status);
                return Ok(LaunchOutcome::Exited(status.code()));
            }
            if shutdown.is_requested() {
                warn!("stopping {} on shutdown", game.name);
                // Already exited between the two checks is fine.
                let _ = child.kill();
                child
                    .wait()
                    .with_context(|| format!("failed to reap {}", game.name))?;
                return Ok(LaunchOutcome::Killed);
            }
            std::thread::sleep(self.poll_interval);
        }
    }
}
