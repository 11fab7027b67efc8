//! Arcade launcher (default binary).
//!
//! Lists the `game_*` executables found next to it and runs the chosen one,
//! taking the terminal back when the game exits.

use anyhow::Result;

use tui_arcade::engine::ShutdownSignal;
use tui_arcade::launcher::{self, LauncherConfig};
use tui_arcade::logging;

fn main() -> Result<()> {
    logging::init()?;
    let config = LauncherConfig::from_env()?;
    let shutdown = ShutdownSignal::install()?;
    launcher::run(&config, &shutdown)
}
