//! Shared entry point of the `game_*` binaries.

use anyhow::Result;
use log::info;

use crate::config::GameConfig;
use crate::core::new_simulation;
use crate::engine::{run_simulation, LoopConfig, ShutdownSignal};
use crate::input::TerminalInput;
use crate::logging;
use crate::term::TerminalDisplay;
use crate::types::GameKind;

/// Play one game of `kind` in the current terminal until quit, game over or signal.
pub fn run(kind: GameKind) -> Result<()> {
    logging::init()?;
    let config = GameConfig::from_env()?;
    info!("starting {} with seed {}", kind.name(), config.seed);

    let shutdown = ShutdownSignal::install()?;
    let mut sim = new_simulation(kind, config.seed);
    let mut input = TerminalInput::new();
    let mut display = TerminalDisplay::enter()?;

    let result = run_simulation(
        sim.as_mut(),
        &mut input,
        &mut display,
        LoopConfig::for_game(kind),
        &shutdown,
    );

    // Always try to restore terminal state.
    let restored = display.exit();
    let report = result?;
    restored?;

    info!(
        "{} finished: {:?} after {} ticks",
        kind.name(),
        report.outcome,
        report.stats.ticks
    );
    // Final score stays visible after the alternate screen is gone.
    println!("{}", sim.caption());
    Ok(())
}
