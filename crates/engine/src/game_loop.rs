//! The real-time tick loop.
//!
//! One loop iteration:
//!
//! 1. stop if a shutdown was requested
//! 2. poll input without blocking (at most one key)
//! 3. step the simulation when the tick is due
//! 4. redraw if anything changed that the game wants to show
//! 5. otherwise sleep a little, never past the next tick

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use tui_arcade_core::{Canvas, Simulation};

use crate::scheduler::TickScheduler;
use crate::signal::ShutdownSignal;
use crate::types::{GameAction, GameKind, RedrawPolicy, Status, INPUT_POLL_MS};

/// Non-blocking source of abstract key actions.
pub trait InputSource {
    /// Return the next pending action, or `None` right away if there is none.
    fn poll(&mut self) -> Result<Option<GameAction>>;
}

/// Somewhere to show a frame.
pub trait Display {
    /// Full redraw of the grid plus its caption line.
    fn present(&mut self, canvas: &Canvas, caption: &str) -> Result<()>;
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The quit key was pressed.
    Quit,
    /// The simulation reached its terminal state.
    GameOver,
    /// An external interrupt or terminate request arrived.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub tick: Duration,
    pub poll_interval: Duration,
    pub redraw: RedrawPolicy,
}

impl LoopConfig {
    pub fn for_game(kind: GameKind) -> Self {
        Self {
            tick: Duration::from_millis(kind.tick_ms()),
            poll_interval: Duration::from_millis(INPUT_POLL_MS),
            redraw: kind.redraw(),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Counters collected while the loop ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    pub ticks: u64,
    pub actions: u64,
    pub frames: u64,
}

/// Result of one finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub stats: LoopStats,
}

/// Drive `sim` until quit, game over or shutdown.
pub fn run_simulation<S, I, D>(
    sim: &mut S,
    input: &mut I,
    display: &mut D,
    config: LoopConfig,
    shutdown: &ShutdownSignal,
) -> Result<RunReport>
where
    S: Simulation + ?Sized,
    I: InputSource + ?Sized,
    D: Display + ?Sized,
{
    let mut canvas = sim.new_canvas();
    let mut stats = LoopStats::default();
    let mut scheduler = TickScheduler::new(config.tick, Instant::now());

    info!("starting {} loop, tick {:?}", sim.kind().name(), config.tick);
    present(sim, &mut canvas, display, &mut stats)?;

    let outcome = loop {
        if shutdown.is_requested() {
            break Outcome::Interrupted;
        }

        let mut dirty = false;

        if let Some(action) = input.poll()? {
            if action == GameAction::Quit {
                break Outcome::Quit;
            }
            sim.apply_action(action);
            stats.actions += 1;
            dirty = config.redraw == RedrawPolicy::OnChange;
        }

        let now = Instant::now();
        if scheduler.due(now) {
            stats.ticks += 1;
            let status = sim.step();
            if status == Status::Over {
                present(sim, &mut canvas, display, &mut stats)?;
                break Outcome::GameOver;
            }
            dirty = true;
        }

        if dirty {
            present(sim, &mut canvas, display, &mut stats)?;
        } else {
            let nap = config
                .poll_interval
                .min(scheduler.until_next(Instant::now()));
            if !nap.is_zero() {
                std::thread::sleep(nap);
            }
        }
    };

    debug!("loop finished: {:?} {:?}", outcome, stats);
    Ok(RunReport { outcome, stats })
}

fn present<S, D>(
    sim: &S,
    canvas: &mut Canvas,
    display: &mut D,
    stats: &mut LoopStats,
) -> Result<()>
where
    S: Simulation + ?Sized,
    D: Display + ?Sized,
{
    sim.draw(canvas);
    display.present(canvas, &sim.caption())?;
    stats.frames += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{RecordingDisplay, ScriptedInput};
    use tui_arcade_core::SnakeGame;

    #[test]
    fn quit_key_ends_loop_before_any_tick() {
        let mut sim = SnakeGame::new(1);
        let mut input = ScriptedInput::new([Some(GameAction::Quit)]);
        let mut display = RecordingDisplay::new();
        let config = LoopConfig::for_game(GameKind::Snake).with_tick(Duration::from_secs(60));

        let report =
            run_simulation(&mut sim, &mut input, &mut display, config, &ShutdownSignal::new())
                .unwrap();

        assert_eq!(report.outcome, Outcome::Quit);
        assert_eq!(report.stats.ticks, 0);
        // Initial frame only.
        assert_eq!(display.frames().len(), 1);
    }

    #[test]
    fn pending_shutdown_interrupts_immediately() {
        let mut sim = SnakeGame::new(1);
        let mut input = ScriptedInput::new([]);
        let mut display = RecordingDisplay::new();
        let shutdown = ShutdownSignal::new();
        shutdown.request();

        let report = run_simulation(
            &mut sim,
            &mut input,
            &mut display,
            LoopConfig::for_game(GameKind::Snake),
            &shutdown,
        )
        .unwrap();

        assert_eq!(report.outcome, Outcome::Interrupted);
    }
}
