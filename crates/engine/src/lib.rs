//! Real-time tick loop shared by every game.
//!
//! The loop is decoupled from the terminal through two small traits:
//! [`InputSource`] (non-blocking key polling) and [`Display`] (full-frame
//! presentation). Terminal-backed implementations live in the `input` and
//! `term` crates; [`headless`] provides scripted stand-ins.
//!
//! Timing is wall-clock driven: input is polled every few milliseconds while
//! the simulation only steps when its fixed interval has elapsed
//! (see [`TickScheduler`]).

pub mod game_loop;
pub mod headless;
pub mod scheduler;
pub mod signal;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use game_loop::{
    run_simulation, Display, InputSource, LoopConfig, LoopStats, Outcome, RunReport,
};
pub use headless::{Frame, RecordingDisplay, ScriptedInput};
pub use scheduler::TickScheduler;
pub use signal::ShutdownSignal;
