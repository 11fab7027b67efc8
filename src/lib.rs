//! Terminal arcade (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_arcade::{core,engine,input,launcher,term,types}`) and holds the
//! startup code shared by the binaries: logging, environment config and the
//! [`play::run`] entry point of the `game_*` executables.

pub mod config;
pub mod logging;
pub mod play;

pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_launcher as launcher;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
