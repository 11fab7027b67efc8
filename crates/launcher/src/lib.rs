//! Game launcher: finds `game_*` executables next to itself, shows a menu
//! and runs the chosen game as a child process.
//!
//! The games never depend on this crate; it only knows how to find and
//! start executables.

pub mod app;
pub mod catalog;
pub mod config;
pub mod menu;
pub mod runner;
pub mod view;

pub use tui_arcade_types as types;

pub use app::{run, Flow, Launcher, TerminalHandoff};
pub use catalog::{scan_games, GameEntry, MAX_GAMES};
pub use config::LauncherConfig;
pub use menu::{Menu, MenuCommand, MenuInput, MenuOption};
pub use runner::{GameRunner, LaunchOutcome, ProcessRunner};
pub use view::{option_row_text, MenuView};
