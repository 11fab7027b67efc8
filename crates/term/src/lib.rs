//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. Simulations draw glyphs into a
//! [`core::Canvas`]; [`GameView`] turns that into a styled [`FrameBuffer`]
//! and [`TerminalRenderer`] flushes it to the terminal.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Own raw mode and the alternate screen in exactly one place
//! - Restore the terminal on every exit path

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{draw_border, AnchorY, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
