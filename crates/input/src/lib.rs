//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! [`TerminalInput`], a non-blocking [`tui_arcade_engine::InputSource`].
//! Only `w a s d q` (either case) and Ctrl+C mean anything; every other key
//! is dropped.

pub mod map;
pub mod sampler;

pub use tui_arcade_types as types;

pub use map::{map_char, map_key_event, should_quit};
pub use sampler::TerminalInput;
