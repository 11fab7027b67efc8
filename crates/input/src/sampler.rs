//! Non-blocking terminal key sampling.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_arcade_engine::InputSource;

use crate::map::map_key_event;
use crate::types::GameAction;

/// Reads at most one pending key per poll straight from the terminal.
///
/// Expects raw mode to be enabled by whoever owns the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<GameAction>> {
        if !event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            return Ok(None);
        }
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}
