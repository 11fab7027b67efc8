//! Headless input and display for tests, benchmarks and replays.

use std::collections::VecDeque;

use anyhow::Result;

use tui_arcade_core::Canvas;

use crate::game_loop::{Display, InputSource};
use crate::types::GameAction;

/// Replays a fixed sequence of polls.
///
/// Each entry is the result of one poll (`None` = no key pending). Once the
/// script runs out every poll returns `Quit`, so a scripted run always ends.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    polls: VecDeque<Option<GameAction>>,
}

impl ScriptedInput {
    pub fn new(polls: impl IntoIterator<Item = Option<GameAction>>) -> Self {
        Self {
            polls: polls.into_iter().collect(),
        }
    }

    /// Script from typed characters; unknown characters become empty polls.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(GameAction::from_char))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<GameAction>> {
        Ok(self.polls.pop_front().unwrap_or(Some(GameAction::Quit)))
    }
}

/// One presented frame in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub caption: String,
}

/// Keeps every frame it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Vec<Frame>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Display for RecordingDisplay {
    fn present(&mut self, canvas: &Canvas, caption: &str) -> Result<()> {
        self.frames.push(Frame {
            lines: canvas.to_lines(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}
