//! Launcher application loop.
//!
//! The launcher owns the terminal while the menu is up and hands it to the
//! game for as long as the game runs.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};

use tui_arcade_engine::ShutdownSignal;
use tui_arcade_term::{FrameBuffer, TerminalRenderer};

use crate::catalog::scan_games;
use crate::config::LauncherConfig;
use crate::menu::{Menu, MenuCommand, MenuInput};
use crate::runner::{GameRunner, ProcessRunner};
use crate::types::INPUT_POLL_MS;
use crate::view::MenuView;

/// Giving the terminal away to a child and taking it back.
pub trait TerminalHandoff {
    fn release(&mut self) -> Result<()>;
    fn reclaim(&mut self) -> Result<()>;
}

impl TerminalHandoff for TerminalRenderer {
    fn release(&mut self) -> Result<()> {
        self.exit()
    }

    fn reclaim(&mut self) -> Result<()> {
        self.enter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Menu state plus the last launch result.
pub struct Launcher<R> {
    menu: Menu,
    runner: R,
    status: Option<String>,
}

impl<R: GameRunner> Launcher<R> {
    pub fn new(menu: Menu, runner: R) -> Self {
        Self {
            menu,
            runner,
            status: None,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// One line about the last launch, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn on_input(
        &mut self,
        input: MenuInput,
        terminal: &mut dyn TerminalHandoff,
        shutdown: &ShutdownSignal,
    ) -> Result<Flow> {
        let index = match self.menu.handle(input) {
            MenuCommand::Redraw => return Ok(Flow::Continue),
            MenuCommand::Quit => return Ok(Flow::Quit),
            MenuCommand::Launch(index) => index,
        };
        let Some(game) = self.menu.games().get(index).cloned() else {
            return Ok(Flow::Continue);
        };

        terminal.release()?;
        let result = self.runner.run(&game, shutdown);
        terminal.reclaim()?;

        self.status = Some(match result {
            Ok(outcome) => outcome.describe(&game.name),
            Err(err) => {
                warn!("{err:#}");
                format!("{err:#}")
            }
        });

        if shutdown.is_requested() {
            return Ok(Flow::Quit);
        }
        Ok(Flow::Continue)
    }
}

/// Scan for games and run the menu until quit or shutdown.
pub fn run(config: &LauncherConfig, shutdown: &ShutdownSignal) -> Result<()> {
    let games = scan_games(&config.games_dir, &config.prefix)?;
    let mut launcher = Launcher::new(Menu::new(games), ProcessRunner::default());

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = event_loop(&mut launcher, &mut renderer, shutdown);
    let restored = renderer.exit();
    result?;
    restored?;

    info!("launcher finished");
    Ok(())
}

fn event_loop<R: GameRunner>(
    launcher: &mut Launcher<R>,
    renderer: &mut TerminalRenderer,
    shutdown: &ShutdownSignal,
) -> Result<()> {
    let view = MenuView;
    let mut fb = FrameBuffer::new(0, 0);
    let poll = Duration::from_millis(INPUT_POLL_MS);
    let mut dirty = true;

    while !shutdown.is_requested() {
        if dirty {
            let viewport = renderer.viewport();
            view.render_into(launcher.menu(), launcher.status(), viewport, &mut fb);
            renderer.draw(&fb)?;
            dirty = false;
        }

        if !event::poll(poll).context("failed to poll terminal events")? {
            continue;
        }
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => {
                if let Some(input) = MenuInput::from_key(key) {
                    if launcher.on_input(input, renderer, shutdown)? == Flow::Quit {
                        break;
                    }
                    dirty = true;
                }
            }
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }
    Ok(())
}
