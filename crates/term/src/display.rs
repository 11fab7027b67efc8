//! Engine [`Display`] backed by the real terminal.

use anyhow::Result;

use tui_arcade_engine::Display;

use crate::core::Canvas;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::renderer::TerminalRenderer;

/// Renderer, view and a reused framebuffer.
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    /// Take over the terminal.
    pub fn enter() -> Result<Self> {
        Self::with_view(GameView::default())
    }

    pub fn with_view(view: GameView) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
        })
    }

    /// Give the terminal back. Safe to call more than once; dropping does the same.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, canvas: &Canvas, caption: &str) -> Result<()> {
        let viewport = self.renderer.viewport();
        self.view
            .render_into(canvas, caption, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}
