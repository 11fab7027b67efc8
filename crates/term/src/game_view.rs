//! GameView: maps a simulation [`Canvas`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Canvas, Glyph};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders a glyph grid inside a box with a caption line underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // One column per cell keeps the classic look of the games.
        Self {
            cell_w: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the boxed grid plus caption line.
    pub fn frame_size(&self, canvas: &Canvas) -> (u16, u16) {
        let w = (canvas.cols() as u16) * self.cell_w + 2;
        let h = canvas.rows() as u16 + 2;
        (w, h + 1)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(
        &self,
        canvas: &Canvas,
        caption: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_w = (canvas.cols() as u16) * self.cell_w;
        let grid_h = canvas.rows() as u16;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        for (y, row) in canvas.row_slices().enumerate() {
            for (x, glyph) in row.iter().enumerate() {
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                fb.fill_rect(px, py, self.cell_w, 1, glyph.ch(), glyph_style(*glyph));
            }
        }

        let caption_style = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
        fb.put_str(start_x, start_y + frame_h, caption, caption_style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &Canvas, caption: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, caption, viewport, &mut fb);
        fb
    }
}

pub fn border_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

/// Single-line box. Boxes smaller than 2x2 are skipped.
pub fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn glyph_style(glyph: Glyph) -> CellStyle {
    match glyph {
        Glyph::Empty => CellStyle::fg(Rgb::new(90, 90, 100)),
        Glyph::Blank => CellStyle::default(),
        Glyph::Bait => CellStyle::fg(Rgb::new(230, 80, 80)).bold(),
        Glyph::Head => CellStyle::fg(Rgb::new(120, 230, 120)).bold(),
        Glyph::Body => CellStyle::fg(Rgb::new(80, 180, 80)),
        Glyph::Block(kind) => CellStyle::fg(piece_color(kind)).bold(),
        Glyph::Ball => CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        Glyph::Paddle => CellStyle::fg(Rgb::new(80, 200, 220)).bold(),
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn small_canvas() -> Canvas {
        let mut canvas = Canvas::new(2, 3);
        canvas.set(Point::new(1, 0), Glyph::Head);
        canvas.set(Point::new(2, 1), Glyph::Block(PieceKind::T));
        canvas
    }

    #[test]
    fn boxed_grid_with_caption_below() {
        let canvas = small_canvas();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&canvas, "Length: 1", Viewport::new(10, 5));

        // Top anchor only pins the vertical position; columns stay centered.
        assert_eq!(fb.row_text(0), "  ┌───┐   ");
        assert_eq!(fb.row_text(1), "  │.O.│   ");
        assert_eq!(fb.row_text(2), "  │..#│   ");
        assert_eq!(fb.row_text(3), "  └───┘   ");
        // Caption starts under the left border and is clipped at the edge.
        assert_eq!(fb.row_text(4), "  Length: ");
    }

    #[test]
    fn frame_is_centered_in_large_viewport() {
        let canvas = small_canvas();
        let view = GameView::default();
        assert_eq!(view.frame_size(&canvas), (5, 5));

        let fb = view.render(&canvas, "", Viewport::new(9, 9));
        // (9 - 5) / 2 = 2 on both axes.
        assert_eq!(fb.get(2, 2).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(4, 3).map(|c| c.ch), Some('O'));
    }

    #[test]
    fn wide_cells_repeat_the_glyph() {
        let canvas = small_canvas();
        let view = GameView::new(2).with_anchor_y(AnchorY::Top);
        let fb = view.render(&canvas, "", Viewport::new(8, 5));
        assert_eq!(fb.row_text(1), "│..OO..│");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let canvas = small_canvas();
        let fb = GameView::default().render(&canvas, "caption", Viewport::new(2, 1));
        assert_eq!(fb.width(), 2);
    }
}
