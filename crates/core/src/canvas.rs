//! Canvas module - the fixed character grid a simulation draws into
//!
//! Simulations never talk to the terminal. They paint [`Glyph`]s into a
//! [`Canvas`] and the renderer decides how each glyph looks on screen.

use crate::types::{PieceKind, Point};

/// What occupies one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    /// Empty playfield cell (`.`)
    #[default]
    Empty,
    /// Empty cell in games without a dotted field (` `)
    Blank,
    /// Snake bait (`X`)
    Bait,
    /// Snake head (`O`)
    Head,
    /// Snake body (`#`)
    Body,
    /// Settled or falling tetromino block (`#`)
    Block(PieceKind),
    /// Pong ball (`O`)
    Ball,
    /// Pong paddle (`|`)
    Paddle,
}

impl Glyph {
    /// Character used for this glyph in the plain-text alphabet.
    pub fn ch(&self) -> char {
        match self {
            Glyph::Empty => '.',
            Glyph::Blank => ' ',
            Glyph::Bait => 'X',
            Glyph::Head => 'O',
            Glyph::Body => '#',
            Glyph::Block(_) => '#',
            Glyph::Ball => 'O',
            Glyph::Paddle => '|',
        }
    }
}

/// Row-major grid of glyphs with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cells: Vec<Glyph>,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Glyph::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if !p.in_bounds(self.cols, self.rows) {
            return None;
        }
        Some((p.y as usize) * self.cols + (p.x as usize))
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.cells.fill(glyph);
    }

    /// Paint one cell. Off-grid points are clipped silently.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.cells[i] = glyph;
        }
    }

    pub fn get(&self, p: Point) -> Option<Glyph> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Iterate rows top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Plain-text rendering, one string per row.
    pub fn to_lines(&self) -> Vec<String> {
        self.row_slices()
            .map(|row| row.iter().map(Glyph::ch).collect())
            .collect()
    }
}
