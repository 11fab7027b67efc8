//! Board module - the settled tetris grid
//!
//! The board is a 15x15 grid where each cell can be empty or filled with the
//! kind of the piece that was merged there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..14 (left to right), y ranges 0..14 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, Point, TETRIS_COLS, TETRIS_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = TETRIS_COLS * TETRIS_ROWS;

/// Row indices removed by one [`Board::clear_full_rows`] pass.
///
/// Every removal strictly reduces the number of full rows, so a pass can
/// never clear more rows than the board has.
pub type ClearedRows = ArrayVec<usize, TETRIS_ROWS>;

/// The settled grid - 15 columns x 15 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= TETRIS_COLS as i16 || y < 0 || y >= TETRIS_ROWS as i16 {
            return None;
        }
        Some((y as usize) * TETRIS_COLS + (x as usize))
    }

    pub fn width(&self) -> usize {
        TETRIS_COLS
    }

    pub fn height(&self) -> usize {
        TETRIS_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= TETRIS_ROWS {
            return false;
        }
        let start = y * TETRIS_COLS;
        self.cells[start..start + TETRIS_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift all rows above down by one and empty the top row
    /// Returns false if `y` is out of bounds
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= TETRIS_ROWS {
            return false;
        }

        let width = TETRIS_COLS;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
        true
    }

    /// Clear all full rows, scanning bottom to top
    ///
    /// After a row is removed the same index is checked again, because the row
    /// shifted into it may be full as well. Returns the index each removal
    /// happened at, in scan order.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = TETRIS_ROWS;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write a piece's blocks into the grid. Blocks above the top row are dropped.
    pub fn merge(&mut self, blocks: &[Point], kind: PieceKind) {
        for p in blocks {
            self.set(p.x, p.y, Some(kind));
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill an entire row (test and benchmark setup)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y < TETRIS_ROWS {
            let start = y * TETRIS_COLS;
            self.cells[start..start + TETRIS_COLS].fill(Some(kind));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
