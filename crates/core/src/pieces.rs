//! Pieces module - tetromino shapes and the free rotation transform
//!
//! Every shape is four block offsets. The second block (index 1) is the pivot
//! all rotations turn around.

use crate::types::{PieceKind, Point, TETRIS_COLS, TETRIS_SPAWN_Y};

/// Shape of a piece - 4 block offsets from the spawn origin
pub type PieceShape = [(i16, i16); 4];

/// Index of the block rotations pivot around
pub const PIVOT: usize = 1;

/// Get the spawn shape (block offsets) for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::S => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, -1)],
    }
}

/// Where the shape origin lands when a piece spawns: horizontally centered,
/// above the visible grid.
pub const fn spawn_origin() -> Point {
    Point::new((TETRIS_COLS / 2) as i16, TETRIS_SPAWN_Y)
}

/// Rotate `p` 90° about `pivot`: `(x, y) -> (-(y - cy) + cx, (x - cx) + cy)`.
#[inline(always)]
pub fn rotate_about(p: Point, pivot: Point) -> Point {
    Point::new(-(p.y - pivot.y) + pivot.x, (p.x - pivot.x) + pivot.y)
}

/// An active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub blocks: [Point; 4],
}

impl Tetromino {
    /// Create a tetromino at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let origin = spawn_origin();
        let shape = get_shape(kind);
        let mut blocks = [Point::default(); 4];
        for (block, &(dx, dy)) in blocks.iter_mut().zip(shape.iter()) {
            *block = origin.offset(dx, dy);
        }
        Self { kind, blocks }
    }

    /// Copy shifted by `(dx, dy)`
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        let mut out = *self;
        for block in &mut out.blocks {
            *block = block.offset(dx, dy);
        }
        out
    }

    /// Copy rotated 90° about the pivot block
    pub fn rotated(&self) -> Self {
        let pivot = self.blocks[PIVOT];
        let mut out = *self;
        for block in &mut out.blocks {
            *block = rotate_about(*block, pivot);
        }
        out
    }

    pub fn pivot(&self) -> Point {
        self.blocks[PIVOT]
    }
}
