//! Tetris simulation
//!
//! One tick either spawns a piece (when none is active) and then applies
//! gravity, or just applies gravity. A piece that cannot fall any further is
//! merged into the [`Board`] and full rows are compacted before the next tick.
//! The game ends when a freshly spawned piece already overlaps settled blocks.
//!
//! Collision rules shared by gravity, manual moves and rotation:
//!
//! - x must stay inside `[0, cols)`
//! - y must stay below `rows` (cells above the top row are allowed)
//! - the target cell, when on the grid, must be empty

use log::{debug, info};

use crate::board::Board;
use crate::canvas::{Canvas, Glyph};
use crate::pieces::Tetromino;
use crate::rng::SimpleRng;
use crate::simulation::Simulation;
use crate::types::{GameAction, GameKind, PieceKind, Point, Status, TETRIS_COLS, TETRIS_ROWS};

#[derive(Debug, Clone)]
pub struct TetrisGame {
    board: Board,
    active: Option<Tetromino>,
    rng: SimpleRng,
    lines: u32,
    game_over: bool,
}

impl TetrisGame {
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            lines: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Replace the active piece (test and benchmark setup)
    pub fn set_active(&mut self, piece: Option<Tetromino>) {
        self.active = piece;
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Check whether `piece`, optionally rotated first and then shifted by
    /// `(dx, dy)`, would collide with the walls, the floor or settled cells.
    pub fn check_collision(&self, piece: &Tetromino, dx: i16, dy: i16, rotate: bool) -> bool {
        let candidate = if rotate { piece.rotated() } else { *piece };
        candidate.blocks.iter().any(|b| {
            let p = b.offset(dx, dy);
            p.x < 0
                || p.x >= TETRIS_COLS as i16
                || p.y >= TETRIS_ROWS as i16
                || self.board.is_occupied(p.x, p.y)
        })
    }

    /// Spawn a specific piece kind. Returns false (and ends the game) if the
    /// spawn position is already blocked.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::spawn(kind);
        self.active = Some(piece);
        if self.check_collision(&piece, 0, 0, false) {
            info!("tetris spawn of {:?} blocked, game over after {} lines", kind, self.lines);
            self.game_over = true;
            return false;
        }
        debug!("spawned {:?}", kind);
        true
    }

    fn spawn_random(&mut self) -> bool {
        let kind = PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32) as usize);
        self.spawn(kind)
    }

    /// Try to move the active piece. Rejected moves leave it untouched.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.check_collision(&active, dx, dy, false) {
            return false;
        }
        self.active = Some(active.translated(dx, dy));
        true
    }

    /// Try to rotate the active piece. No wall kicks: a blocked rotation is ignored.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.check_collision(&active, 0, 0, true) {
            return false;
        }
        self.active = Some(active.rotated());
        true
    }

    /// Merge the active piece into the board, deactivate it and clear full rows.
    /// Returns the number of rows cleared.
    pub fn merge_active(&mut self) -> usize {
        let Some(active) = self.active.take() else {
            return 0;
        };
        self.board.merge(&active.blocks, active.kind);
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.as_slice());
        }
        self.lines += cleared.len() as u32;
        cleared.len()
    }
}

impl Simulation for TetrisGame {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn apply_action(&mut self, action: GameAction) {
        if self.game_over || self.active.is_none() {
            return;
        }
        match action {
            GameAction::Left => {
                self.try_move(-1, 0);
            }
            GameAction::Right => {
                self.try_move(1, 0);
            }
            GameAction::Down => {
                self.try_move(0, 1);
            }
            GameAction::Up => {
                self.try_rotate();
            }
            GameAction::Quit => {}
        }
    }

    fn step(&mut self) -> Status {
        if self.game_over {
            return Status::Over;
        }

        if self.active.is_none() && !self.spawn_random() {
            return Status::Over;
        }

        if !self.try_move(0, 1) {
            self.merge_active();
        }

        Status::Running
    }

    fn status(&self) -> Status {
        if self.game_over {
            Status::Over
        } else {
            Status::Running
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::Empty);
        for y in 0..TETRIS_ROWS as i16 {
            for x in 0..TETRIS_COLS as i16 {
                if let Some(Some(kind)) = self.board.get(x, y) {
                    canvas.set(Point::new(x, y), Glyph::Block(kind));
                }
            }
        }
        if let Some(active) = self.active {
            for block in active.blocks {
                canvas.set(block, Glyph::Block(active.kind));
            }
        }
    }

    fn caption(&self) -> String {
        if self.game_over {
            format!("Game Over!  Lines: {}", self.lines)
        } else {
            format!("Lines: {}", self.lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_spawns_and_drops_one_row() {
        let mut game = TetrisGame::new(3);
        assert!(game.active().is_none());
        assert_eq!(game.step(), Status::Running);
        let active = game.active().expect("piece spawned");
        let fresh = Tetromino::spawn(active.kind);
        assert_eq!(active, fresh.translated(0, 1));
    }

    #[test]
    fn manual_moves_ignored_without_active_piece() {
        let mut game = TetrisGame::new(3);
        game.apply_action(GameAction::Left);
        assert!(game.active().is_none());
    }

    #[test]
    fn caption_reports_game_over() {
        let mut game = TetrisGame::new(3);
        // Only the I piece reaches row 0 at spawn time.
        game.board_mut().set(7, 0, Some(PieceKind::Z));
        assert!(!game.spawn(PieceKind::I));
        assert!(game.game_over());
        assert_eq!(game.step(), Status::Over);
        assert_eq!(game.status(), Status::Over);
        assert!(game.caption().starts_with("Game Over!"));
    }
}
