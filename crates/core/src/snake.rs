//! Snake simulation
//!
//! The body is an ordered deque of segments, head first. A step prepends a new
//! head and drops the tail unless the bait was eaten, so the length never
//! shrinks. Moving into a wall or into the body does nothing at all: the snake
//! waits in place until a direction that leads somewhere free is chosen.

use std::collections::VecDeque;

use log::debug;

use crate::canvas::{Canvas, Glyph};
use crate::rng::SimpleRng;
use crate::simulation::Simulation;
use crate::types::{Direction, GameAction, GameKind, Point, Status, SNAKE_COLS, SNAKE_ROWS};

#[derive(Debug, Clone)]
pub struct SnakeGame {
    body: VecDeque<Point>,
    bait: Option<Point>,
    direction: Direction,
    next_direction: Direction,
    rng: SimpleRng,
}

impl SnakeGame {
    /// One segment at the grid center, heading right, bait somewhere else.
    pub fn new(seed: u32) -> Self {
        let head = Point::new((SNAKE_COLS / 2) as i16, (SNAKE_ROWS / 2) as i16);
        let mut game = Self {
            body: VecDeque::from([head]),
            bait: None,
            direction: Direction::Right,
            next_direction: Direction::Right,
            rng: SimpleRng::new(seed),
        };
        game.place_bait();
        game
    }

    /// Build a snake from explicit parts (head first).
    ///
    /// Used by tests and benchmarks to set up exact positions. `segments` must be
    /// non-empty, in bounds and free of duplicates; `bait` must not overlap it.
    pub fn from_parts(segments: &[Point], direction: Direction, bait: Point, seed: u32) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!(!segments.contains(&bait));
        Self {
            body: segments.iter().copied().collect(),
            bait: Some(bait),
            direction,
            next_direction: direction,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// `None` once the body covers every cell.
    pub fn bait(&self) -> Option<Point> {
        self.bait
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn requested_direction(&self) -> Direction {
        self.next_direction
    }

    /// Buffer a direction; it is applied at the next step.
    pub fn request_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Rejection-sample a free cell for the bait.
    ///
    /// A snake covering the whole grid leaves no free cell, so the bait is
    /// removed instead.
    fn place_bait(&mut self) {
        if self.body.len() >= SNAKE_ROWS * SNAKE_COLS {
            self.bait = None;
            return;
        }
        loop {
            let candidate = Point::new(
                self.rng.next_range(SNAKE_COLS as u32) as i16,
                self.rng.next_range(SNAKE_ROWS as u32) as i16,
            );
            if !self.occupies(candidate) {
                self.bait = Some(candidate);
                return;
            }
        }
    }
}

impl Simulation for SnakeGame {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn apply_action(&mut self, action: GameAction) {
        if let Some(direction) = action.as_direction() {
            self.request_direction(direction);
        }
    }

    fn step(&mut self) -> Status {
        if !self.next_direction.is_reverse_of(self.direction) {
            self.direction = self.next_direction;
        }

        let (dx, dy) = self.direction.delta();
        let new_head = self.head().offset(dx, dy);

        if !new_head.in_bounds(SNAKE_COLS, SNAKE_ROWS) || self.occupies(new_head) {
            return Status::Running;
        }

        self.body.push_front(new_head);
        if Some(new_head) == self.bait {
            debug!("snake ate bait at {:?}, length {}", new_head, self.body.len());
            self.place_bait();
        } else {
            self.body.pop_back();
        }

        Status::Running
    }

    fn status(&self) -> Status {
        Status::Running
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::Empty);
        if let Some(bait) = self.bait {
            canvas.set(bait, Glyph::Bait);
        }
        for (i, segment) in self.body.iter().enumerate() {
            let glyph = if i == 0 { Glyph::Head } else { Glyph::Body };
            canvas.set(*segment, glyph);
        }
    }

    fn caption(&self) -> String {
        format!("Length: {}", self.body.len())
    }
}
