//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every game in the arcade.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, launcher).
//!
//! # Grid Dimensions
//!
//! Every game runs on a fixed character grid. Coordinates are `(x, y)` with
//! `x` growing to the right and `y` growing downwards.
//!
//! | Game | Rows | Cols |
//! |------|------|------|
//! | Snake | 15 | 15 |
//! | Tetris | 15 | 15 |
//! | Pong | 15 | 25 |
//!
//! # Tick Intervals
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_TICK_MS` | 200 | One snake step |
//! | `TETRIS_TICK_MS` | 500 | One gravity step |
//! | `PONG_TICK_MS` | 100 | One ball step |
//! | `INPUT_POLL_MS` | 10 | Upper bound on the sleep between input polls |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, GameAction, GameKind};
//!
//! // Keys are case-insensitive
//! assert_eq!(GameAction::from_char('W'), Some(GameAction::Up));
//! assert_eq!(GameAction::from_char('x'), None);
//!
//! // Directions know their reverse
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Each game has a fixed tick
//! assert_eq!(GameKind::Pong.tick_ms(), 100);
//! ```

/// Snake grid height
pub const SNAKE_ROWS: usize = 15;

/// Snake grid width
pub const SNAKE_COLS: usize = 15;

/// Tetris grid height
pub const TETRIS_ROWS: usize = 15;

/// Tetris grid width
pub const TETRIS_COLS: usize = 15;

/// Pong grid height
pub const PONG_ROWS: usize = 15;

/// Pong grid width
pub const PONG_COLS: usize = 25;

/// Snake step interval (200ms)
pub const SNAKE_TICK_MS: u64 = 200;

/// Tetris gravity interval (500ms)
pub const TETRIS_TICK_MS: u64 = 500;

/// Pong ball interval (100ms)
pub const PONG_TICK_MS: u64 = 100;

/// Longest sleep between two input polls
pub const INPUT_POLL_MS: u64 = 10;

/// Height of both pong paddles
pub const PADDLE_HEIGHT: i16 = 5;

/// The pong bot moves at most once every this many ticks
pub const BOT_MOVE_EVERY: u32 = 2;

/// Vertical offset applied to freshly spawned tetrominoes (above the visible grid)
pub const TETRIS_SPAWN_Y: i16 = -2;

/// Executable name prefix the launcher looks for
pub const GAME_PREFIX: &str = "game_";

/// An integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether the point lies inside `[0, cols) x [0, rows)`.
    pub fn in_bounds(self, cols: usize, rows: usize) -> bool {
        self.x >= 0 && (self.x as usize) < cols && self.y >= 0 && (self.y as usize) < rows
    }
}

/// Movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)` for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reverse of this direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Abstract actions produced by the input sampler
///
/// Only a small fixed key set exists: `w`, `a`, `s`, `d` and `q`.
/// Each game interprets the movement actions its own way (snake steers,
/// tetris rotates on `Up`, pong moves the player paddle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// `w`
    Up,
    /// `a`
    Left,
    /// `s`
    Down,
    /// `d`
    Right,
    /// `q`
    Quit,
}

impl GameAction {
    /// Map a single typed character to an action (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_char('a'), Some(GameAction::Left));
    /// assert_eq!(GameAction::from_char('D'), Some(GameAction::Right));
    /// assert_eq!(GameAction::from_char('Q'), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_char('p'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'w' => Some(GameAction::Up),
            'a' => Some(GameAction::Left),
            's' => Some(GameAction::Down),
            'd' => Some(GameAction::Right),
            'q' => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Movement direction carried by this action, if any.
    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Left => Some(Direction::Left),
            GameAction::Down => Some(Direction::Down),
            GameAction::Right => Some(Direction::Right),
            GameAction::Quit => None,
        }
    }
}

/// When a game repaints the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Only after a simulation step.
    OnTick,
    /// After a simulation step and after every accepted input.
    OnChange,
}

/// The games shipped with the arcade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Tetris,
    Pong,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::Tetris, GameKind::Pong];

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Tetris => "tetris",
            GameKind::Pong => "pong",
        }
    }

    /// Parse a game name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "tetris" => Some(GameKind::Tetris),
            "pong" => Some(GameKind::Pong),
            _ => None,
        }
    }

    /// Executable file name used by the launcher convention (`game_<name>`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::GameKind;
    ///
    /// assert_eq!(GameKind::Tetris.executable_name(), "game_tetris");
    /// ```
    pub fn executable_name(&self) -> String {
        format!("{}{}", GAME_PREFIX, self.name())
    }

    /// Fixed tick interval in milliseconds.
    pub fn tick_ms(&self) -> u64 {
        match self {
            GameKind::Snake => SNAKE_TICK_MS,
            GameKind::Tetris => TETRIS_TICK_MS,
            GameKind::Pong => PONG_TICK_MS,
        }
    }

    /// Grid size as `(rows, cols)`.
    pub fn grid(&self) -> (usize, usize) {
        match self {
            GameKind::Snake => (SNAKE_ROWS, SNAKE_COLS),
            GameKind::Tetris => (TETRIS_ROWS, TETRIS_COLS),
            GameKind::Pong => (PONG_ROWS, PONG_COLS),
        }
    }

    pub fn redraw(&self) -> RedrawPolicy {
        match self {
            GameKind::Snake => RedrawPolicy::OnTick,
            GameKind::Tetris | GameKind::Pong => RedrawPolicy::OnChange,
        }
    }
}

/// Whether a simulation is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

/// The seven tetromino piece kinds
///
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Piece at `index % 7`, in `ALL` order.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Settled tetris cell; `Some` keeps the kind of the piece that locked there.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcade_timing_defaults() {
        assert_eq!(SNAKE_TICK_MS, 200);
        assert_eq!(TETRIS_TICK_MS, 500);
        assert_eq!(PONG_TICK_MS, 100);
        assert_eq!(PADDLE_HEIGHT, 5);
        assert_eq!(BOT_MOVE_EVERY, 2);
    }

    #[test]
    fn every_direction_reverses_back_to_itself() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_reverse_of(dir.opposite()));
            assert!(!dir.is_reverse_of(dir));
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        for ch in ['x', ' ', '\n', '1', 'p', 'Z'] {
            assert_eq!(GameAction::from_char(ch), None, "{:?}", ch);
        }
    }

    #[test]
    fn game_names_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GameKind::from_name("PONG"), Some(GameKind::Pong));
        assert_eq!(GameKind::from_name("chess"), None);
    }

    #[test]
    fn point_bounds() {
        assert!(Point::new(0, 0).in_bounds(15, 15));
        assert!(Point::new(14, 14).in_bounds(15, 15));
        assert!(!Point::new(15, 0).in_bounds(15, 15));
        assert!(!Point::new(0, -1).in_bounds(15, 15));
    }
}
