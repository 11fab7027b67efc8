//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of every arcade game. It has **zero
//! dependencies** on the terminal, the clock or processes, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Runs headless as easily as in a terminal
//!
//! # Module Structure
//!
//! - [`simulation`]: The [`Simulation`] trait the tick loop drives
//! - [`canvas`]: Fixed character grid simulations draw into
//! - [`snake`]: Snake with buffered steering and bait growth
//! - [`board`]: 15x15 settled tetris grid with line clearing
//! - [`pieces`]: Tetromino shapes and the pivot rotation
//! - [`tetris`]: Falling-piece game built on the board
//! - [`pong`]: Player vs bot paddles
//! - [`rng`]: Small seeded LCG
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{Simulation, SnakeGame};
//! use tui_arcade_types::{Direction, GameAction, Status};
//!
//! let mut game = SnakeGame::new(12345);
//! game.apply_action(GameAction::Down);
//! assert_eq!(game.step(), Status::Running);
//! assert_eq!(game.direction(), Direction::Down);
//! ```

pub mod board;
pub mod canvas;
pub mod pieces;
pub mod pong;
pub mod rng;
pub mod simulation;
pub mod snake;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use canvas::{Canvas, Glyph};
pub use pieces::{get_shape, Tetromino};
pub use pong::{Ball, Paddle, PongGame, Scorer};
pub use rng::SimpleRng;
pub use simulation::Simulation;
pub use snake::SnakeGame;
pub use tetris::TetrisGame;

use types::GameKind;

/// Create the simulation for a game kind behind the common interface.
pub fn new_simulation(kind: GameKind, seed: u32) -> Box<dyn Simulation> {
    match kind {
        GameKind::Snake => Box::new(SnakeGame::new(seed)),
        GameKind::Tetris => Box::new(TetrisGame::new(seed)),
        GameKind::Pong => Box::new(PongGame::new(seed)),
    }
}
