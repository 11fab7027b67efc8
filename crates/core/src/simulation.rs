//! The interface every game implements so the tick loop can drive it.

use crate::canvas::Canvas;
use crate::types::{GameAction, GameKind, Status};

/// A fixed-tick game simulation.
///
/// The loop calls [`apply_action`](Simulation::apply_action) for every sampled
/// key (except quit, which the loop handles itself) and
/// [`step`](Simulation::step) once per tick.
pub trait Simulation {
    fn kind(&self) -> GameKind;

    /// React to a movement key. Invalid moves are silent no-ops.
    fn apply_action(&mut self, action: GameAction);

    /// Advance one tick and report whether the game is still running.
    fn step(&mut self) -> Status;

    fn status(&self) -> Status;

    /// Paint the current state. The canvas has the game's grid dimensions.
    fn draw(&self, canvas: &mut Canvas);

    /// Single status line shown under the grid.
    fn caption(&self) -> String;

    /// Canvas sized for this game.
    fn new_canvas(&self) -> Canvas {
        let (rows, cols) = self.kind().grid();
        Canvas::new(rows, cols)
    }
}
