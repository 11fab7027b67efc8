//! Pong simulation
//!
//! The player paddle sits on column 0 and the bot paddle on the last column.
//! The ball moves one cell per tick diagonally. It reflects off the top and
//! bottom walls and off a paddle whose span covers the row it is heading to.
//! Missing a paddle scores for the other side and re-serves from the center.
//! Rallies go on forever; only quitting ends the game.

use log::info;

use crate::canvas::{Canvas, Glyph};
use crate::rng::SimpleRng;
use crate::simulation::Simulation;
use crate::types::{
    GameAction, GameKind, Point, Status, BOT_MOVE_EVERY, PADDLE_HEIGHT, PONG_COLS, PONG_ROWS,
};

const ROWS: i16 = PONG_ROWS as i16;
const COLS: i16 = PONG_COLS as i16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: Point,
    pub dx: i16,
    pub dy: i16,
}

/// A vertical paddle identified by its top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub y: i16,
    pub height: i16,
}

impl Paddle {
    /// Vertically centered paddle.
    pub fn centered() -> Self {
        Self {
            y: (ROWS - PADDLE_HEIGHT) / 2,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn covers(&self, y: i16) -> bool {
        y >= self.y && y < self.y + self.height
    }

    pub fn move_up(&mut self) {
        if self.y > 0 {
            self.y -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.y + self.height < ROWS {
            self.y += 1;
        }
    }

    fn center(&self) -> i16 {
        self.y + self.height / 2
    }
}

/// Which side won the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorer {
    Player,
    Bot,
}

#[derive(Debug, Clone)]
pub struct PongGame {
    ball: Ball,
    player: Paddle,
    bot: Paddle,
    player_score: u32,
    bot_score: u32,
    bot_counter: u32,
    rng: SimpleRng,
}

impl PongGame {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let ball = Ball {
            pos: Self::center(),
            dx: rng.next_sign(),
            dy: rng.next_sign(),
        };
        Self {
            ball,
            player: Paddle::centered(),
            bot: Paddle::centered(),
            player_score: 0,
            bot_score: 0,
            bot_counter: 0,
            rng,
        }
    }

    /// Build a rally from explicit positions (test and benchmark setup).
    pub fn from_parts(ball: Ball, player_y: i16, bot_y: i16, seed: u32) -> Self {
        let mut game = Self::new(seed);
        game.ball = ball;
        game.player.y = player_y;
        game.bot.y = bot_y;
        game
    }

    pub fn center() -> Point {
        Point::new(COLS / 2, ROWS / 2)
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn player(&self) -> Paddle {
        self.player
    }

    pub fn bot(&self) -> Paddle {
        self.bot
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Move the ball one tick. Returns who scored, if anyone.
    pub fn update_ball(&mut self) -> Option<Scorer> {
        let mut next_x = self.ball.pos.x + self.ball.dx;
        let mut next_y = self.ball.pos.y + self.ball.dy;

        if next_y < 0 || next_y >= ROWS {
            self.ball.dy = -self.ball.dy;
            next_y = self.ball.pos.y + self.ball.dy;
        }

        if next_x == 0 {
            if self.player.covers(next_y) {
                self.ball.dx = -self.ball.dx;
                next_x = self.ball.pos.x + self.ball.dx;
            } else {
                self.score(Scorer::Bot);
                return Some(Scorer::Bot);
            }
        }

        if next_x == COLS - 1 {
            if self.bot.covers(next_y) {
                self.ball.dx = -self.ball.dx;
                next_x = self.ball.pos.x + self.ball.dx;
            } else {
                self.score(Scorer::Player);
                return Some(Scorer::Player);
            }
        }

        self.ball.pos = Point::new(next_x, next_y);
        None
    }

    /// Award the point and re-serve from the center towards the side that conceded.
    fn score(&mut self, scorer: Scorer) {
        let dx = match scorer {
            Scorer::Bot => {
                self.bot_score += 1;
                -1
            }
            Scorer::Player => {
                self.player_score += 1;
                1
            }
        };
        self.ball = Ball {
            pos: Self::center(),
            dx,
            dy: self.rng.next_sign(),
        };
        info!(
            "{:?} scored, player {} bot {}",
            scorer, self.player_score, self.bot_score
        );
    }

    /// Step the bot paddle one cell towards the ball, every other tick.
    pub fn update_bot(&mut self) {
        self.bot_counter += 1;
        if self.bot_counter < BOT_MOVE_EVERY {
            return;
        }
        self.bot_counter = 0;

        let center = self.bot.center();
        if center < self.ball.pos.y {
            self.bot.move_down();
        } else if center > self.ball.pos.y {
            self.bot.move_up();
        }
    }
}

impl Simulation for PongGame {
    fn kind(&self) -> GameKind {
        GameKind::Pong
    }

    fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Up => self.player.move_up(),
            GameAction::Down => self.player.move_down(),
            _ => {}
        }
    }

    fn step(&mut self) -> Status {
        self.update_ball();
        self.update_bot();
        Status::Running
    }

    fn status(&self) -> Status {
        Status::Running
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::Blank);
        for y in 0..ROWS {
            if self.player.covers(y) {
                canvas.set(Point::new(0, y), Glyph::Paddle);
            }
            if self.bot.covers(y) {
                canvas.set(Point::new(COLS - 1, y), Glyph::Paddle);
            }
        }
        canvas.set(self.ball.pos, Glyph::Ball);
    }

    fn caption(&self) -> String {
        format!("Player: {}  BOT: {}", self.player_score, self.bot_score)
    }
}
