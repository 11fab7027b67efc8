//! Snake simulation tests

use tui_arcade::core::{Simulation, SnakeGame};
use tui_arcade::types::{Direction, GameAction, Point, Status, SNAKE_COLS, SNAKE_ROWS};

fn snake(segments: &[(i16, i16)], direction: Direction, bait: (i16, i16)) -> SnakeGame {
    let segments: Vec<Point> = segments.iter().map(|&(x, y)| Point::new(x, y)).collect();
    SnakeGame::from_parts(&segments, direction, Point::new(bait.0, bait.1), 7)
}

fn positions(game: &SnakeGame) -> Vec<(i16, i16)> {
    game.segments().map(|p| (p.x, p.y)).collect()
}

#[test]
fn test_step_translates_single_segment() {
    let mut game = snake(&[(7, 7)], Direction::Right, (0, 0));
    assert_eq!(game.step(), Status::Running);
    assert_eq!(positions(&game), [(8, 7)]);
}

#[test]
fn test_body_follows_head() {
    let mut game = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
    game.apply_action(GameAction::Down);
    game.step();
    assert_eq!(positions(&game), [(5, 6), (5, 5), (4, 5)]);
}

#[test]
fn test_eating_bait_grows_by_one() {
    let mut game = snake(&[(5, 5), (4, 5)], Direction::Right, (6, 5));
    game.step();
    assert_eq!(game.len(), 3);
    assert_eq!(positions(&game), [(6, 5), (5, 5), (4, 5)]);
    // New bait went to a free cell.
    let bait = game.bait().unwrap();
    assert!(game.segments().all(|p| p != bait));
    assert!(bait.in_bounds(SNAKE_COLS, SNAKE_ROWS));
}

#[test]
fn test_direction_is_buffered_until_step() {
    let mut game = snake(&[(5, 5)], Direction::Right, (0, 0));
    game.apply_action(GameAction::Up);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.requested_direction(), Direction::Up);
    game.step();
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(game.head(), Point::new(5, 4));
}

#[test]
fn test_last_request_before_step_wins() {
    let mut game = snake(&[(5, 5)], Direction::Right, (0, 0));
    game.apply_action(GameAction::Up);
    game.apply_action(GameAction::Down);
    game.step();
    assert_eq!(game.head(), Point::new(5, 6));
}

#[test]
fn test_reverse_request_is_ignored() {
    let mut game = snake(&[(5, 5), (4, 5)], Direction::Right, (0, 0));
    game.apply_action(GameAction::Left);
    game.step();
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(positions(&game), [(6, 5), (5, 5)]);

    // Still reversed on the next tick: still ignored.
    game.step();
    assert_eq!(game.direction(), Direction::Right);
}

#[test]
fn test_self_collision_blocks_move() {
    // Head at (5,5) heading down into its own body at (5,6).
    let mut game = snake(
        &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)],
        Direction::Left,
        (0, 0),
    );
    game.apply_action(GameAction::Down);
    let before = positions(&game);
    assert_eq!(game.step(), Status::Running);
    assert_eq!(positions(&game), before);
    assert_eq!(game.direction(), Direction::Down);
}

#[test]
fn test_wall_blocks_until_turn() {
    let mut game = snake(&[(0, 0)], Direction::Up, (9, 9));
    game.step();
    game.step();
    assert_eq!(game.head(), Point::new(0, 0));

    game.apply_action(GameAction::Right);
    game.step();
    assert_eq!(game.head(), Point::new(1, 0));
}

#[test]
fn test_quit_does_not_change_state() {
    let mut game = snake(&[(5, 5)], Direction::Right, (0, 0));
    game.apply_action(GameAction::Quit);
    assert_eq!(game.requested_direction(), Direction::Right);
}

#[test]
fn test_draw_uses_snake_alphabet() {
    let game = snake(&[(1, 0), (0, 0)], Direction::Right, (3, 0));
    let mut canvas = game.new_canvas();
    game.draw(&mut canvas);
    let lines = canvas.to_lines();
    assert_eq!(lines.len(), SNAKE_ROWS);
    assert_eq!(&lines[0][..5], "#O.X.");
    assert_eq!(game.caption(), "Length: 2");
}

#[test]
fn test_same_seed_same_bait() {
    assert_eq!(SnakeGame::new(99).bait(), SnakeGame::new(99).bait());
}
