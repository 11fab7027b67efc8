//! Integration tests for the headless game loop

use std::time::Duration;

use tui_arcade::core::{new_simulation, Simulation, SnakeGame, TetrisGame};
use tui_arcade::engine::{
    run_simulation, LoopConfig, Outcome, RecordingDisplay, ScriptedInput, ShutdownSignal,
};
use tui_arcade::types::{Direction, GameKind, PieceKind, Point};

/// Every loop iteration ticks.
fn fast(kind: GameKind) -> LoopConfig {
    LoopConfig::for_game(kind)
        .with_tick(Duration::ZERO)
        .with_poll_interval(Duration::ZERO)
}

#[test]
fn test_snake_follows_typed_moves() {
    let mut game = SnakeGame::from_parts(&[Point::new(7, 7)], Direction::Right, Point::new(0, 0), 1);
    let mut input = ScriptedInput::from_keys("ddss");
    let mut display = RecordingDisplay::new();

    let report = run_simulation(
        &mut game,
        &mut input,
        &mut display,
        fast(GameKind::Snake),
        &ShutdownSignal::new(),
    )
    .unwrap();

    assert_eq!(report.outcome, Outcome::Quit);
    assert_eq!(report.stats.ticks, 4);
    assert_eq!(report.stats.actions, 4);
    assert_eq!(game.len(), 1);
    assert_eq!(game.head(), Point::new(9, 9));
}

#[test]
fn test_snake_reverse_key_is_noop() {
    let mut game = SnakeGame::from_parts(&[Point::new(7, 7)], Direction::Right, Point::new(0, 0), 1);
    let mut input = ScriptedInput::from_keys("aa");
    let mut display = RecordingDisplay::new();

    run_simulation(
        &mut game,
        &mut input,
        &mut display,
        fast(GameKind::Snake),
        &ShutdownSignal::new(),
    )
    .unwrap();

    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.head(), Point::new(9, 7));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut game = SnakeGame::from_parts(&[Point::new(7, 7)], Direction::Right, Point::new(0, 0), 1);
    let mut input = ScriptedInput::from_keys("x1 ");
    let mut display = RecordingDisplay::new();

    let report = run_simulation(
        &mut game,
        &mut input,
        &mut display,
        fast(GameKind::Snake),
        &ShutdownSignal::new(),
    )
    .unwrap();

    assert_eq!(report.stats.actions, 0);
    assert_eq!(report.stats.ticks, 3);
    assert_eq!(game.head(), Point::new(10, 7));
}

#[test]
fn test_snake_redraws_every_tick() {
    let mut game = SnakeGame::from_parts(&[Point::new(2, 2)], Direction::Down, Point::new(0, 0), 3);
    let mut input = ScriptedInput::new([None, None, None]);
    let mut display = RecordingDisplay::new();

    let report = run_simulation(
        &mut game,
        &mut input,
        &mut display,
        fast(GameKind::Snake),
        &ShutdownSignal::new(),
    )
    .unwrap();

    // Initial frame plus one per tick.
    assert_eq!(report.stats.frames, 4);
    assert_eq!(display.frames().len(), 4);
    let last = display.last().unwrap();
    assert_eq!(last.lines.len(), 15);
    assert_eq!(last.caption, "Length: 1");
}

#[test]
fn test_slow_tick_redraws_on_input_for_pong() {
    let mut game = new_simulation(GameKind::Pong, 1);
    let mut input = ScriptedInput::from_keys("ww");
    let mut display = RecordingDisplay::new();
    let config = LoopConfig::for_game(GameKind::Pong)
        .with_tick(Duration::from_secs(60))
        .with_poll_interval(Duration::ZERO);

    let report = run_simulation(
        game.as_mut(),
        &mut input,
        &mut display,
        config,
        &ShutdownSignal::new(),
    )
    .unwrap();

    assert_eq!(report.stats.ticks, 0);
    assert_eq!(display.frames().len(), 3);
    // Player paddle moved from rows 5..=9 to 3..=7.
    let last = display.last().unwrap();
    assert!(last.lines[3].starts_with('|'));
    assert!(!last.lines[8].starts_with('|'));
}

#[test]
fn test_snake_ignores_input_redraw_without_tick() {
    let mut game = SnakeGame::new(3);
    let mut input = ScriptedInput::from_keys("ws");
    let mut display = RecordingDisplay::new();
    let config = LoopConfig::for_game(GameKind::Snake)
        .with_tick(Duration::from_secs(60))
        .with_poll_interval(Duration::ZERO);

    run_simulation(&mut game, &mut input, &mut display, config, &ShutdownSignal::new()).unwrap();
    assert_eq!(display.frames().len(), 1);
}

#[test]
fn test_tetris_game_over_ends_loop() {
    let mut game = TetrisGame::new(1);
    // Only a vertical I reaches row 0 at spawn; everything else locks above
    // the grid and vanishes, so the game runs until the first I.
    game.board_mut().set(7, 0, Some(PieceKind::T));
    game.board_mut().set(8, 0, Some(PieceKind::T));
    let mut input = ScriptedInput::new(std::iter::repeat(None).take(5_000));
    let mut display = RecordingDisplay::new();

    let report = run_simulation(
        &mut game,
        &mut input,
        &mut display,
        fast(GameKind::Tetris),
        &ShutdownSignal::new(),
    )
    .unwrap();

    assert_eq!(report.outcome, Outcome::GameOver);
    assert!(game.game_over());
    assert!(display.last().unwrap().caption.starts_with("Game Over!"));
}

#[test]
fn test_shutdown_interrupts_loop() {
    let mut game = new_simulation(GameKind::Tetris, 9);
    let mut input = ScriptedInput::new([]);
    let mut display = RecordingDisplay::new();
    let shutdown = ShutdownSignal::new();
    shutdown.request();

    let report = run_simulation(
        game.as_mut(),
        &mut input,
        &mut display,
        fast(GameKind::Tetris),
        &shutdown,
    )
    .unwrap();

    assert_eq!(report.outcome, Outcome::Interrupted);
    assert_eq!(report.stats.ticks, 0);
    assert_eq!(game.kind(), GameKind::Tetris);
}
