//! Property tests for the simulation invariants.
//!
//! Random seeds and random key sequences are fed straight into the
//! simulations; after every step the invariants below must still hold.

use std::collections::HashSet;

use proptest::prelude::*;
use tui_arcade::core::{Ball, Board, PongGame, Simulation, SnakeGame, TetrisGame, Tetromino};
use tui_arcade::types::{
    Direction, GameAction, PieceKind, Point, Status, PONG_COLS, SNAKE_COLS, SNAKE_ROWS,
    TETRIS_COLS, TETRIS_ROWS,
};

fn action() -> impl Strategy<Value = Option<GameAction>> {
    prop_oneof![
        Just(None),
        Just(Some(GameAction::Up)),
        Just(Some(GameAction::Left)),
        Just(Some(GameAction::Down)),
        Just(Some(GameAction::Right)),
    ]
}

fn piece_kind() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(PieceKind::from_index)
}

proptest! {
    #[test]
    fn snake_never_overlaps_or_shrinks(
        seed in any::<u32>(),
        actions in prop::collection::vec(action(), 1..300),
    ) {
        let mut game = SnakeGame::new(seed);
        let mut len = game.len();

        for a in actions {
            if let Some(a) = a {
                game.apply_action(a);
            }
            let bait = game.bait();
            prop_assert_eq!(game.step(), Status::Running);

            let segments: Vec<Point> = game.segments().collect();
            let unique: HashSet<Point> = segments.iter().copied().collect();
            prop_assert_eq!(unique.len(), segments.len());
            prop_assert!(segments.iter().all(|p| p.in_bounds(SNAKE_COLS, SNAKE_ROWS)));
            let bait_now = game.bait();
            prop_assert!(bait_now.is_some_and(|b| !unique.contains(&b)));

            // Growth happens exactly when the head lands on the old bait.
            if Some(game.head()) == bait {
                prop_assert_eq!(game.len(), len + 1);
            } else {
                prop_assert_eq!(game.len(), len);
            }
            len = game.len();
        }
    }

    #[test]
    fn snake_reverse_request_never_applies(
        start in 0usize..4,
        steps in 1usize..20,
    ) {
        let direction = [Direction::Up, Direction::Down, Direction::Left, Direction::Right][start];
        let mut game = SnakeGame::from_parts(&[Point::new(7, 7)], direction, Point::new(0, 0), 1);
        for _ in 0..steps {
            game.request_direction(direction.opposite());
            game.step();
            prop_assert_eq!(game.direction(), direction);
        }
    }

    #[test]
    fn tetris_board_stays_consistent(
        seed in any::<u32>(),
        actions in prop::collection::vec(action(), 1..400),
    ) {
        let mut game = TetrisGame::new(seed);
        for a in actions {
            if let Some(a) = a {
                game.apply_action(a);
            }
            if game.step() == Status::Over {
                prop_assert!(game.game_over());
                break;
            }

            let board = game.board();
            prop_assert!((0..TETRIS_ROWS).all(|y| !board.is_row_full(y)));
            if let Some(active) = game.active() {
                // The falling piece never overlaps the settled grid or leaves the well.
                prop_assert!(!game.check_collision(&active, 0, 0, false));
                prop_assert!(active
                    .blocks
                    .iter()
                    .all(|b| b.x >= 0 && b.x < TETRIS_COLS as i16 && b.y < TETRIS_ROWS as i16));
            }
        }
    }

    #[test]
    fn rejected_rotation_leaves_piece_unchanged(
        kind in piece_kind(),
        dx in -8i16..8,
        dy in 0i16..16,
        filled in prop::collection::vec((0i16..15, 0i16..15), 0..40),
    ) {
        let mut game = TetrisGame::new(1);
        for (x, y) in filled {
            game.board_mut().set(x, y, Some(PieceKind::Z));
        }
        let piece = Tetromino::spawn(kind).translated(dx, dy);
        prop_assume!(!game.check_collision(&piece, 0, 0, false));
        game.set_active(Some(piece));

        let blocked = game.check_collision(&piece, 0, 0, true);
        let rotated = game.try_rotate();
        prop_assert_eq!(rotated, !blocked);
        if blocked {
            prop_assert_eq!(game.active(), Some(piece));
        } else {
            prop_assert_eq!(game.active(), Some(piece.rotated()));
        }
    }

    #[test]
    fn line_clear_conserves_height(
        full_rows in prop::collection::btree_set(0usize..15, 0..15),
        seed in any::<u32>(),
    ) {
        let mut board = Board::new();
        let mut partial = 0;
        for y in 0..TETRIS_ROWS {
            if full_rows.contains(&y) {
                board.fill_row(y, PieceKind::I);
            } else if (seed >> (y % 32)) & 1 == 1 {
                // One block per partial row, in a column derived from the row.
                board.set((y % TETRIS_COLS) as i16, y as i16, Some(PieceKind::T));
                partial += 1;
            }
        }

        let cleared = board.clear_full_rows();
        prop_assert_eq!(cleared.len(), full_rows.len());
        prop_assert_eq!(board.filled_count(), partial);
        prop_assert_eq!(board.cells().len(), TETRIS_ROWS * TETRIS_COLS);
        // The cleared rows reappear as empty rows on top.
        for y in 0..full_rows.len() {
            prop_assert!((0..TETRIS_COLS as i16).all(|x| board.get(x, y as i16) == Some(None)));
        }
    }

    #[test]
    fn pong_bounce_iff_paddle_covers(
        y in 0i16..15,
        dy in prop_oneof![Just(-1i16), Just(1i16)],
        paddle in 0i16..11,
        player_side in any::<bool>(),
    ) {
        let cols = PONG_COLS as i16;
        let (x, dx) = if player_side { (1, -1) } else { (cols - 2, 1) };
        let ball = Ball { pos: Point::new(x, y), dx, dy };
        let mut game = PongGame::from_parts(ball, paddle, paddle, 1);

        let mut target_y = y + dy;
        if !(0..15).contains(&target_y) {
            target_y = y - dy;
        }
        let covered = target_y >= paddle && target_y < paddle + 5;

        let scored = game.update_ball();
        if covered {
            prop_assert_eq!(scored, None);
            prop_assert_eq!(game.ball().dx, -dx);
        } else {
            prop_assert!(scored.is_some());
            prop_assert_eq!(game.ball().pos, PongGame::center());
        }
    }
}
