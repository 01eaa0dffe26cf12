//! Controller tests - gravity, moves, locking, scoring, and game over

use tui_blockfall::core::{Board, GameState, LockEvent, PieceSource};
use tui_blockfall::types::{
    GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, RED,
};

fn always(kind: PieceKind) -> impl FnMut() -> PieceKind {
    move || kind
}

/// Press down until the active piece locks.
fn drop_piece<S: PieceSource>(game: &mut GameState<S>) {
    let locked = game.pieces_locked();
    for _ in 0..=BOARD_HEIGHT {
        game.apply_action(GameAction::MoveDown);
        if game.pieces_locked() > locked {
            return;
        }
    }
    panic!("piece never locked");
}

/// Board whose bottom `rows` rows are full except for column `gap`.
fn well_board(rows: i8, gap: i8) -> Board {
    let mut board = Board::new();
    for y in BOARD_HEIGHT as i8 - rows..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if x != gap {
                board.set(x, y, Some(RED));
            }
        }
    }
    board
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_every_kind_spawns_valid_on_empty_board() {
    for kind in PieceKind::ALL {
        let game = GameState::new(always(kind));
        assert!(!game.game_over(), "{}", kind.as_str());
        assert_eq!(game.active().kind, kind);
        assert!(game.board().is_valid_placement(&game.active()));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameState::with_seed(777);
    let mut b = GameState::with_seed(777);
    // Few enough pieces that the stack cannot reach the spawn rows.
    for _ in 0..8 {
        drop_piece(&mut a);
        drop_piece(&mut b);
        assert_eq!(a.active().kind, b.active().kind);
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_each_kind_locks_on_the_floor() {
    for kind in PieceKind::ALL {
        let mut game = GameState::new(always(kind));
        let spawned = game.active();
        let landing_y = BOARD_HEIGHT as i8 - spawned.height() as i8;

        drop_piece(&mut game);

        let landed = spawned.shifted(0, landing_y);
        assert_eq!(occupied(game.board()), 4, "{}", kind.as_str());
        for (x, y) in landed.cells() {
            assert_eq!(game.board().get(x, y), Some(Some(spawned.color)), "{}", kind.as_str());
        }
        assert_eq!(game.pieces_locked(), 1);
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
    }
}

#[test]
fn test_gravity_waits_for_fall_interval() {
    let mut game = GameState::new(always(PieceKind::T));
    let y0 = game.active().y;

    assert!(!game.tick(FALL_INTERVAL_MS - 1));
    assert_eq!(game.active().y, y0);

    assert!(game.tick(1));
    assert_eq!(game.active().y, y0 + 1);
    assert_eq!(game.fall_timer_ms(), 0);
}

#[test]
fn test_long_tick_moves_one_row() {
    let mut game = GameState::new(always(PieceKind::T));
    let y0 = game.active().y;

    assert!(game.tick(FALL_INTERVAL_MS * 5));
    assert_eq!(game.active().y, y0 + 1);
    assert_eq!(game.fall_timer_ms(), 0);
}

#[test]
fn test_gravity_locks_at_floor() {
    let mut game = GameState::new(always(PieceKind::O));
    for _ in 0..BOARD_HEIGHT {
        game.tick(FALL_INTERVAL_MS);
    }
    assert_eq!(game.pieces_locked(), 1);
    assert!(game.board().is_occupied(4, BOARD_HEIGHT as i8 - 1));
}

#[test]
fn test_sideways_move_blocked_by_wall() {
    let mut game = GameState::new(always(PieceKind::O));
    while game.apply_action(GameAction::MoveLeft) {}

    let piece = game.active();
    assert_eq!(piece.x, 0);
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active(), piece);
    assert_eq!(game.pieces_locked(), 0);
}

#[test]
fn test_sideways_move_blocked_by_stack() {
    let mut board = Board::new();
    board.set(3, 0, Some(RED));
    let mut game = GameState::with_board(board, always(PieceKind::O));

    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active().x, 4);
    assert!(game.apply_action(GameAction::MoveRight));
}

#[test]
fn test_rotation_refused_at_wall() {
    let mut game = GameState::new(always(PieceKind::I));
    assert!(game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().rotation, Rotation::East);
    while game.apply_action(GameAction::MoveRight) {}
    assert_eq!(game.active().x, BOARD_WIDTH as i8 - 1);

    let piece = game.active();
    assert!(!game.apply_action(GameAction::Rotate));
    assert_eq!(game.active(), piece);
}

#[test]
fn test_vertical_i_fills_gap_and_clears_line() {
    let board = well_board(1, 5);
    let mut game = GameState::with_board(board, always(PieceKind::I));

    assert!(game.apply_action(GameAction::Rotate));
    assert!(game.apply_action(GameAction::MoveRight));
    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 5);

    drop_piece(&mut game);

    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(
        game.take_last_event(),
        Some(LockEvent {
            lines_cleared: 1,
            score_delta: 100,
            game_over: false,
        })
    );

    // Three cells of the I remain, resting on the floor.
    assert_eq!(occupied(game.board()), 3);
    for y in 17..20 {
        assert!(game.board().is_occupied(5, y));
    }
    assert!(!game.board().is_occupied(0, 19));
}

#[test]
fn test_score_is_one_hundred_per_line() {
    for rows in 1..=4 {
        let mut game = GameState::with_board(well_board(rows, 0), always(PieceKind::I));
        game.apply_action(GameAction::Rotate);
        while game.apply_action(GameAction::MoveLeft) {}

        drop_piece(&mut game);

        assert_eq!(game.lines(), rows as u32);
        assert_eq!(game.score(), 100 * rows as u32);
        assert_eq!(occupied(game.board()), 4 - rows as usize);
    }
}

#[test]
fn test_take_last_event_clears_it() {
    let mut game = GameState::new(always(PieceKind::O));
    assert_eq!(game.take_last_event(), None);

    drop_piece(&mut game);

    assert!(game.take_last_event().is_some());
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_game_over_when_first_piece_blocked() {
    let mut board = Board::new();
    board.set(4, 0, Some(RED));
    let mut game = GameState::with_board(board, always(PieceKind::O));

    assert!(game.game_over());
    assert!(!game.tick(FALL_INTERVAL_MS));
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(game.snapshot().game_over);
}

#[test]
fn test_game_over_when_spawn_blocked_after_lock() {
    let mut board = Board::new();
    for x in 3..7 {
        board.set(x, 2, Some(RED));
    }
    let mut game = GameState::with_board(board, always(PieceKind::O));
    assert!(!game.game_over());

    // The O cannot leave the spawn rows; locking there blocks the next spawn.
    assert!(!game.apply_action(GameAction::MoveDown));

    assert!(game.game_over());
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(
        game.take_last_event(),
        Some(LockEvent {
            lines_cleared: 0,
            score_delta: 0,
            game_over: true,
        })
    );

    let board = game.board().clone();
    let score = game.score();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Rotate,
    ] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick(FALL_INTERVAL_MS * 2));
    assert_eq!(game.board(), &board);
    assert_eq!(game.score(), score);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut game = GameState::new(always(PieceKind::T));
    drop_piece(&mut game);

    let snap = game.snapshot();
    let active = snap.active.expect("active piece in snapshot");
    assert_eq!(active.kind, PieceKind::T);
    assert_eq!(active.cells, game.active().cells());
    assert_eq!(snap.score, 0);
    assert!(snap.playable());

    let filled = snap.board.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(filled, 4);
}
