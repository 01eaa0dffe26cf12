//! Game state module - the controller driving one game session
//!
//! Ties together the board, the active piece and the piece source. It handles
//! gravity timing, player moves and rotations, locking, line clears, scoring,
//! and game-over detection.

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Tetromino;
use crate::rng::{PieceSource, UniformSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, FALL_INTERVAL_MS, LINE_CLEAR_SCORE};

/// Outcome of a lock, kept until an observer takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The piece spawned after this lock did not fit.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    active: Tetromino,
    source: S,
    score: u32,
    lines: u32,
    /// Time accumulated toward the next gravity step.
    fall_timer_ms: u32,
    pieces_locked: u32,
    last_event: Option<LockEvent>,
    game_over: bool,
}

impl GameState<UniformSource> {
    /// Create a new game drawing uniformly random pieces from the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(UniformSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game on an empty board and spawn the first piece
    pub fn new(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Create a new game on an existing board and spawn the first piece.
    ///
    /// If the first piece does not fit, the game starts over.
    pub fn with_board(board: Board, mut source: S) -> Self {
        let active = Tetromino::new(source.next_kind());
        let game_over = !board.is_valid_placement(&active);
        if game_over {
            info!(kind = active.kind.as_str(), "first piece does not fit, game over");
        }

        Self {
            board,
            active,
            source,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            pieces_locked: 0,
            last_event: None,
            game_over,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the active piece.
    ///
    /// A blocked horizontal move is simply refused. A blocked downward move
    /// locks the piece, clears lines and spawns the next piece.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }

        let moved = self.active.shifted(dx, dy);
        if self.board.is_valid_placement(&moved) {
            self.active = moved;
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Try to rotate the active piece clockwise, reverting if it does not fit
    pub(crate) fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.active.rotate();
        if self.board.is_valid_placement(&self.active) {
            return true;
        }
        self.active.rotate_back();
        false
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece
    fn lock_piece(&mut self) {
        self.board.lock(&self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;
        let score_delta = lines_cleared * LINE_CLEAR_SCORE;
        self.lines += lines_cleared;
        self.score += score_delta;

        if lines_cleared > 0 {
            debug!(
                rows = ?cleared_rows.as_slice(),
                score = self.score,
                "cleared {} line(s)",
                lines_cleared
            );
        }

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_delta,
            game_over: self.game_over,
        });
    }

    /// Replace the active piece with a fresh one from the source
    fn spawn_piece(&mut self) {
        let piece = Tetromino::new(self.source.next_kind());
        self.active = piece;

        if !self.board.is_valid_placement(&piece) {
            self.game_over = true;
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "spawn blocked, game over"
            );
            return;
        }

        debug!(kind = piece.kind.as_str(), x = piece.x, "spawned piece");
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// When the accumulated time reaches the fall interval the timer resets to
    /// zero and the piece moves down one row (locking if it cannot). Returns
    /// whether gravity fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < FALL_INTERVAL_MS {
            return false;
        }

        self.fall_timer_ms = 0;
        self.try_move(0, 1);
        true
    }

    /// Apply a game action. Returns whether the active piece moved or rotated.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Check if piece can move in given direction
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !self.game_over && self.board.is_valid_placement(&self.active.shifted(dx, dy))
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, RED};

    fn always(kind: PieceKind) -> impl FnMut() -> PieceKind {
        move || kind
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(12345);

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.fall_timer_ms, 0);
        assert_eq!(state.active.rotation, Rotation::North);
        assert_eq!(state.active.y, 0);
    }

    #[test]
    fn test_try_move() {
        let mut state = GameState::new(always(PieceKind::T));
        let initial_x = state.active.x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.x, initial_x + 1);

        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.x, initial_x);
    }

    #[test]
    fn test_horizontal_collision_does_not_lock() {
        let mut state = GameState::new(always(PieceKind::O));

        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        // O spawns at x=4
        assert_eq!(moved, 4);
        assert_eq!(state.active.x, 0);
        assert_eq!(state.pieces_locked, 0);
        assert!(state.board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_failed_rotation_reverts() {
        let mut state = GameState::new(always(PieceKind::I));
        // Vertical I against the right wall: rotating back to horizontal would overflow.
        assert!(state.try_rotate());
        while state.try_move(1, 0) {}
        assert_eq!(state.active.x, BOARD_WIDTH as i8 - 1);

        assert!(!state.try_rotate());
        assert_eq!(state.active.rotation, Rotation::East);
        assert_eq!(state.pieces_locked, 0);
    }

    #[test]
    fn test_down_collision_locks_and_spawns() {
        let mut state = GameState::new(always(PieceKind::O));
        while state.try_move(0, 1) {}

        assert_eq!(state.pieces_locked, 1);
        assert!(state.board.is_occupied(4, BOARD_HEIGHT as i8 - 1));
        assert!(state.board.is_occupied(5, BOARD_HEIGHT as i8 - 2));
        assert_eq!(state.active.y, 0);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert_eq!(ev.score_delta, 0);
        assert!(!ev.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_tick_gravity_interval() {
        let mut state = GameState::new(always(PieceKind::T));

        assert!(!state.tick(FALL_INTERVAL_MS - 1));
        assert_eq!(state.active.y, 0);
        assert_eq!(state.fall_timer_ms, FALL_INTERVAL_MS - 1);

        assert!(state.tick(1));
        assert_eq!(state.active.y, 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_tick_resets_timer_on_lock() {
        let mut state = GameState::new(always(PieceKind::O));
        while state.can_move(0, 1) {
            state.try_move(0, 1);
        }

        assert!(state.tick(FALL_INTERVAL_MS * 3));
        assert_eq!(state.fall_timer_ms, 0);
        assert_eq!(state.pieces_locked, 1);
    }

    #[test]
    fn test_line_clear_scores_per_line() {
        let mut board = Board::new();
        for y in [18i8, 19] {
            for x in 0..BOARD_WIDTH as i8 {
                if x != 4 && x != 5 {
                    board.set(x, y, Some(RED));
                }
            }
        }
        let mut state = GameState::with_board(board, always(PieceKind::O));
        while state.try_move(0, 1) {}

        assert_eq!(state.score, 2 * LINE_CLEAR_SCORE);
        assert_eq!(state.lines, 2);
        assert!(state.board.cells().iter().all(|c| c.is_none()));
        assert_eq!(state.take_last_event().unwrap().lines_cleared, 2);
    }

    #[test]
    fn test_game_over_detection() {
        let mut board = Board::new();
        // A ledge just under the spawn rows.
        for x in 3..=6 {
            board.set(x, 2, Some(RED));
        }
        let mut state = GameState::with_board(board, always(PieceKind::O));
        assert!(!state.game_over);

        // O at rows 0-1 rests on row 2: moving down locks it, and the next O overlaps.
        assert!(!state.try_move(0, 1));
        assert!(state.game_over);
        assert!(state.take_last_event().unwrap().game_over);
    }

    #[test]
    fn test_game_over_stops_game() {
        let mut board = Board::new();
        board.set(4, 0, Some(RED));
        let mut state = GameState::with_board(board, always(PieceKind::O));
        assert!(state.game_over);

        let before = state.active;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::MoveDown));
        assert!(!state.tick(FALL_INTERVAL_MS));
        assert_eq!(state.active, before);
        assert_eq!(state.pieces_locked, 0);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut state = GameState::new(always(PieceKind::L));
        state.apply_action(GameAction::Rotate);

        let snap = state.snapshot();
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::L);
        assert_eq!(active.rotation, Rotation::East);
        assert_eq!(active.cells, state.active.cells());
        assert_eq!(snap.score, 0);
        assert!(snap.playable());
    }
}
