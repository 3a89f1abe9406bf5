//! Game state module - the spawn/fall/lock/clear cycle.
//!
//! Ties together the board, piece kinematics, the 7-bag, and the scoring
//! rules. An external driver feeds elapsed time through [`GameState::update`]
//! and player intents through [`GameState::apply_action`]; renderers observe
//! through snapshots and the pulled event queue.

use crate::bag::PieceBag;
use crate::board::Board;
use crate::events::{EventQueue, GameEvent};
use crate::pieces::{self, PieceShape};
use crate::scoring;
use crate::snapshot::GameSnapshot;
use crate::store::{MemoryStore, ScoreStore, HIGH_SCORE_KEY};
use tui_blockfall_types::{
    GameAction, PieceKind, Rotation, LOCK_DELAY_MS, MAX_FRAME_DELTA_MS, SOFT_DROP_POINTS, SPAWN_X,
    SPAWN_Y,
};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn position.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Mino offsets for the current rotation state.
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Whether the piece rests on the stack or the floor.
    pub fn is_grounded(&self, board: &Board) -> bool {
        !board.fits(&self.shape(), self.x, self.y + 1)
    }
}

/// Complete game state.
///
/// Single-threaded by construction: the board, bag, and active piece are
/// exclusively owned here and every transition completes synchronously
/// within one call.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    bag: PieceBag,
    next: PieceKind,
    score: u32,
    lines: u32,
    level: u32,
    high_score: u32,
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    lock_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
    events: EventQueue,
    store: Box<dyn ScoreStore>,
}

impl GameState {
    /// Create a game with an in-memory score store.
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, Box::new(MemoryStore::new()))
    }

    /// Create a game with an injected persistence backend. The stored high
    /// score is read once here; a failing backend yields 0.
    pub fn with_store(seed: u32, store: Box<dyn ScoreStore>) -> Self {
        let bag = PieceBag::new(seed);
        let next = bag.peek();
        let high_score = store.get(HIGH_SCORE_KEY, 0);

        Self {
            board: Board::new(),
            active: None,
            bag,
            next,
            score: 0,
            lines: 0,
            level: 1,
            high_score,
            fall_timer_ms: 0,
            fall_interval_ms: scoring::fall_interval_ms(1),
            lock_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
            events: EventQueue::new(),
            store,
        }
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
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

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Drain buffered notifications. Call once per frame.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        // A stalled observer loses the newest events instead of panicking.
        let _ = self.events.try_push(event);
    }

    /// Landing row of the active piece if it were hard-dropped now.
    /// Computed without mutating the piece.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let shape = active.shape();
        let mut y = active.y;
        while self.board.fits(&shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a discrete player intent. Returns whether the action changed
    /// anything, so drivers can react to successful moves.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::MoveLeft => self.accepting_input() && self.try_move(-1, 0),
            GameAction::MoveRight => self.accepting_input() && self.try_move(1, 0),
            GameAction::SoftDrop => self.accepting_input() && self.soft_drop(),
            GameAction::HardDrop => self.accepting_input() && self.hard_drop(),
            GameAction::RotateCw => self.accepting_input() && self.try_rotate(true),
            GameAction::RotateCcw => self.accepting_input() && self.try_rotate(false),
        }
    }

    fn accepting_input(&self) -> bool {
        self.started && !self.paused && !self.game_over && self.active.is_some()
    }

    /// Advance timers by `delta_ms` (capped at [`MAX_FRAME_DELTA_MS`]).
    /// No-op while paused, after game over, or before the first spawn.
    pub fn update(&mut self, delta_ms: u32) {
        if !self.started || self.paused || self.game_over || self.active.is_none() {
            return;
        }
        let dt = delta_ms.min(MAX_FRAME_DELTA_MS);

        // Gravity: one descent attempt per elapsed interval. The timer resets
        // whether or not the piece could move.
        self.fall_timer_ms += dt;
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.try_move(0, 1);
            self.fall_timer_ms = 0;
        }

        // Lock delay: accumulate only while the piece cannot descend. Any
        // successful move or rotation zeroes the timer, so a piece can be
        // stalled indefinitely by input.
        if let Some(active) = self.active {
            if active.is_grounded(&self.board) {
                self.lock_timer_ms += dt;
                if self.lock_timer_ms >= LOCK_DELAY_MS {
                    self.lock_piece();
                }
            } else {
                self.lock_timer_ms = 0;
            }
        }
    }

    /// Move the active piece by (dx, dy) if the target placement is open.
    /// Success resets the lock timer; failure changes nothing.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !self.board.fits(&active.shape(), active.x + dx, active.y + dy) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        self.lock_timer_ms = 0;
        true
    }

    /// Rotate the active piece with SRS wall kicks.
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let outcome = {
            let board = &self.board;
            pieces::try_rotate(
                active.kind,
                active.rotation,
                active.x,
                active.y,
                clockwise,
                |x, y| board.is_open(x, y),
            )
        };
        let Some(outcome) = outcome else {
            return false;
        };

        self.active = Some(ActivePiece {
            rotation: outcome.rotation,
            x: active.x + outcome.offset.0,
            y: active.y + outcome.offset.1,
            ..active
        });
        self.lock_timer_ms = 0;
        true
    }

    /// One manual descent step. Scores a point and restarts the gravity
    /// interval on success.
    fn soft_drop(&mut self) -> bool {
        if !self.try_move(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(SOFT_DROP_POINTS);
        self.fall_timer_ms = 0;
        true
    }

    /// Drop to the landing row and lock immediately. Scores per row dropped.
    fn hard_drop(&mut self) -> bool {
        let mut distance: u32 = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.score = self
            .score
            .saturating_add(scoring::drop_points(distance, true));
        self.lock_piece();
        true
    }

    /// Commit the active piece to the board, resolve line clears, and spawn
    /// the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock(&active.shape(), active.x, active.y, active.kind);
        self.push_event(GameEvent::PieceLocked { kind: active.kind });

        let rows = self.board.completed_lines();
        if !rows.is_empty() {
            let count = rows.len() as u32;
            self.score = self
                .score
                .saturating_add(scoring::line_clear_points(rows.len(), self.level));
            self.lines += count;

            let new_level = scoring::level_for_lines(self.lines);
            let leveled_up = new_level > self.level;
            if leveled_up {
                self.level = new_level;
                self.fall_interval_ms = scoring::fall_interval_ms(new_level);
            }

            if self.score > self.high_score {
                self.high_score = self.score;
                self.store.set(HIGH_SCORE_KEY, self.high_score);
            }

            self.board.clear_lines(&rows);
            self.push_event(GameEvent::LinesCleared { rows, count });
            if leveled_up {
                self.push_event(GameEvent::LevelUp { level: new_level });
            }
        }

        if !self.game_over {
            self.spawn_piece();
        }
    }

    /// Draw the next piece and place it at the spawn position. A blocked
    /// spawn ends the round: the board freezes and no further piece exists.
    fn spawn_piece(&mut self) {
        let kind = self.bag.draw();
        let piece = ActivePiece::new(kind);

        if !self.board.fits(&piece.shape(), piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            self.push_event(GameEvent::GameOver { score: self.score });
            return;
        }

        self.active = Some(piece);
        self.next = self.bag.peek();
        self.lock_timer_ms = 0;
    }

    /// Toggle pause. Has no effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Reset to a fresh round. The score store and the recorded high score
    /// carry over; everything else is reinitialized and a piece spawns.
    pub fn restart(&mut self) {
        self.board.clear();
        self.bag.reset();
        self.next = self.bag.peek();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.fall_timer_ms = 0;
        self.fall_interval_ms = scoring::fall_interval_ms(1);
        self.lock_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.events.clear();
        self.started = true;
        self.spawn_piece();
    }

    /// Capture the renderable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot {
            active: self.active.map(Into::into),
            ghost_y: self.ghost_y(),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            high_score: self.high_score,
            paused: self.paused,
            game_over: self.game_over,
            ..GameSnapshot::default()
        };
        self.board.write_grid(&mut snap.board);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tui_blockfall_types::BOARD_WIDTH;

    fn fill_row_except(state: &mut GameState, y: i8, skip_x: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            if x != skip_x {
                state.board.set(x, y, Some(PieceKind::J));
            }
        }
    }

    /// Park an I piece on the east wall so it fills column 9 of rows 20..=23.
    fn wall_column_piece() -> ActivePiece {
        ActivePiece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 7,
            y: 20,
        }
    }

    #[test]
    fn new_game_is_idle() {
        let state = GameState::new(12345);
        assert!(!state.started());
        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.fall_interval_ms(), 1000);
        assert!(state.active().is_none());
    }

    #[test]
    fn start_spawns_at_spawn_position() {
        let mut state = GameState::new(12345);
        state.start();
        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(active.rotation, Rotation::North);
    }

    #[test]
    fn preview_matches_following_spawn() {
        let mut state = GameState::new(12345);
        state.start();
        let previewed = state.next_piece();
        state.apply_action(GameAction::HardDrop);
        assert_eq!(state.active().unwrap().kind, previewed);
    }

    #[test]
    fn moves_commit_or_reject() {
        let mut state = GameState::new(12345);
        state.start();
        let x0 = state.active().unwrap().x;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().unwrap().x, x0 + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().unwrap().x, x0);

        // Walls reject without mutating.
        let mut moved = 0;
        while state.apply_action(GameAction::MoveLeft) {
            moved += 1;
            assert!(moved < 10, "never hit the wall");
        }
        let wall_x = state.active().unwrap().x;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().unwrap().x, wall_x);
    }

    #[test]
    fn rotation_full_cycle_restores_state_away_from_walls() {
        let mut state = GameState::new(12345);
        state.start();
        let before = state.active().unwrap();

        for _ in 0..4 {
            assert!(state.apply_action(GameAction::RotateCw));
        }
        assert_eq!(state.active().unwrap(), before);

        for _ in 0..4 {
            assert!(state.apply_action(GameAction::RotateCcw));
        }
        assert_eq!(state.active().unwrap(), before);
    }

    #[test]
    fn o_piece_rotates_in_place() {
        let mut state = GameState::new(1);
        state.start();
        state.active = Some(ActivePiece::new(PieceKind::O));

        let before = state.active().unwrap();
        assert!(state.apply_action(GameAction::RotateCw));
        let after = state.active().unwrap();
        assert_eq!(after.rotation, Rotation::East);
        assert_eq!((after.x, after.y), (before.x, before.y));
    }

    #[test]
    fn soft_drop_scores_and_descends() {
        let mut state = GameState::new(12345);
        state.start();
        let y0 = state.active().unwrap().y;
        state.fall_timer_ms = 500;

        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active().unwrap().y, y0 + 1);
        assert_eq!(state.score(), 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn hard_drop_scores_distance_and_locks() {
        let mut state = GameState::new(12345);
        state.start();

        // Every spawn shape bottoms out on offset row 1, so the drop from
        // row 2 to the floor is always 20 rows on an empty board.
        assert!(state.apply_action(GameAction::HardDrop));
        assert_eq!(state.score(), 40);

        let events = state.take_events();
        assert!(matches!(events[0], GameEvent::PieceLocked { .. }));
        // The next piece spawned immediately.
        assert!(state.active().is_some());
    }

    #[test]
    fn gravity_descends_once_per_interval() {
        let mut state = GameState::new(12345);
        state.start();
        let y0 = state.active().unwrap().y;

        for _ in 0..19 {
            state.update(50);
        }
        assert_eq!(state.active().unwrap().y, y0);

        state.update(50);
        assert_eq!(state.active().unwrap().y, y0 + 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn update_caps_large_time_jumps() {
        let mut state = GameState::new(12345);
        state.start();
        let y0 = state.active().unwrap().y;

        // A single stalled frame must not flush the whole gravity interval.
        state.update(10_000);
        assert_eq!(state.active().unwrap().y, y0);
        assert_eq!(state.fall_timer_ms, MAX_FRAME_DELTA_MS);
    }

    #[test]
    fn grounded_piece_locks_after_delay() {
        let mut state = GameState::new(12345);
        state.start();
        while state.try_move(0, 1) {}

        state.update(50);
        assert!(state.active().is_some(), "still inside the lock delay");

        for _ in 0..6 {
            state.update(50);
        }
        // The piece locked and the next one spawned at the top.
        let active = state.active().unwrap();
        assert_eq!(active.y, SPAWN_Y);
    }

    #[test]
    fn successful_moves_stall_the_lock_timer_indefinitely() {
        let mut state = GameState::new(12345);
        state.start();
        while state.try_move(0, 1) {}

        // Far more resets than any move-count cap would allow.
        let mut direction = -1;
        for _ in 0..40 {
            // Sit grounded for 250 ms, just shy of the lock delay.
            for _ in 0..5 {
                state.update(50);
            }
            assert!(state.active().is_some());
            if !state.try_move(direction, 0) {
                direction = -direction;
                assert!(state.try_move(direction, 0));
            }
            assert_eq!(state.lock_timer_ms, 0);
        }
        assert!(state.active().is_some());

        // Left alone, it finally locks.
        for _ in 0..6 {
            state.update(50);
        }
        assert_eq!(state.active().unwrap().y, SPAWN_Y);
    }

    #[test]
    fn single_line_clear_scores_100_at_level_1() {
        let mut state = GameState::new(12345);
        state.start();
        fill_row_except(&mut state, 23, 9);
        state.active = Some(wall_column_piece());

        state.lock_piece();
        assert_eq!(state.lines(), 1);
        assert_eq!(state.score(), 100);
        // The cleared row is gone; the wall column above it dropped by one.
        assert_eq!(state.board().get(9, 23), Some(Some(PieceKind::I)));
        assert_eq!(state.board().get(0, 23), Some(None));
    }

    #[test]
    fn multi_line_clears_use_the_score_table() {
        for (rows_filled, expected) in [(1usize, 100u32), (2, 300), (3, 500), (4, 800)] {
            let mut state = GameState::new(12345);
            state.start();
            for i in 0..rows_filled {
                fill_row_except(&mut state, 23 - i as i8, 9);
            }
            state.active = Some(wall_column_piece());

            state.lock_piece();
            assert_eq!(state.lines(), rows_filled as u32, "{} rows", rows_filled);
            assert_eq!(state.score(), expected, "{} rows", rows_filled);
        }
    }

    #[test]
    fn clear_scores_scale_with_level() {
        let mut state = GameState::new(12345);
        state.start();
        state.level = 3;
        fill_row_except(&mut state, 23, 9);
        fill_row_except(&mut state, 22, 9);
        state.active = Some(wall_column_piece());

        state.lock_piece();
        assert_eq!(state.score(), 900);
    }

    #[test]
    fn crossing_ten_lines_levels_up_and_speeds_up() {
        let mut state = GameState::new(12345);
        state.start();
        state.lines = 9;
        fill_row_except(&mut state, 23, 9);
        state.active = Some(wall_column_piece());

        state.lock_piece();
        assert_eq!(state.lines(), 10);
        assert_eq!(state.level(), 2);
        assert_eq!(state.fall_interval_ms(), 800);

        let events = state.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { level: 2 })));
    }

    #[test]
    fn clear_events_carry_row_indices() {
        let mut state = GameState::new(12345);
        state.start();
        fill_row_except(&mut state, 23, 9);
        fill_row_except(&mut state, 22, 9);
        state.active = Some(wall_column_piece());

        state.lock_piece();
        let events = state.take_events();
        let cleared = events
            .iter()
            .find_map(|e| match e {
                GameEvent::LinesCleared { rows, count } => Some((rows.clone(), *count)),
                _ => None,
            })
            .expect("lines-cleared event");
        assert_eq!(cleared.0.as_slice(), &[22, 23]);
        assert_eq!(cleared.1, 2);
    }

    #[test]
    fn blocked_spawn_ends_the_round() {
        let mut state = GameState::new(12345);
        // Row 3 intersects every spawn shape.
        for x in 0..BOARD_WIDTH as i8 {
            state.board.set(x, 3, Some(PieceKind::Z));
        }
        state.start();

        assert!(state.game_over());
        assert!(state.active().is_none());
        let events = state.take_events();
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

        // Frozen: no actions, no time.
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        state.update(1000);
        assert!(state.active().is_none());
    }

    #[test]
    fn pause_freezes_time_and_input() {
        let mut state = GameState::new(12345);
        state.start();
        let before = state.active().unwrap();

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        for _ in 0..100 {
            state.update(50);
        }
        assert!(!state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().unwrap(), before);

        assert!(state.apply_action(GameAction::Pause));
        assert!(!state.paused());
        assert!(state.apply_action(GameAction::MoveRight));
    }

    #[test]
    fn pause_is_rejected_after_game_over() {
        let mut state = GameState::new(12345);
        state.game_over = true;
        assert!(!state.apply_action(GameAction::Pause));
        assert!(!state.paused());
    }

    #[test]
    fn restart_resets_everything_but_the_high_score() {
        let mut state = GameState::new(12345);
        state.start();
        state.high_score = 5000;
        state.score = 900;
        state.lines = 14;
        state.level = 2;
        state.paused = true;
        state.board.set(0, 23, Some(PieceKind::L));

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.high_score(), 5000);
        assert!(!state.paused());
        assert!(!state.game_over());
        assert!(state.active().is_some());
        assert_eq!(state.board.get(0, 23), Some(None));
    }

    #[test]
    fn restart_recovers_from_game_over() {
        let mut state = GameState::new(12345);
        state.start();
        for x in 0..BOARD_WIDTH as i8 {
            state.board.set(x, 3, Some(PieceKind::Z));
        }
        state.lock_piece();
        assert!(state.game_over());

        assert!(state.apply_action(GameAction::Restart));
        assert!(!state.game_over());
        assert!(state.active().is_some());
    }

    #[test]
    fn ghost_tracks_landing_row() {
        let mut state = GameState::new(12345);
        state.start();
        let active = state.active().unwrap();

        // Every spawn shape bottoms out on offset row 1.
        assert_eq!(state.ghost_y(), Some(22));

        // A floor under the piece raises the ghost.
        for x in 0..BOARD_WIDTH as i8 {
            state.board.set(x, 12, Some(PieceKind::S));
        }
        let ghost = state.ghost_y().unwrap();
        assert_eq!(ghost, 10);
        // Ghost never mutates the piece.
        assert_eq!(state.active().unwrap(), active);
    }

    #[derive(Debug, Clone, Default)]
    struct ProbeStore {
        writes: Rc<RefCell<Vec<u32>>>,
    }

    impl ScoreStore for ProbeStore {
        fn get(&self, _key: &str, default: u32) -> u32 {
            default.max(250)
        }

        fn set(&mut self, _key: &str, value: u32) {
            self.writes.borrow_mut().push(value);
        }
    }

    #[test]
    fn high_score_is_loaded_and_persisted_through_the_store() {
        let probe = ProbeStore::default();
        let writes = Rc::clone(&probe.writes);

        let mut state = GameState::with_store(12345, Box::new(probe));
        assert_eq!(state.high_score(), 250);
        state.start();

        // A sub-record clear does not persist.
        fill_row_except(&mut state, 23, 9);
        state.active = Some(wall_column_piece());
        state.lock_piece();
        assert_eq!(state.score(), 100);
        assert!(writes.borrow().is_empty());

        // Passing the record does.
        state.score = 240;
        fill_row_except(&mut state, 23, 9);
        state.active = Some(wall_column_piece());
        state.lock_piece();
        assert_eq!(state.score(), 340);
        assert_eq!(state.high_score(), 340);
        assert_eq!(writes.borrow().as_slice(), &[340]);
    }

    #[test]
    fn snapshot_reflects_the_live_state() {
        let mut state = GameState::new(12345);
        state.start();
        state.board.set(0, 23, Some(PieceKind::T));

        let snap = state.snapshot();
        assert_eq!(snap.board[23][0], PieceKind::T.index() as u8 + 1);
        assert_eq!(snap.next, state.next_piece());
        assert_eq!(snap.ghost_y, state.ghost_y());
        assert_eq!(snap.level, 1);
        assert!(!snap.game_over);
    }
}
