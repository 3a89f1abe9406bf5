//! Core rules engine - pure, deterministic, and testable.
//!
//! Everything that decides gameplay lives here: the board model, piece
//! kinematics with SRS wall kicks, the 7-bag randomizer, lock-delay and
//! line-clear resolution, and the scoring/leveling formulas. The crate has no
//! dependency on rendering, input devices, or the filesystem, so the same
//! engine runs in a terminal, headless in tests, or under a benchmark
//! harness.
//!
//! # Module structure
//!
//! - [`board`]: 10x24 stored grid (20 visible rows + 4 hidden buffer rows)
//!   with collision queries and line clearing
//! - [`pieces`]: tetromino shape tables and SRS rotation with wall kicks
//! - [`bag`]: seeded 7-bag piece generation
//! - [`scoring`]: line-clear points, level progression, gravity intervals
//! - [`game`]: the state machine orchestrating spawn, fall, lock, and clear
//! - [`events`]: pull-based notifications for presentation collaborators
//! - [`store`]: injected key-value persistence for the high score
//! - [`snapshot`]: read-only state capture for renderers
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // hard drops award points per row
//! ```
//!
//! # Timing
//!
//! Call [`GameState::update`] once per frame with the real elapsed
//! milliseconds; the engine caps each slice at 50 ms so stalls cannot teleport
//! pieces. Gravity follows the level's interval (1000 ms at level 1, shrinking
//! by a fixed factor per level) and a grounded piece commits after a 300 ms
//! lock delay unless the player keeps it moving.

pub mod bag;
pub mod board;
pub mod events;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod store;

pub use tui_blockfall_types as types;

// Re-export the everyday surface.
pub use bag::{Lcg, PieceBag};
pub use board::{Board, BoardGrid};
pub use events::{EventQueue, GameEvent};
pub use game::{ActivePiece, GameState};
pub use pieces::{kick_candidates, shape, try_rotate, PieceShape, RotationOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use store::{MemoryStore, ScoreStore, HIGH_SCORE_KEY};
