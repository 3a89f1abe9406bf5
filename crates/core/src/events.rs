//! Notifications emitted by the game state for presentation collaborators.
//!
//! Events are buffered in a bounded queue and pulled by the driver once per
//! frame; the core never calls back into observers.

use arrayvec::ArrayVec;

use tui_blockfall_types::PieceKind;

/// Fire-and-forget game notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece was committed to the board.
    PieceLocked { kind: PieceKind },
    /// Completed rows were removed (stored-grid indices, ascending).
    LinesCleared {
        rows: ArrayVec<usize, 4>,
        count: u32,
    },
    /// The level increased after a clear.
    LevelUp { level: u32 },
    /// A spawn was blocked; the round is over.
    GameOver { score: u32 },
}

/// Bounded event buffer. Locking a piece emits at most four events, so the
/// queue only overflows when a driver stops draining; overflow drops the
/// newest events rather than panicking.
pub type EventQueue = ArrayVec<GameEvent, 16>;
