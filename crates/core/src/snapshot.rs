//! Read-only view of the game state for renderers.

use crate::board::BoardGrid;
use crate::game::ActivePiece;
use tui_blockfall_types::{PieceKind, Rotation, BOARD_WIDTH, TOTAL_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(piece: ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Complete renderable state. The board covers the full stored grid, buffer
/// rows included; presentation layers decide what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece, for the ghost outline.
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; TOTAL_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            high_score: 0,
            paused: false,
            game_over: false,
        }
    }
}
