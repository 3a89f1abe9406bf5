//! Core types shared across the workspace.
//! This crate contains pure data types and constants with no external dependencies.

/// Playfield dimensions. The stored grid is taller than the visible region:
/// four hidden buffer rows sit above the visible playfield so pieces can
/// spawn and rotate partially off-screen.
pub const BOARD_WIDTH: u8 = 10;
pub const VISIBLE_HEIGHT: u8 = 20;
pub const BUFFER_HEIGHT: u8 = 4;
pub const TOTAL_HEIGHT: u8 = VISIBLE_HEIGHT + BUFFER_HEIGHT;

/// Spawn coordinate for new pieces (column, stored-grid row).
/// Row 2 is inside the hidden buffer region.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 2;

/// Game timing constants (milliseconds).
pub const LOCK_DELAY_MS: u32 = 300;
pub const BASE_FALL_MS: u32 = 1000;
pub const MIN_FALL_MS: u32 = 50;
pub const FALL_SPEED_FACTOR: f64 = 0.8;

/// Upper bound on the time slice fed into a single update call. Protects the
/// simulation from huge jumps after the process was stalled or backgrounded.
pub const MAX_FRAME_DELTA_MS: u32 = 50;

/// Level progression: one level per this many cleared lines, starting at 1.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points per simultaneous line-clear count (index = lines cleared).
/// The awarded score is the base multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// DAS/ARR timing for held keys (milliseconds).
pub const DAS_DELAY_MS: u32 = 167;
pub const ARR_DELAY_MS: u32 = 33;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable index into [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Rotation states (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Numeric state, 0..=3 clockwise from spawn.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn rotated_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotated_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete player intents fed into the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with a piece kind).
pub type Cell = Option<PieceKind>;
