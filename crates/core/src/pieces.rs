//! Tetromino shape tables and SRS rotation with wall kicks.
//!
//! Shapes are stored as four mino offsets from the piece origin, one entry
//! per rotation state, equivalent to the conventional 4x4 occupancy grids.
//! Kick tables follow the standard SRS data: J/L/S/T/Z share one table, the
//! I piece has its own, and O only ever uses the identity offset.
//!
//! Reference: https://tetris.wiki/SRS

use tui_blockfall_types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece origin.
pub type MinoOffset = (i8, i8);

/// Shape of a piece: 4 mino offsets.
pub type PieceShape = [MinoOffset; 4];

/// A wall-kick candidate list for one rotation transition, tried in order.
pub type KickList = [(i8, i8); 5];

/// Shape lookup indexed by `[kind.index()][rotation.index()]`.
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O (identical in every rotation state)
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Kick tables indexed by transition: `from.index() * 2`, +1 for
/// counter-clockwise.
///
/// Transition order per "from" state: clockwise first, then counter-clockwise.
static JLSTZ_KICKS: [KickList; 8] = [
    // 0 -> 1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0 -> 3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1 -> 2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1 -> 0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2 -> 3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2 -> 1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3 -> 0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3 -> 2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

static I_KICKS: [KickList; 8] = [
    // 0 -> 1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 0 -> 3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1 -> 2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1 -> 0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 2 -> 3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 2 -> 1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 3 -> 0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 3 -> 2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
];

/// O rotates in place: every candidate is the identity offset.
static O_KICKS: [KickList; 8] = [[(0, 0); 5]; 8];

/// Get the shape for a piece kind and rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// The ordered kick candidates for one rotation transition.
pub fn kick_candidates(kind: PieceKind, from: Rotation, clockwise: bool) -> &'static KickList {
    let idx = from.index() * 2 + usize::from(!clockwise);
    match kind {
        PieceKind::I => &I_KICKS[idx],
        PieceKind::O => &O_KICKS[idx],
        _ => &JLSTZ_KICKS[idx],
    }
}

/// Result of a successful rotation: the new state and the kick that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOutcome {
    pub rotation: Rotation,
    pub offset: (i8, i8),
}

/// Resolve a rotation with SRS wall kicks.
///
/// The candidate list starts with the identity offset (the basic rotation at
/// the current position) and is searched strictly in table order; the first
/// offset whose placement satisfies `is_open` for all four minos wins.
/// Returns None when every candidate is blocked.
pub fn try_rotate(
    kind: PieceKind,
    from: Rotation,
    x: i8,
    y: i8,
    clockwise: bool,
    is_open: impl Fn(i8, i8) -> bool,
) -> Option<RotationOutcome> {
    let rotation = if clockwise {
        from.rotated_cw()
    } else {
        from.rotated_ccw()
    };
    let target = shape(kind, rotation);

    for &(kx, ky) in kick_candidates(kind, from, clockwise) {
        let fits = target
            .iter()
            .all(|&(mx, my)| is_open(x + kx + mx, y + ky + my));
        if fits {
            return Some(RotationOutcome {
                rotation,
                offset: (kx, ky),
            });
        }
    }

    None
}
