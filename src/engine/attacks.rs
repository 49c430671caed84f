//! Fixed step and ray tables.
//!
//! Every entry is a `(rank delta, file delta)` pair. Leapers (knight, king)
//! take one step per entry; sliders walk each entry as a ray until blocked.

use crate::engine::types::PieceKind;

// =========================================================================
// Leapers
// =========================================================================

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =========================================================================
// Sliders
// =========================================================================

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions for a sliding kind; empty for leapers and pawns.
#[inline]
pub fn slide_dirs(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Queen => &QUEEN_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::King | PieceKind::Knight | PieceKind::Pawn => &[],
    }
}

// =========================================================================
// Tests
// =========================================================================
