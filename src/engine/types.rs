use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank delta of a single pawn step. White advances toward rank 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank holding this side's king and rooks at setup.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank this side's pawns start on (eligible for the double step).
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Unicode chess glyph for this kind and colour.
    pub fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Parse a piece letter; case selects the colour.
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "king"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Pawn => write!(f, "pawn"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A grid occupant. Its position is the grid cell holding it, never stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Set the first time the piece is relocated; never cleared.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Same piece, flagged as having moved.
    pub fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A (rank, file) pair. Only values in 0..8 for both are on the board.
///
/// Signed so that offset arithmetic can step off the edge and be rejected
/// by [`Coordinate::is_on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub rank: i8,
    pub file: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Coordinate { rank, file }
    }

    /// Build an on-board coordinate or report it as off-board.
    pub fn try_new(rank: i8, file: i8) -> Result<Self, ChessError> {
        let pos = Coordinate::new(rank, file);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(ChessError::OffBoard { rank, file })
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    /// Shift by `(dr, df)`; `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, df: i8) -> Option<Coordinate> {
        let to = Coordinate::new(self.rank.checked_add(dr)?, self.file.checked_add(df)?);
        to.is_on_board().then_some(to)
    }

    /// All 64 squares, rank-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Coordinate::new(rank, file)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the rules engine.
///
/// These signal broken invariants or malformed setup input. Rejected user
/// input (bad selection, illegal destination) is reported as `false`, not here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChessError {
    #[error("no piece to move on {0}")]
    EmptySquare(Coordinate),

    #[error("coordinate ({rank}, {file}) is off the board")]
    OffBoard { rank: i8, file: i8 },

    #[error("invalid board placement: {0}")]
    InvalidPlacement(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
