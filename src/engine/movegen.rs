//! Pseudo-legal move generation.
//!
//! Generation is check-unaware: a destination is produced if the piece's
//! movement pattern and capture rules allow it. `Board::legal_moves_for`
//! filters these by simulating each one.
//!
//! `for_attack` switches generation to attack-map mode: the king offers no
//! castling candidates and pawns offer their two capture diagonals whatever
//! stands there, and no pushes.

use crate::engine::attacks::{self, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::engine::board::Board;
use crate::engine::types::{Color, Coordinate, Piece, PieceKind};

// =========================================================================
// Public API
// =========================================================================

/// Destinations reachable by the piece on `from`, ignoring own-king safety.
///
/// Empty if `from` is off the board or unoccupied.
pub fn pseudo_legal_moves(board: &Board, from: Coordinate, for_attack: bool) -> Vec<Coordinate> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::King => {
            generate_steps(board, from, piece.color, &KING_OFFSETS, &mut moves);
            if !for_attack {
                generate_castling(board, from, piece, &mut moves);
            }
        }
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
            generate_rays(board, from, piece.color, attacks::slide_dirs(piece.kind), &mut moves);
        }
        PieceKind::Knight => {
            generate_steps(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves);
        }
        PieceKind::Pawn => {
            if for_attack {
                generate_pawn_attacks(from, piece.color, &mut moves);
            } else {
                generate_pawn_moves(board, from, piece.color, &mut moves);
            }
        }
    }
    moves
}

// =========================================================================
// Leapers (king steps, knight)
// =========================================================================

fn generate_steps(
    board: &Board,
    from: Coordinate,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Coordinate>,
) {
    for &(dr, df) in offsets {
        let Some(to) = from.offset(dr, df) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color == us => {}
            _ => moves.push(to),
        }
    }
}

// =========================================================================
// Sliders (queen, rook, bishop)
// =========================================================================

/// Walk each ray until the edge or the first occupant; an enemy occupant's
/// square is included, a friendly one's is not.
fn generate_rays(
    board: &Board,
    from: Coordinate,
    us: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Coordinate>,
) {
    for &(dr, df) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, df) {
            match board.get(to) {
                None => moves.push(to),
                Some(occupant) => {
                    if occupant.color != us {
                        moves.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

// =========================================================================
// Pawns
// =========================================================================

fn generate_pawn_moves(board: &Board, from: Coordinate, us: Color, moves: &mut Vec<Coordinate>) {
    let dir = us.forward();

    // --- Single push, then double push from the start rank ---
    if let Some(one) = from.offset(dir, 0)
        && board.get(one).is_none()
    {
        moves.push(one);
        if from.rank == us.pawn_rank()
            && let Some(two) = from.offset(dir * 2, 0)
            && board.get(two).is_none()
        {
            moves.push(two);
        }
    }

    // --- Captures, including en passant ---
    for df in [-1, 1] {
        let Some(to) = from.offset(dir, df) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color != us => moves.push(to),
            Some(_) => {}
            None => {
                if board.en_passant_target() == Some(to) && is_en_passant_victim(board, to, us) {
                    moves.push(to);
                }
            }
        }
    }
}

fn generate_pawn_attacks(from: Coordinate, us: Color, moves: &mut Vec<Coordinate>) {
    for df in [-1, 1] {
        if let Some(to) = from.offset(us.forward(), df) {
            moves.push(to);
        }
    }
}

/// Whether an enemy pawn stands behind `target`, i.e. on the square a pawn
/// of `us` landing on `target` would capture en passant.
pub(crate) fn is_en_passant_victim(board: &Board, target: Coordinate, us: Color) -> bool {
    target
        .offset(-us.forward(), 0)
        .and_then(|sq| board.get(sq))
        .is_some_and(|p| p.color != us && p.kind == PieceKind::Pawn)
}

// =========================================================================
// Castling
// =========================================================================

/// File the king starts on; castling lands it two files toward a corner rook.
pub(crate) const KING_FILE: i8 = 4;

fn generate_castling(board: &Board, from: Coordinate, king: Piece, moves: &mut Vec<Coordinate>) {
    let us = king.color;
    if king.has_moved || from != Coordinate::new(us.back_rank(), KING_FILE) {
        return;
    }

    let them = !us;
    // (rook file, step toward it)
    for (rook_file, step) in [(7, 1), (0, -1)] {
        let rook_sq = Coordinate::new(from.rank, rook_file);
        let rook_ready = board.get(rook_sq).is_some_and(|p| {
            p.color == us && p.kind == PieceKind::Rook && !p.has_moved
        });
        if !rook_ready {
            continue;
        }

        let lo = from.file.min(rook_file) + 1;
        let hi = from.file.max(rook_file);
        let path_clear = (lo..hi).all(|file| board.get(Coordinate::new(from.rank, file)).is_none());
        if !path_clear {
            continue;
        }

        let cross = Coordinate::new(from.rank, from.file + step);
        let dest = Coordinate::new(from.rank, from.file + 2 * step);
        let safe = [from, cross, dest]
            .iter()
            .all(|&sq| !board.is_square_attacked(sq, them));
        if safe {
            moves.push(dest);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
