//! Grid-based board representation.
//!
//! `Board` stores an 8×8 grid of optional [`Piece`] values plus the en-passant
//! target. A piece's location is the cell holding it; pieces carry no
//! coordinate of their own, so cloning the board is a plain value copy and
//! a clone never aliases the original.
//!
//! Rank 0 is Black's back rank and rank 7 is White's; White pawns advance
//! toward rank 0.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{error, trace};

use crate::engine::movegen::{self, KING_FILE};
use crate::engine::types::{ChessError, Color, Coordinate, Piece, PieceKind};

/// Back-rank order for both sides, files 0..7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The 8×8 grid and the one half-move of transient en-passant state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// `squares[rank][file]`.
    squares: [[Option<Piece>; 8]; 8],

    /// Square skipped by a pawn's double step on the previous half-move.
    en_passant_target: Option<Coordinate>,
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            en_passant_target: None,
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                board.squares[color.back_rank() as usize][file] = Some(Piece::new(color, kind));
            }
            board.squares[color.pawn_rank() as usize] =
                [Some(Piece::new(color, PieceKind::Pawn)); 8];
        }
        board
    }

    /// Put `piece` on `pos`, replacing any occupant.
    pub fn place(&mut self, pos: Coordinate, piece: Piece) -> Result<(), ChessError> {
        let cell = self.cell_mut(pos)?;
        *cell = Some(piece);
        Ok(())
    }

    /// Take whatever stands on `pos` off the board.
    pub fn remove(&mut self, pos: Coordinate) -> Option<Piece> {
        self.cell_mut(pos).ok().and_then(Option::take)
    }

    fn cell_mut(&mut self, pos: Coordinate) -> Result<&mut Option<Piece>, ChessError> {
        if !pos.is_on_board() {
            return Err(ChessError::OffBoard {
                rank: pos.rank,
                file: pos.file,
            });
        }
        Ok(&mut self.squares[pos.rank as usize][pos.file as usize])
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Occupant of `pos`; `None` for empty or off-board squares.
    #[inline]
    pub fn get(&self, pos: Coordinate) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.rank as usize][pos.file as usize]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }

    /// Every occupied square with its piece, rank-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|pos| self.get(pos).map(|p| (pos, p)))
    }

    /// Find the king of `color`. `None` only if something removed it directly.
    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    // -----------------------------------------------------------------------
    // Attack detection
    // -----------------------------------------------------------------------

    /// Is `pos` among the attack-map destinations of any piece of `by`?
    ///
    /// Pins and checks on the attacker are irrelevant here. Pawns count only
    /// their two capture diagonals, never their pushes.
    pub fn is_square_attacked(&self, pos: Coordinate, by: Color) -> bool {
        self.pieces()
            .filter(|(_, p)| p.color == by)
            .any(|(from, _)| movegen::pseudo_legal_moves(self, from, true).contains(&pos))
    }

    /// Is `color`'s king attacked? A missing king counts as check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => true,
        }
    }

    // -----------------------------------------------------------------------
    // Move execution
    // -----------------------------------------------------------------------

    /// Play `from` → `to` without checking legality.
    ///
    /// Handles en-passant capture, the rook half of castling, ordinary
    /// capture by replacement, promotion to a queen, and the en-passant
    /// target for the next half-move. Fails only if `from` is empty or
    /// either square is off the board, which the legality-filtered callers
    /// never produce.
    pub fn execute_move(&mut self, from: Coordinate, to: Coordinate) -> Result<(), ChessError> {
        Coordinate::try_new(to.rank, to.file)?;
        let mut piece = self
            .cell_mut(from)?
            .take()
            .ok_or(ChessError::EmptySquare(from))?;

        let previous_target = self.en_passant_target.take();

        // ---- En passant: the captured pawn is not on `to` ----
        if piece.kind == PieceKind::Pawn
            && previous_target == Some(to)
            && movegen::is_en_passant_victim(self, to, piece.color)
            && let Some(victim_sq) = to.offset(-piece.color.forward(), 0)
        {
            self.remove(victim_sq);
            trace!(%from, %to, captured = %victim_sq, "en passant capture");
        }

        // ---- Castling: move the rook across the king ----
        if piece.kind == PieceKind::King && (to.file - from.file).abs() == 2 {
            let step = (to.file - from.file).signum();
            let rook_from = Coordinate::new(from.rank, if step > 0 { 7 } else { 0 });
            let rook_to = Coordinate::new(from.rank, from.file + step);
            if let Some(rook) = self.remove(rook_from) {
                self.place(rook_to, rook.moved())?;
                trace!(rook_from = %rook_from, rook_to = %rook_to, "castling rook relocated");
            }
        }

        // ---- Move the piece, capturing any occupant of `to` ----
        piece.has_moved = true;
        if let Some(captured) = self.get(to) {
            trace!(%to, captured = %captured.kind, "capture");
        }

        // ---- Promotion ----
        if piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank() {
            piece = Piece::new(piece.color, PieceKind::Queen).moved();
            trace!(%to, color = %piece.color, "pawn promoted to queen");
        }
        self.place(to, piece)?;

        // ---- Double step sets the target for exactly one half-move ----
        if piece.kind == PieceKind::Pawn && (to.rank - from.rank).abs() == 2 {
            self.en_passant_target = Some(Coordinate::new((from.rank + to.rank) / 2, from.file));
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Legality
    // -----------------------------------------------------------------------

    /// Destinations of the piece on `pos` that do not leave its own king
    /// attacked. Each candidate is played on a clone and checked.
    pub fn legal_moves_for(&self, pos: Coordinate) -> Vec<Coordinate> {
        let Some(piece) = self.get(pos) else {
            return Vec::new();
        };

        movegen::pseudo_legal_moves(self, pos, false)
            .into_iter()
            .filter(|&to| {
                let mut sim = self.clone();
                match sim.execute_move(pos, to) {
                    Ok(()) => {
                        let safe = !sim.is_in_check(piece.color);
                        if !safe {
                            trace!(from = %pos, %to, "candidate leaves king attacked");
                        }
                        safe
                    }
                    Err(e) => {
                        error!(from = %pos, %to, error = %e, "simulation refused a generated move");
                        false
                    }
                }
            })
            .collect()
    }

    /// Every square of `color` with at least one legal destination.
    pub fn all_legal_moves(&self, color: Color) -> BTreeMap<Coordinate, Vec<Coordinate>> {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .filter_map(|(pos, _)| {
                let moves = self.legal_moves_for(pos);
                (!moves.is_empty()).then_some((pos, moves))
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

// ---------------------------------------------------------------------------
// Placement parsing & generation
// ---------------------------------------------------------------------------

impl Board {
    /// Parse a FEN-style piece placement, row i describing rank i.
    ///
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"` is the starting
    /// position. Kings off their home square, rooks off their corners and
    /// pawns off their start rank are marked as having moved.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let rank = rank as i8;
            let mut file: i8 = 0;
            for ch in row.chars() {
                if file > 7 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "too many squares in row {rank}"
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidPlacement(format!(
                            "invalid empty count '{ch}' in row {rank}"
                        )));
                    }
                    file += digit as i8;
                } else if let Some((color, kind)) = PieceKind::from_char(ch) {
                    let pos = Coordinate::new(rank, file);
                    let mut piece = Piece::new(color, kind);
                    piece.has_moved = !is_home_square(pos, color, kind);
                    board.place(pos, piece)?;
                    file += 1;
                } else {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid character '{ch}' in row {rank}"
                    )));
                }
            }
            if file != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "row {rank} has {file} squares instead of 8"
                )));
            }
        }
        Ok(board)
    }

    /// Export the piece placement in the same format `from_placement` reads.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8 {
            let mut empty_count = 0u8;
            for file in 0..8 {
                match self.get(Coordinate::new(rank, file)) {
                    Some(p) => {
                        if empty_count > 0 {
                            out.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        out.push(p.kind.to_char(p.color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push((b'0' + empty_count) as char);
            }
            if rank < 7 {
                out.push('/');
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as 8 rank lines (rank 0 on top) plus a file footer.
    pub fn render(&self, unicode: bool) -> String {
        let mut s = String::with_capacity(200);
        for rank in 0..8 {
            s.push((b'0' + rank as u8) as char);
            s.push(' ');
            for file in 0..8 {
                let ch = match self.get(Coordinate::new(rank, file)) {
                    Some(p) if unicode => p.kind.glyph(p.color),
                    Some(p) => p.kind.to_char(p.color),
                    None => '.',
                };
                s.push(ch);
                if file < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  0 1 2 3 4 5 6 7");
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Whether `pos` is where a `kind` of `color` stands before it ever moves.
/// Only meaningful for pieces whose first move changes the rules.
fn is_home_square(pos: Coordinate, color: Color, kind: PieceKind) -> bool {
    match kind {
        PieceKind::King => pos == Coordinate::new(color.back_rank(), KING_FILE),
        PieceKind::Rook => pos.rank == color.back_rank() && (pos.file == 0 || pos.file == 7),
        PieceKind::Pawn => pos.rank == color.pawn_rank(),
        PieceKind::Queen | PieceKind::Bishop | PieceKind::Knight => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn c(rank: i8, file: i8) -> Coordinate {
        Coordinate::new(rank, file)
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn kind_at(b: &Board, pos: Coordinate) -> Option<(Color, PieceKind)> {
        b.get(pos).map(|p| (p.color, p.kind))
    }

    // -------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------

    #[test]
    fn starting_layout() {
        let b = Board::starting();
        assert_eq!(kind_at(&b, c(7, 4)), Some((Color::White, PieceKind::King)));
        assert_eq!(kind_at(&b, c(7, 3)), Some((Color::White, PieceKind::Queen)));
        assert_eq!(kind_at(&b, c(0, 4)), Some((Color::Black, PieceKind::King)));
        assert_eq!(kind_at(&b, c(6, 0)), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(kind_at(&b, c(1, 7)), Some((Color::Black, PieceKind::Pawn)));
        assert_eq!(b.get(c(4, 4)), None);
        assert_eq!(b.pieces().count(), 32);
        assert!(b.pieces().all(|(_, p)| !p.has_moved));
        assert_eq!(b.en_passant_target(), None);
    }

    #[test]
    fn starting_matches_placement() {
        assert_eq!(Board::starting(), board(START));
        assert_eq!(Board::starting().to_placement(), START);
    }

    #[test]
    fn get_off_board_is_empty() {
        let b = Board::starting();
        assert_eq!(b.get(c(-1, 0)), None);
        assert_eq!(b.get(c(0, 8)), None);
    }

    #[test]
    fn place_off_board_errors() {
        let mut b = Board::empty();
        let err = b
            .place(c(8, 8), Piece::new(Color::White, PieceKind::Rook))
            .unwrap_err();
        assert_eq!(err, ChessError::OffBoard { rank: 8, file: 8 });
    }

    #[test]
    fn remove_takes_piece() {
        let mut b = Board::starting();
        let p = b.remove(c(7, 3)).unwrap();
        assert_eq!(p.kind, PieceKind::Queen);
        assert_eq!(b.get(c(7, 3)), None);
        assert_eq!(b.remove(c(7, 3)), None);
    }

    // -------------------------------------------------------------------
    // Placement parsing
    // -------------------------------------------------------------------

    #[test]
    fn placement_infers_moved_flags() {
        let b = board("4k3/8/8/8/8/4P3/3P4/R3K1R1");
        assert!(!b.get(c(7, 4)).unwrap().has_moved);
        assert!(!b.get(c(7, 0)).unwrap().has_moved);
        assert!(b.get(c(7, 6)).unwrap().has_moved);
        assert!(!b.get(c(6, 3)).unwrap().has_moved);
        assert!(b.get(c(5, 4)).unwrap().has_moved);
        assert!(!b.get(c(0, 4)).unwrap().has_moved);
    }

    #[test]
    fn placement_round_trip() {
        let p = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        assert_eq!(board(p).to_placement(), p);
    }

    #[test]
    fn placement_rejects_bad_input() {
        assert!(Board::from_placement("8/8/8").is_err());
        assert!(Board::from_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("8/8/8/8/8/8/8/7x").is_err());
        assert!(Board::from_placement("8/8/8/8/8/8/8/44K").is_err());
    }

    // -------------------------------------------------------------------
    // Execute move
    // -------------------------------------------------------------------

    #[test]
    fn execute_from_empty_square_errors() {
        let mut b = Board::starting();
        let before = b.clone();
        assert_eq!(
            b.execute_move(c(4, 4), c(3, 4)),
            Err(ChessError::EmptySquare(c(4, 4)))
        );
        assert_eq!(b, before);
    }

    #[test]
    fn execute_off_board_errors() {
        let mut b = Board::starting();
        assert!(b.execute_move(c(6, 4), c(-1, 4)).is_err());
        assert!(b.get(c(6, 4)).is_some());
    }

    #[test]
    fn execute_marks_moved_and_relocates() {
        let mut b = Board::starting();
        b.execute_move(c(7, 6), c(5, 5)).unwrap();
        assert_eq!(b.get(c(7, 6)), None);
        let knight = b.get(c(5, 5)).unwrap();
        assert_eq!(knight.kind, PieceKind::Knight);
        assert!(knight.has_moved);
    }

    #[test]
    fn execute_captures_by_replacement() {
        let mut b = board("4k3/8/8/3p4/8/8/8/3RK3");
        b.execute_move(c(7, 3), c(3, 3)).unwrap();
        assert_eq!(kind_at(&b, c(3, 3)), Some((Color::White, PieceKind::Rook)));
        assert_eq!(b.pieces().count(), 3);
    }

    #[test]
    fn double_step_sets_and_next_move_clears_target() {
        let mut b = Board::starting();
        b.execute_move(c(6, 4), c(4, 4)).unwrap();
        assert_eq!(b.en_passant_target(), Some(c(5, 4)));

        b.execute_move(c(0, 6), c(2, 5)).unwrap();
        assert_eq!(b.en_passant_target(), None);
    }

    #[test]
    fn single_step_leaves_no_target() {
        let mut b = Board::starting();
        b.execute_move(c(1, 3), c(2, 3)).unwrap();
        assert_eq!(b.en_passant_target(), None);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        // Black pawn on (4,3); White plays the double step beside it.
        let mut b = board("4k3/8/8/8/3p4/8/4P3/4K3");
        b.execute_move(c(6, 4), c(4, 4)).unwrap();
        assert_eq!(b.en_passant_target(), Some(c(5, 4)));

        b.execute_move(c(4, 3), c(5, 4)).unwrap();
        assert_eq!(kind_at(&b, c(5, 4)), Some((Color::Black, PieceKind::Pawn)));
        assert_eq!(b.get(c(4, 4)), None);
        assert_eq!(b.en_passant_target(), None);
        assert_eq!(b.pieces().count(), 3);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let mut b = board("4k3/8/8/8/8/8/8/4K2R");
        b.execute_move(c(7, 4), c(7, 6)).unwrap();
        assert_eq!(kind_at(&b, c(7, 6)), Some((Color::White, PieceKind::King)));
        let rook = b.get(c(7, 5)).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert_eq!(b.get(c(7, 7)), None);
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let mut b = board("r3k3/8/8/8/8/8/8/4K3");
        b.execute_move(c(0, 4), c(0, 2)).unwrap();
        assert_eq!(kind_at(&b, c(0, 2)), Some((Color::Black, PieceKind::King)));
        assert_eq!(kind_at(&b, c(0, 3)), Some((Color::Black, PieceKind::Rook)));
        assert!(b.get(c(0, 3)).unwrap().has_moved);
        assert_eq!(b.get(c(0, 0)), None);
    }

    #[test]
    fn white_pawn_promotes_on_rank_zero() {
        let mut b = board("7k/4P3/8/8/8/8/8/4K3");
        b.execute_move(c(1, 4), c(0, 4)).unwrap();
        let q = b.get(c(0, 4)).unwrap();
        assert_eq!((q.color, q.kind), (Color::White, PieceKind::Queen));
        assert!(q.has_moved);
    }

    #[test]
    fn black_pawn_promotes_on_rank_seven_with_capture() {
        let mut b = board("4k3/8/8/8/8/8/1p6/R3K3");
        b.execute_move(c(6, 1), c(7, 0)).unwrap();
        let q = b.get(c(7, 0)).unwrap();
        assert_eq!((q.color, q.kind), (Color::Black, PieceKind::Queen));
        assert!(q.has_moved);
    }

    // -------------------------------------------------------------------
    // Attack / check
    // -------------------------------------------------------------------

    #[test]
    fn starting_position_not_in_check() {
        let b = Board::starting();
        assert!(!b.is_in_check(Color::White));
        assert!(!b.is_in_check(Color::Black));
    }

    #[test]
    fn attack_map_queries() {
        let b = Board::starting();
        // Squares in front of each side are covered by its pawns.
        assert!(b.is_square_attacked(c(5, 0), Color::White));
        assert!(b.is_square_attacked(c(2, 7), Color::Black));
        assert!(!b.is_square_attacked(c(4, 4), Color::White));
        // Pawn pushes are not attacks.
        assert!(!b.is_square_attacked(c(4, 0), Color::White));
        assert!(!b.is_square_attacked(c(3, 4), Color::Black));
    }

    #[test]
    fn rook_gives_check() {
        let b = board("4k3/8/8/8/8/8/8/4R1K1");
        assert!(b.is_in_check(Color::Black));
        assert!(!b.is_in_check(Color::White));
    }

    #[test]
    fn missing_king_counts_as_check() {
        let b = board("8/8/8/8/8/8/8/4K3");
        assert_eq!(b.find_king(Color::Black), None);
        assert!(b.is_in_check(Color::Black));
        assert_eq!(b.find_king(Color::White), Some(c(7, 4)));
    }

    // -------------------------------------------------------------------
    // Clone independence
    // -------------------------------------------------------------------

    #[test]
    fn clone_is_independent() {
        let original = Board::starting();
        let mut copy = original.clone();
        copy.execute_move(c(6, 4), c(4, 4)).unwrap();
        assert!(original.get(c(6, 4)).is_some());
        assert!(!original.get(c(6, 4)).unwrap().has_moved);
        assert_eq!(original.en_passant_target(), None);
        assert_ne!(original, copy);
    }

    // -------------------------------------------------------------------
    // Legality filter
    // -------------------------------------------------------------------

    #[test]
    fn starting_position_has_20_moves() {
        let moves = Board::starting().all_legal_moves(Color::White);
        assert_eq!(moves.values().map(Vec::len).sum::<usize>(), 20);
        // Eight pawns and two knights can move.
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn pinned_piece_has_no_moves() {
        // White knight on (6,4) pinned by a black rook on (0,4).
        let b = board("4r1k1/8/8/8/8/8/4N3/4K3");
        assert!(b.legal_moves_for(c(6, 4)).is_empty());
        assert!(!b.all_legal_moves(Color::White).contains_key(&c(6, 4)));
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let b = board("4r1k1/8/8/8/8/8/4R3/4K3");
        let mut moves = b.legal_moves_for(c(6, 4));
        moves.sort();
        let expected: Vec<_> = (0..6).map(|r| c(r, 4)).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn must_address_check() {
        // White king on (7,4) checked by rook on (0,4); only king moves
        // off the file or the bishop block on (5,4) remain.
        let b = board("4r1k1/8/8/8/8/8/5B2/4K3");
        let bishop = b.legal_moves_for(c(6, 5));
        assert_eq!(bishop, vec![c(5, 4)]);
        for (from, dests) in b.all_legal_moves(Color::White) {
            for to in dests {
                let mut sim = b.clone();
                sim.execute_move(from, to).unwrap();
                assert!(!sim.is_in_check(Color::White), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let b = board("k7/8/8/8/8/8/3r4/4K3");
        let moves = b.legal_moves_for(c(7, 4));
        // The rook on (6,3) covers rank 6 and file 3; it is undefended.
        assert!(!moves.contains(&c(7, 3)));
        assert!(!moves.contains(&c(6, 4)));
        assert!(!moves.contains(&c(6, 5)));
        assert!(moves.contains(&c(6, 3)));
        assert!(moves.contains(&c(7, 5)));
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        // Black king (4,0), black pawn (4,3); White plays (6,4)->(4,4) beside it.
        // The rook on (4,7) sees the king once both pawns leave rank 4.
        let mut b = board("8/8/8/8/k2p3R/8/4P3/4K3");
        b.execute_move(c(6, 4), c(4, 4)).unwrap();
        let moves = b.legal_moves_for(c(4, 3));
        assert!(!moves.contains(&c(5, 4)));
        assert!(moves.contains(&c(5, 3)));
    }

    #[test]
    fn empty_square_has_no_legal_moves() {
        assert!(Board::starting().legal_moves_for(c(4, 4)).is_empty());
    }

    // -------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------

    #[test]
    fn render_ascii_and_unicode() {
        let b = Board::starting();
        let text = b.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0 r n b q k b n r");
        assert_eq!(lines[7], "7 R N B Q K B N R");
        assert_eq!(lines[8], "  0 1 2 3 4 5 6 7");

        let fancy = b.render(true);
        assert!(fancy.lines().next().unwrap().contains('♚'));
        assert!(fancy.lines().nth(7).unwrap().contains('♔'));
    }
}
