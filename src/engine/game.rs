//! Turn and selection state machine wrapping `Board`.
//!
//! `Game` is what a presentation layer talks to: select a square, move the
//! selection, query destinations and check. Rejected input is a plain
//! `false`; only a broken board invariant surfaces as an error.

use std::collections::BTreeMap;

use tracing::debug;

use crate::engine::board::Board;
use crate::engine::types::{ChessError, Color, Coordinate, PieceKind};

// =========================================================================
// Game
// =========================================================================

/// A board, the side to move, and the currently selected square.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    /// When set, holds a piece of `turn` with at least one legal destination.
    selected: Option<Coordinate>,
}

impl Game {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// New game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Game from an arbitrary board with `turn` to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Colour and kind on `pos`, for rendering.
    pub fn piece_at(&self, pos: Coordinate) -> Option<(Color, PieceKind)> {
        self.board.get(pos).map(|p| (p.color, p.kind))
    }

    /// Legal destinations of whatever stands on `pos`.
    pub fn legal_destinations(&self, pos: Coordinate) -> Vec<Coordinate> {
        self.board.legal_moves_for(pos)
    }

    /// Every movable piece of `color` with its destinations.
    pub fn all_legal_moves(&self, color: Color) -> BTreeMap<Coordinate, Vec<Coordinate>> {
        self.board.all_legal_moves(color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    // -----------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------

    /// Select `pos` for the next move.
    ///
    /// Succeeds only for a piece of the side to move that has a legal
    /// destination; any other square clears the selection.
    pub fn select(&mut self, pos: Coordinate) -> bool {
        let selectable = self.board.get(pos).is_some_and(|p| p.color == self.turn)
            && !self.board.legal_moves_for(pos).is_empty();

        if selectable {
            self.selected = Some(pos);
        } else {
            debug!(%pos, turn = %self.turn, "selection rejected");
            self.selected = None;
        }
        selectable
    }

    /// Move the selected piece to `dest`.
    ///
    /// `Ok(false)` if nothing is selected or `dest` is not a legal
    /// destination; the selection and turn are then left as they were.
    /// On success the selection clears and the turn passes.
    pub fn move_to(&mut self, dest: Coordinate) -> Result<bool, ChessError> {
        let Some(from) = self.selected else {
            debug!(%dest, "move rejected: nothing selected");
            return Ok(false);
        };

        if !self.board.legal_moves_for(from).contains(&dest) {
            debug!(%from, %dest, "move rejected: not a legal destination");
            return Ok(false);
        }

        self.board.execute_move(from, dest)?;
        debug!(%from, %dest, color = %self.turn, "move played");
        self.selected = None;
        self.turn = !self.turn;
        Ok(true)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
