//! Core mutable position aggregate.
//!
//! `GameState` owns the 8x8 board, side to move, cached king squares, current
//! castling rights and en-passant target, and the per-ply history stack used by
//! `make_move` / `undo_move`. Move execution lives in
//! `move_generation::legal_move_apply` and legality in
//! `move_generation::legal_move_generator`.

use crate::game_state::chess_rules::{king_home, rook_home_right, starting_board};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{check_for_pins_and_checks, CheckState};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // Derived from the board; only `put` writes these.
    pub(crate) king_squares: [Option<Square>; 2],

    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // --- Make/undo stack ---
    pub(crate) history: Vec<UndoState>,

    // Result of the most recent legality pass; cleared by every mutation.
    pub(crate) check_state: Option<CheckState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            king_squares: [None; 2],
            castling_rights: 0,
            en_passant_square: None,
            history: Vec::new(),
            check_state: None,
        }
    }
}

impl GameState {
    /// Empty board, light to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for (square, piece) in starting_board().pieces() {
            game_state.put(square, Some(piece));
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    /// Discards the current game and returns to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Moves played so far, oldest first.
    pub fn move_log(&self) -> impl DoubleEndedIterator<Item = &ChessMove> + ExactSizeIterator + '_ {
        self.history.iter().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|undo| &undo.mv)
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// Pins and checks found by the last `get_valid_moves` call, if the
    /// position has not been mutated since.
    #[inline]
    pub fn last_check_state(&self) -> Option<&CheckState> {
        self.check_state.as_ref()
    }

    /// Whether the side to move is currently attacked, computed fresh.
    pub fn in_check(&self) -> bool {
        self.fresh_check_state().in_check
    }

    pub(crate) fn fresh_check_state(&self) -> CheckState {
        match self.king_square(self.side_to_move) {
            Some(king) => check_for_pins_and_checks(&self.board, king, self.side_to_move),
            None => CheckState::default(),
        }
    }

    /// Setup: place or clear a square, keeping the king cache in sync.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.put(square, piece);
        self.check_state = None;
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
        self.check_state = None;
    }

    /// Setup: rights whose king or rook is not on its home square are dropped.
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        let mut kept = 0;
        for color in [Color::Light, Color::Dark] {
            let king_ok = matches!(self.board[king_home(color)], Some(p) if p.is(color, PieceKind::King));
            for right in [kingside_right(color), queenside_right(color)] {
                if rights & right == 0 || !king_ok {
                    continue;
                }
                let rook_ok = Square::all()
                    .filter(|sq| rook_home_right(*sq) == Some(right))
                    .any(|sq| matches!(self.board[sq], Some(p) if p.is(color, PieceKind::Rook)));
                if rook_ok {
                    kept |= right;
                }
            }
        }
        self.castling_rights = kept;
        self.check_state = None;
    }

    pub fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
        self.check_state = None;
    }

    /// The one board write routine; keeps `king_squares` in sync.
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(old) = self.board[square] {
            if old.kind == PieceKind::King && self.king_squares[old.color.index()] == Some(square) {
                self.king_squares[old.color.index()] = None;
            }
        }
        if let Some(new) = piece {
            if new.kind == PieceKind::King {
                self.king_squares[new.color.index()] = Some(square);
            }
        }
        self.board[square] = piece;
    }
}
