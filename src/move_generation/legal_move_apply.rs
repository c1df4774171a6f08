//! Reversible move execution on `GameState`.
//!
//! `make_move` trusts its input to come from the legal move list. Every ply
//! pushes one `UndoState`, and `undo_move` pops exactly one.

use tracing::{debug, trace};

use crate::game_state::chess_rules::{rook_home_right, PROMOTION_KINDS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

impl GameState {
    /// Plays `mv`, promoting to a queen when the move is a promotion.
    #[inline]
    pub fn make_move(&mut self, mv: ChessMove) {
        self.make_move_with_promotion(mv, PieceKind::Queen);
    }

    /// Plays `mv`. `promote_to` is only read for promotion moves; kinds a pawn
    /// cannot become fall back to a queen.
    pub fn make_move_with_promotion(&mut self, mv: ChessMove, promote_to: PieceKind) {
        let mover = mv.piece_moved.color;
        let prev_castling_rights = self.castling_rights;
        let prev_en_passant_square = self.en_passant_square;

        self.put(mv.start, None);
        self.put(mv.end, Some(mv.piece_moved));
        self.side_to_move = self.side_to_move.opposite();

        self.en_passant_square =
            if mv.piece_moved.kind == PieceKind::Pawn && mv.start.row.abs_diff(mv.end.row) == 2 {
                Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
            } else {
                None
            };

        if mv.is_en_passant_move {
            self.put(mv.en_passant_capture_square(), None);
        }

        let promoted_to = if mv.is_pawn_promotion {
            let kind = if PROMOTION_KINDS.contains(&promote_to) { promote_to } else { PieceKind::Queen };
            self.put(mv.end, Some(Piece::new(mover, kind)));
            Some(kind)
        } else {
            None
        };

        if let Some((rook_from, rook_to)) = mv.castle_rook_squares() {
            let rook = self.board[rook_from];
            self.put(rook_from, None);
            self.put(rook_to, rook);
        }

        self.update_castling_rights(&mv);

        self.history.push(UndoState {
            mv,
            promoted_to,
            prev_castling_rights,
            prev_en_passant_square,
        });
        self.check_state = None;

        trace!(mv = %mv, side = ?mover, ply = self.history.len(), "make_move");
    }

    /// Reverses the last move. Does nothing when the log is empty.
    pub fn undo_move(&mut self) {
        let Some(undo) = self.history.pop() else {
            debug!("undo_move called with an empty move log");
            return;
        };
        let mv = undo.mv;

        // Restoring the original pawn also undoes a promotion.
        self.put(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant_move {
            self.put(mv.end, None);
            self.put(mv.en_passant_capture_square(), mv.piece_captured);
        } else {
            self.put(mv.end, mv.piece_captured);
        }

        if let Some((rook_from, rook_to)) = mv.castle_rook_squares() {
            let rook = self.board[rook_to];
            self.put(rook_to, None);
            self.put(rook_from, rook);
        }

        self.side_to_move = self.side_to_move.opposite();
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.check_state = None;

        trace!(mv = %mv, ply = self.history.len(), "undo_move");
    }

    /// Rights only ever shrink here; undo restores them from history.
    fn update_castling_rights(&mut self, mv: &ChessMove) {
        let mover = mv.piece_moved.color;
        match mv.piece_moved.kind {
            PieceKind::King => {
                self.castling_rights &= !(kingside_right(mover) | queenside_right(mover));
            }
            PieceKind::Rook => {
                if let Some(right) = rook_home_right(mv.start) {
                    self.castling_rights &= !right;
                }
            }
            _ => {}
        }

        // Landing on a rook home square means that rook is gone.
        if let Some(right) = rook_home_right(mv.end) {
            self.castling_rights &= !right;
        }
    }
}
