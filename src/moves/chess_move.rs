//! Single-ply move value.
//!
//! A `ChessMove` is built by the generators from a board snapshot and never
//! mutated afterwards. Identity is `(start, end, piece_moved)`; the captured
//! piece and special-move flags are derived data.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// Special-move kind requested at construction time. Promotion is not listed
/// because it is derived from the moved piece and the landing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveKind {
    #[default]
    Normal,
    EnPassant,
    Castle,
}

#[derive(Debug, Clone, Copy, Eq)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the adjacent pawn, not the (empty) landing square.
    pub piece_captured: Option<Piece>,
    pub is_en_passant_move: bool,
    pub is_castle_move: bool,
    pub is_pawn_promotion: bool,
}

impl ChessMove {
    pub fn new(start: Square, end: Square, piece_moved: Piece, board: &Board, kind: MoveKind) -> Self {
        let is_en_passant_move = kind == MoveKind::EnPassant;
        let piece_captured = if is_en_passant_move {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board[end]
        };
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant_move,
            is_castle_move: kind == MoveKind::Castle,
            is_pawn_promotion: piece_moved.kind == PieceKind::Pawn
                && end.row == piece_moved.color.promotion_row(),
        }
    }

    /// Square of the pawn removed by an en-passant capture: the mover's start
    /// row, the landing column.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    /// Rook relocation `(from, to)` for castling moves.
    pub fn castle_rook_squares(&self) -> Option<(Square, Square)> {
        if !self.is_castle_move {
            return None;
        }
        let row = self.end.row;
        if self.end.col > self.start.col {
            Some((Square::new(row, self.end.col + 1), Square::new(row, self.end.col - 1)))
        } else {
            Some((Square::new(row, self.end.col - 2), Square::new(row, self.end.col + 1)))
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Coordinate notation of start and end square, e.g. `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!("{}{}", square_to_algebraic(self.start), square_to_algebraic(self.end))
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.piece_moved == other.piece_moved
    }
}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.piece_moved.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;

    fn light(kind: PieceKind) -> Piece {
        Piece::new(Color::Light, kind)
    }

    #[test]
    fn captured_piece_is_read_from_the_board() {
        let mut board = Board::empty();
        board[Square::new(3, 3)] = Some(Piece::new(Color::Dark, PieceKind::Knight));
        let mv = ChessMove::new(Square::new(4, 4), Square::new(3, 3), light(PieceKind::Pawn), &board, MoveKind::Normal);
        assert_eq!(mv.piece_captured, Some(Piece::new(Color::Dark, PieceKind::Knight)));
        assert!(!mv.is_pawn_promotion);
    }

    #[test]
    fn en_passant_captures_the_adjacent_pawn() {
        let board = Board::empty();
        let mv = ChessMove::new(Square::new(3, 4), Square::new(2, 3), light(PieceKind::Pawn), &board, MoveKind::EnPassant);
        assert_eq!(mv.piece_captured, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        assert_eq!(mv.en_passant_capture_square(), Square::new(3, 3));
    }

    #[test]
    fn promotion_is_derived_from_landing_row() {
        let board = Board::empty();
        let mv = ChessMove::new(Square::new(1, 0), Square::new(0, 0), light(PieceKind::Pawn), &board, MoveKind::Normal);
        assert!(mv.is_pawn_promotion);
        let dark = ChessMove::new(Square::new(6, 0), Square::new(7, 0), Piece::new(Color::Dark, PieceKind::Pawn), &board, MoveKind::Normal);
        assert!(dark.is_pawn_promotion);
        let rook = ChessMove::new(Square::new(1, 0), Square::new(0, 0), light(PieceKind::Rook), &board, MoveKind::Normal);
        assert!(!rook.is_pawn_promotion);
    }

    #[test]
    fn equality_ignores_derived_fields() {
        let board = starting_board();
        let a = ChessMove::new(Square::new(6, 4), Square::new(4, 4), light(PieceKind::Pawn), &board, MoveKind::Normal);
        let b = ChessMove::new(Square::new(6, 4), Square::new(4, 4), light(PieceKind::Pawn), &Board::empty(), MoveKind::EnPassant);
        assert_eq!(a, b);
        let c = ChessMove::new(Square::new(6, 4), Square::new(4, 4), light(PieceKind::Queen), &board, MoveKind::Normal);
        assert_ne!(a, c);
    }

    #[test]
    fn castle_rook_squares_follow_direction() {
        let board = Board::empty();
        let short = ChessMove::new(Square::new(7, 4), Square::new(7, 6), light(PieceKind::King), &board, MoveKind::Castle);
        assert_eq!(short.castle_rook_squares(), Some((Square::new(7, 7), Square::new(7, 5))));
        let long = ChessMove::new(Square::new(7, 4), Square::new(7, 2), light(PieceKind::King), &board, MoveKind::Castle);
        assert_eq!(long.castle_rook_squares(), Some((Square::new(7, 0), Square::new(7, 3))));
    }

    #[test]
    fn notation_uses_files_and_ranks() {
        let board = starting_board();
        let mv = ChessMove::new(Square::new(6, 4), Square::new(4, 4), light(PieceKind::Pawn), &board, MoveKind::Normal);
        assert_eq!(mv.chess_notation(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
    }
}
