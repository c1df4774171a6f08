//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the fixed home squares used by
//! castling and castling-rights bookkeeping.

use crate::game_state::chess_types::*;

/// Back-rank piece order from file a to file h.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Pieces a pawn may promote to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Standard starting layout.
pub fn starting_board() -> Board {
    let mut board = Board::empty();
    for color in [Color::Light, Color::Dark] {
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            board[Square::new(color.back_row(), col as u8)] = Some(Piece::new(color, *kind));
            board[Square::new(color.pawn_home_row(), col as u8)] =
                Some(Piece::new(color, PieceKind::Pawn));
        }
    }
    board
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.back_row(), KING_HOME_COL)
}

/// Castling right lost when a rook leaves (or is captured on) `square`.
pub fn rook_home_right(square: Square) -> Option<CastlingRights> {
    [Color::Light, Color::Dark].into_iter().find_map(|color| {
        if square == Square::new(color.back_row(), KINGSIDE_ROOK_COL) {
            Some(kingside_right(color))
        } else if square == Square::new(color.back_row(), QUEENSIDE_ROOK_COL) {
            Some(queenside_right(color))
        } else {
            None
        }
    })
}
