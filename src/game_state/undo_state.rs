use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;

/// Single history record for `make_move` / `undo_move`.
///
/// Pushed and popped as one unit so the move log, castling-rights history and
/// en-passant history can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    /// Piece the pawn became, for promotion moves.
    pub promoted_to: Option<PieceKind>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
