use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinMap;
use crate::move_generation::legal_move_shared::is_open_for;
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<ChessMove>) {
    // A knight never moves along a line, so any pin freezes it.
    if pins.is_pinned(from) {
        return;
    }

    let board = game_state.board();
    let piece = Piece::new(game_state.side_to_move(), PieceKind::Knight);
    for (to, _) in knight_targets(from) {
        if is_open_for(board, to, piece.color) {
            out.push(ChessMove::new(from, to, piece, board, MoveKind::Normal));
        }
    }
}
