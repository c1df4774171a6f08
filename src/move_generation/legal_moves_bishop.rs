use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinMap;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_rays::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move(), PieceKind::Bishop);
    push_sliding_moves(game_state, from, piece, &BISHOP_DIRECTIONS, pins, out);
}
