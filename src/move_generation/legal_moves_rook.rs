//! Rook move generation.
//!
//! Emits rook moves for the side to move from one square, honoring a pin by
//! restricting the rook to the pin line.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinMap;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_rays::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move(), PieceKind::Rook);
    push_sliding_moves(game_state, from, piece, &ROOK_DIRECTIONS, pins, out);
}
