//! Helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinMap;
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::moves::sliding_rays::ray;

/// Sliding moves from `from` along each of `directions`, stopping at the first
/// occupied square (included when it holds an enemy). Directions off a pin
/// line are skipped entirely.
pub fn push_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pins: &PinMap,
    out: &mut Vec<ChessMove>,
) {
    let board = game_state.board();
    for &direction in directions {
        if !pins.allows(from, direction) {
            continue;
        }
        for to in ray(from, direction) {
            match board.color_at(to) {
                None => out.push(ChessMove::new(from, to, piece, board, MoveKind::Normal)),
                Some(color) if color != piece.color => {
                    out.push(ChessMove::new(from, to, piece, board, MoveKind::Normal));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Empty or enemy-occupied.
#[inline]
pub fn is_open_for(board: &Board, square: Square, mover: Color) -> bool {
    board.color_at(square) != Some(mover)
}
