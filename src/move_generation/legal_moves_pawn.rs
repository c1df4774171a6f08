//! Pawn move generation: single and double advances, diagonal captures,
//! en passant, and derived promotion flags.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, PinMap};
use crate::moves::chess_move::{ChessMove, MoveKind};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let piece = Piece::new(side, PieceKind::Pawn);
    let forward = side.pawn_direction();

    let advance = (forward, 0);
    if pins.allows(from, advance) {
        if let Some(one_step) = from.offset(advance, 1).filter(|sq| board.is_empty_at(*sq)) {
            out.push(ChessMove::new(from, one_step, piece, board, MoveKind::Normal));

            if from.row == side.pawn_home_row() {
                if let Some(two_step) = from.offset(advance, 2).filter(|sq| board.is_empty_at(*sq)) {
                    out.push(ChessMove::new(from, two_step, piece, board, MoveKind::Normal));
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let capture = (forward, col_delta);
        if !pins.allows(from, capture) {
            continue;
        }
        let Some(to) = from.offset(capture, 1) else {
            continue;
        };

        match board.color_at(to) {
            Some(color) if color != side => {
                out.push(ChessMove::new(from, to, piece, board, MoveKind::Normal));
            }
            None if game_state.en_passant_square() == Some(to) => {
                let mv = ChessMove::new(from, to, piece, board, MoveKind::EnPassant);
                if en_passant_keeps_king_safe(game_state, &mv) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// Replays the capture on a scratch board. Two pawns leave the same row at
/// once, which the pin scan cannot see.
fn en_passant_keeps_king_safe(game_state: &GameState, mv: &ChessMove) -> bool {
    let captured_square = mv.en_passant_capture_square();
    if game_state.piece_at(captured_square) != mv.piece_captured {
        return false;
    }

    let side = mv.piece_moved.color;
    let Some(king) = game_state.king_square(side) else {
        return true;
    };

    let mut scratch = *game_state.board();
    scratch[mv.start] = None;
    scratch[captured_square] = None;
    scratch[mv.end] = Some(mv.piece_moved);
    !is_square_attacked(&scratch, king, side.opposite())
}
