//! King move generation, including castling.
//!
//! The king does not use the pin lookup. Each step is tried on a scratch
//! board and kept only if the check scan from the new square comes back
//! clean; castling is gated separately on rights, empty squares and attacks.

use crate::game_state::chess_rules::{king_home, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{check_for_pins_and_checks, is_square_attacked};
use crate::move_generation::legal_move_shared::is_open_for;
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let piece = Piece::new(side, PieceKind::King);

    for to in king_targets(from) {
        if !is_open_for(board, to, side) {
            continue;
        }
        let mut scratch = *board;
        scratch[from] = None;
        scratch[to] = Some(piece);
        if !check_for_pins_and_checks(&scratch, to, side).in_check {
            out.push(ChessMove::new(from, to, piece, board, MoveKind::Normal));
        }
    }
}

/// Castling moves for the side to move. Requires the right, an empty path
/// between king and rook, and no attack on the king's start, transit or
/// landing square.
pub fn generate_castle_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move();
    if from != king_home(side) {
        return;
    }

    let board = game_state.board();
    let enemy = side.opposite();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let row = from.row;
    let piece = Piece::new(side, PieceKind::King);

    let wings = [
        (kingside_right(side), KINGSIDE_ROOK_COL, 1i8),
        (queenside_right(side), QUEENSIDE_ROOK_COL, -1i8),
    ];
    for (right, rook_col, step) in wings {
        if !game_state.has_castling_right(right) {
            continue;
        }
        if !matches!(board[Square::new(row, rook_col)], Some(p) if p.is(side, PieceKind::Rook)) {
            continue;
        }

        let (low, high) = if rook_col > from.col { (from.col + 1, rook_col) } else { (rook_col + 1, from.col) };
        let path_clear = (low..high).all(|col| board.is_empty_at(Square::new(row, col)));
        if !path_clear {
            continue;
        }

        let transit = [from.offset((0, step), 1), from.offset((0, step), 2)];
        let safe = transit
            .into_iter()
            .flatten()
            .all(|sq| !is_square_attacked(board, sq, enemy));
        if !safe {
            continue;
        }

        if let Some(to) = from.offset((0, step), 2) {
            out.push(ChessMove::new(from, to, piece, board, MoveKind::Castle));
        }
    }
}
