//! Queen move generation: rook and bishop rays from one square.
//!
//! The pin lookup is read-only, so a pinned queen is restricted on both the
//! orthogonal and the diagonal pass.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinMap;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_rays::ALL_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Square, pins: &PinMap, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move(), PieceKind::Queen);
    push_sliding_moves(game_state, from, piece, &ALL_DIRECTIONS, pins, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::{Pin, PinMap};
    use crate::utils::board_diagram::game_state_from_diagram;

    #[test]
    fn diagonally_pinned_queen_stays_on_the_diagonal() {
        let game = game_state_from_diagram(
            "k.......
             ........
             ........
             .b......
             ........
             ...Q....
             ........
             .....K..",
            Color::Light,
            0,
        )
        .expect("diagram should parse");
        let from = Square::new(5, 3);
        let pins = PinMap::from_pins(&[Pin { square: from, direction: (-1, -1) }]);
        let mut out = Vec::new();
        generate_queen_moves(&game, from, &pins, &mut out);
        // e2 toward the king, c4 and b5(x) toward the bishop
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|m| m.end.row as i8 - m.end.col as i8 == 2));
    }

    #[test]
    fn free_queen_in_the_center_covers_27_squares() {
        let game = game_state_from_diagram(
            "k.......
             ........
             ........
             ........
             ...Q....
             ........
             ........
             .......K",
            Color::Light,
            0,
        )
        .expect("diagram should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(4, 3), &PinMap::empty(), &mut out);
        // 14 orthogonal + 13 diagonal
        assert_eq!(out.len(), 27);
    }
}
