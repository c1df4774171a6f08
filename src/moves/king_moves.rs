//! King step geometry.
//!
//! The king never slides, so its targets are the on-board neighbours of its
//! square. Castling destinations are generated separately by the king
//! generator.

use crate::game_state::chess_types::{Direction, Square};

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |offset| square.offset(offset, 1))
}
