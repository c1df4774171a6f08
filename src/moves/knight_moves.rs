use crate::game_state::chess_types::{Direction, Square};

/// The eight `(±1, ±2)` / `(±2, ±1)` knight jumps.
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight destinations from `square`, paired with the jump used.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = (Square, Direction)> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |offset| square.offset(offset, 1).map(|to| (to, offset)))
}
