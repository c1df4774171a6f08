//! Ray directions and a bounds-checked ray walker for sliding pieces.

use crate::game_state::chess_types::{Direction, Square};

pub const ROOK_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first (indices 0..4), then diagonals (4..8).
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[inline]
pub fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

#[inline]
pub const fn reverse(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}

/// Squares from `from` (exclusive) to the board edge along `direction`.
#[inline]
pub fn ray(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    (1..8).map_while(move |step| from.offset(direction, step))
}
