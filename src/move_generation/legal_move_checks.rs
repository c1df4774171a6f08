//! Pin and check detection by ray-casting outward from a king.
//!
//! Everything here is a pure function of a [`Board`]; nothing touches the live
//! `GameState`, so generators can probe hypothetical boards freely.

use crate::game_state::chess_types::*;
use crate::moves::knight_moves::knight_targets;
use crate::moves::sliding_rays::{is_orthogonal, ray, reverse, ALL_DIRECTIONS};

/// A friendly piece that may only move along `direction` (king-outward) or
/// its reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the king. `direction` points from the king
/// toward the attacker (the jump offset for knights).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckState {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckState {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }

    pub fn pin_map(&self) -> PinMap {
        PinMap::from_pins(&self.pins)
    }
}

/// Per-square pin lookup, built once per legality pass and read-only after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    directions: [[Option<Direction>; 8]; 8],
}

impl PinMap {
    pub fn empty() -> Self {
        Self {
            directions: [[None; 8]; 8],
        }
    }

    pub fn from_pins(pins: &[Pin]) -> Self {
        let mut map = Self::empty();
        for pin in pins {
            map.directions[pin.square.row as usize][pin.square.col as usize] = Some(pin.direction);
        }
        map
    }

    #[inline]
    pub fn pin_direction(&self, square: Square) -> Option<Direction> {
        self.directions[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.pin_direction(square).is_some()
    }

    /// Whether a piece on `square` may step along the unit `direction`.
    #[inline]
    pub fn allows(&self, square: Square, direction: Direction) -> bool {
        match self.pin_direction(square) {
            None => true,
            Some(pin) => direction == pin || direction == reverse(pin),
        }
    }
}

/// Whether an `attacker`-colored piece of `kind`, found first along the ray
/// `direction` from a target at `distance`, attacks that target.
fn attacks_along_ray(kind: PieceKind, attacker: Color, direction: Direction, distance: usize) -> bool {
    let orthogonal = is_orthogonal(direction);
    match kind {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // The pawn sits one step behind the target from its own point of view.
        PieceKind::Pawn => distance == 1 && !orthogonal && direction.0 == -attacker.pawn_direction(),
        PieceKind::Knight => false,
    }
}

/// Scans the 8 rays and the knight jumps around `king` for pins and checks
/// against `color`.
pub fn check_for_pins_and_checks(board: &Board, king: Square, color: Color) -> CheckState {
    let enemy = color.opposite();
    let mut state = CheckState::default();

    for direction in ALL_DIRECTIONS {
        let mut possible_pin: Option<Square> = None;
        for (step, square) in ray(king, direction).enumerate() {
            let Some(piece) = board[square] else {
                continue;
            };
            if piece.color == color {
                if possible_pin.is_some() {
                    // Second friendly piece: nothing behind it matters.
                    break;
                }
                possible_pin = Some(square);
                continue;
            }
            if attacks_along_ray(piece.kind, enemy, direction, step + 1) {
                match possible_pin {
                    None => {
                        state.in_check = true;
                        state.checks.push(Check { square, direction });
                    }
                    Some(pinned) => state.pins.push(Pin {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    for (square, offset) in knight_targets(king) {
        if matches!(board[square], Some(p) if p.is(enemy, PieceKind::Knight)) {
            state.in_check = true;
            state.checks.push(Check {
                square,
                direction: offset,
            });
        }
    }

    state
}

/// Whether any `attacker` piece attacks `square` on `board`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    for direction in ALL_DIRECTIONS {
        let first = ray(square, direction)
            .enumerate()
            .find_map(|(step, sq)| board[sq].map(|piece| (step + 1, piece)));
        if let Some((distance, piece)) = first {
            if piece.color == attacker && attacks_along_ray(piece.kind, attacker, direction, distance) {
                return true;
            }
        }
    }

    knight_targets(square)
        .any(|(sq, _)| matches!(board[sq], Some(p) if p.is(attacker, PieceKind::Knight)))
}
