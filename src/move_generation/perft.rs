//! Perft node counting over make/undo.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf statistics.
//! A promotion is one leaf per destination square since the piece choice is
//! made when the move is played.

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts the leaves `depth` plies below `game_state`. The position is
/// restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let (moves, _) = generate_legal_moves(game_state);
    for mv in moves {
        perft_recurse(game_state, mv, depth, &mut total);
    }
    total
}

/// Per-root-move subtotals, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    let (moves, _) = generate_legal_moves(game_state);
    let mut divide = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut counts = PerftCounts::default();
        perft_recurse(game_state, mv, depth, &mut counts);
        debug!(mv = %mv, nodes = counts.nodes, "perft divide");
        divide.push((mv, counts));
    }
    divide
}

fn perft_recurse(game_state: &mut GameState, mv: ChessMove, depth: u8, counts: &mut PerftCounts) {
    game_state.make_move(mv);

    if depth == 1 {
        count_leaf(game_state, &mv, counts);
    } else {
        let (moves, _) = generate_legal_moves(game_state);
        for child in moves {
            perft_recurse(game_state, child, depth - 1, counts);
        }
    }

    game_state.undo_move();
}

fn count_leaf(game_state: &GameState, mv: &ChessMove, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant_move {
        counts.en_passant += 1;
    }
    if mv.is_castle_move {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion {
        counts.promotions += 1;
    }

    if game_state.fresh_check_state().in_check {
        counts.checks += 1;
        if generate_legal_moves(game_state).0.is_empty() {
            counts.checkmates += 1;
        }
    }
}
