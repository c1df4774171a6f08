//! Full legal move generation pipeline.
//!
//! Computes pins and checks from the side to move's king, dispatches to the
//! per-piece generators, then applies check resolution: king moves only under
//! double check, block-or-capture filtering under single check, and the raw
//! pin-aware generation otherwise.

use tracing::{debug, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{Check, CheckState, PinMap};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_rays::ray;

/// Terminal classification of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Legal moves for the side to move together with the pins and checks used
/// to filter them.
pub fn generate_legal_moves(game_state: &GameState) -> (Vec<ChessMove>, CheckState) {
    let check_state = game_state.fresh_check_state();
    let pins = check_state.pin_map();
    let side = game_state.side_to_move();

    let Some(king) = game_state.king_square(side) else {
        return (generate_pseudo_legal_moves(game_state, &pins), check_state);
    };

    let moves = if check_state.is_double_check() {
        trace!(?side, "double check, generating king moves only");
        let mut out = Vec::new();
        generate_king_moves(game_state, king, &mut out);
        out
    } else if let Some(check) = check_state.checks.first() {
        let resolution = check_resolution_squares(game_state.board(), king, check);
        let mut moves = generate_pseudo_legal_moves(game_state, &pins);
        moves.retain(|mv| {
            mv.piece_moved.kind == PieceKind::King
                || resolution.contains(&mv.end)
                || (mv.is_en_passant_move && resolution.contains(&mv.en_passant_capture_square()))
        });
        moves
    } else {
        generate_pseudo_legal_moves(game_state, &pins)
    };

    (moves, check_state)
}

/// Moves obeying piece geometry and pins. King steps are already
/// self-check-safe; other moves may still ignore an existing check.
pub fn generate_pseudo_legal_moves(game_state: &GameState, pins: &PinMap) -> Vec<ChessMove> {
    let side = game_state.side_to_move();
    let mut out = Vec::with_capacity(64);

    for (from, piece) in game_state.board().pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, pins, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, pins, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, pins, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, pins, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, pins, &mut out),
            PieceKind::King => {
                generate_king_moves(game_state, from, &mut out);
                generate_castle_moves(game_state, from, &mut out);
            }
        }
    }

    out
}

/// Squares a non-king move may land on to answer a single check: the
/// attacker's square for knights, otherwise every square from the king up to
/// and including the attacker.
fn check_resolution_squares(board: &Board, king: Square, check: &Check) -> Vec<Square> {
    if matches!(board[check.square], Some(p) if p.kind == PieceKind::Knight) {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    for square in ray(king, check.direction) {
        squares.push(square);
        if square == check.square {
            break;
        }
    }
    squares
}

impl GameState {
    /// Legal moves for the side to move. Refreshes the cached pin/check state.
    pub fn get_valid_moves(&mut self) -> Vec<ChessMove> {
        let (moves, check_state) = generate_legal_moves(self);
        if moves.is_empty() {
            if check_state.in_check {
                debug!(side = ?self.side_to_move, "checkmate");
            } else {
                debug!(side = ?self.side_to_move, "stalemate");
            }
        }
        self.check_state = Some(check_state);
        moves
    }

    /// Legal moves without touching the cache.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        generate_legal_moves(self).0
    }

    pub fn game_status(&self) -> GameStatus {
        let (moves, check_state) = generate_legal_moves(self);
        match (moves.is_empty(), check_state.in_check) {
            (false, _) => GameStatus::Ongoing,
            (true, true) => GameStatus::Checkmate,
            (true, false) => GameStatus::Stalemate,
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.game_status() == GameStatus::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.game_status() == GameStatus::Stalemate
    }
}
