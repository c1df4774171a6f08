//! Random legal-move playouts.
//!
//! Plays uniformly random legal moves from a position until checkmate,
//! stalemate or a ply cap, with an optional seed for reproducible games.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: Option<u64>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub moves_played: Vec<ChessMove>,
}

/// Plays random moves on `game_state` in place. The moves stay in its log,
/// so the caller can walk them back with `undo_move`.
pub fn random_playout(game_state: &mut GameState, config: &PlayoutConfig) -> PlayoutResult {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    random_playout_with_rng(game_state, config.max_plies, &mut rng)
}

pub fn random_playout_with_rng(game_state: &mut GameState, max_plies: u16, rng: &mut StdRng) -> PlayoutResult {
    let mut moves_played = Vec::new();

    let outcome = loop {
        let legal_moves = game_state.get_valid_moves();
        let Some(mv) = legal_moves.as_slice().choose(rng).copied() else {
            let in_check = game_state.last_check_state().is_some_and(|state| state.in_check);
            break match (in_check, game_state.side_to_move()) {
                (true, Color::Light) => PlayoutOutcome::DarkWinCheckmate,
                (true, Color::Dark) => PlayoutOutcome::LightWinCheckmate,
                (false, _) => PlayoutOutcome::DrawStalemate,
            };
        };
        if moves_played.len() >= max_plies as usize {
            break PlayoutOutcome::MaxPlies;
        }

        game_state.make_move(mv);
        moves_played.push(mv);
    };

    debug!(?outcome, plies = moves_played.len(), "random playout finished");
    PlayoutResult {
        outcome,
        moves_played,
    }
}
