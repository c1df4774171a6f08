//! Coordinate move text (`e2e4`, `e7e8q`) in and out.
//!
//! Input is never trusted: parsed squares are matched against the legal move
//! list, and only a matching move is played.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::{ChessMove, MoveKind};
use crate::utils::algebraic::algebraic_to_square;

/// Parsed coordinate move before it is matched against the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(long_algebraic: &str) -> Result<CoordinateMove, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidMoveText(long_algebraic.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(CoordinateMove { start, end, promotion })
}

/// Finds the legal move matching `long_algebraic` in `game_state`.
pub fn find_legal_move(
    game_state: &GameState,
    long_algebraic: &str,
) -> Result<(ChessMove, Option<PieceKind>), ChessErrors> {
    let parsed = parse_long_algebraic(long_algebraic)?;
    let illegal = || ChessErrors::IllegalMove(long_algebraic.trim().to_owned());

    let piece = game_state.piece_at(parsed.start).ok_or_else(illegal)?;
    let candidate = ChessMove::new(parsed.start, parsed.end, piece, game_state.board(), MoveKind::Normal);
    let mv = game_state
        .legal_moves()
        .into_iter()
        .find(|mv| *mv == candidate)
        .ok_or_else(illegal)?;

    if parsed.promotion.is_some() && !mv.is_pawn_promotion {
        return Err(ChessErrors::InvalidMoveText(long_algebraic.to_owned()));
    }
    Ok((mv, parsed.promotion))
}

impl GameState {
    /// Plays a coordinate move if it is legal. The position is untouched on
    /// error.
    pub fn play_long_algebraic(&mut self, long_algebraic: &str) -> Result<ChessMove, ChessErrors> {
        let (mv, promotion) = find_legal_move(self, long_algebraic)?;
        self.make_move_with_promotion(mv, promotion.unwrap_or(PieceKind::Queen));
        Ok(mv)
    }

    /// The move log in coordinate notation, promotion letter included.
    pub fn move_log_long_algebraic(&self) -> Vec<String> {
        self.history().iter().map(undo_state_to_long_algebraic).collect()
    }
}

pub fn undo_state_to_long_algebraic(undo: &UndoState) -> String {
    let mut out = undo.mv.chess_notation();
    if let Some(kind) = undo.promoted_to {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    PieceKind::from_letter(ch)
        .filter(|kind| PROMOTION_KINDS.contains(kind))
        .ok_or(ChessErrors::InvalidPromotionPiece(ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_diagram::game_state_from_diagram;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let plain = parse_long_algebraic("e2e4").expect("move should parse");
        assert_eq!(plain.start, Square::new(6, 4));
        assert_eq!(plain.end, Square::new(4, 4));
        assert_eq!(plain.promotion, None);

        let promo = parse_long_algebraic("a7a8n").expect("move should parse");
        assert_eq!(promo.promotion, Some(PieceKind::Knight));

        assert_eq!(parse_long_algebraic("a7a8k"), Err(ChessErrors::InvalidPromotionPiece('k')));
        assert!(parse_long_algebraic("e2").is_err());
        assert!(parse_long_algebraic("z2e4").is_err());
    }

    #[test]
    fn plays_legal_moves_and_rejects_others() {
        let mut game = GameState::new_game();
        game.play_long_algebraic("e2e4").expect("e2e4 is legal");
        assert_eq!(game.side_to_move(), Color::Dark);

        let before = *game.board();
        assert_eq!(
            game.play_long_algebraic("e7e4"),
            Err(ChessErrors::IllegalMove("e7e4".to_owned()))
        );
        assert_eq!(
            game.play_long_algebraic("e4e5"),
            Err(ChessErrors::IllegalMove("e4e5".to_owned()))
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.move_log().len(), 1);
    }

    #[test]
    fn promotion_choice_reaches_the_board_and_the_log() {
        let mut game = game_state_from_diagram(
            "....k...
             .P......
             ........
             ........
             ........
             ........
             ........
             ....K...",
            Color::Light,
            0,
        )
        .expect("diagram should parse");
        game.play_long_algebraic("b7b8r").expect("promotion is legal");
        assert_eq!(game.piece_at(Square::new(0, 1)), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(game.move_log_long_algebraic(), vec!["b7b8r"]);
    }

    #[test]
    fn promotion_letter_on_ordinary_move_is_rejected() {
        let mut game = GameState::new_game();
        assert_eq!(
            game.play_long_algebraic("e2e4q"),
            Err(ChessErrors::InvalidMoveText("e2e4q".to_owned()))
        );
        assert_eq!(game.move_log().len(), 0);
    }
}
