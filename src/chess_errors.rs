//! Errors returned by the text-facing helpers.
//!
//! The engine operations themselves (`get_valid_moves`, `make_move`,
//! `undo_move`) have no failure modes; only parsing square names, coordinate
//! moves and board diagrams can fail.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    #[error("Invalid algebraic square '{0}'")]
    InvalidAlgebraicSquare(String),

    #[error("Invalid coordinate move '{0}'")]
    InvalidMoveText(String),

    #[error("Invalid promotion piece '{0}'")]
    InvalidPromotionPiece(char),

    #[error("Move '{0}' is not legal in the current position")]
    IllegalMove(String),

    #[error("Board diagram must have 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("Board diagram row {row} must have 8 squares, got {got}")]
    WrongRowWidth { row: usize, got: usize },

    #[error("Invalid piece character '{0}' in board diagram")]
    InvalidPieceChar(char),

    #[error("{0:?} king is missing from the board")]
    MissingKing(Color),

    #[error("{0:?} has more than one king on the board")]
    DuplicateKing(Color),
}
