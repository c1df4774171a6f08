//! Text board diagrams for fixtures.
//!
//! A diagram is 8 non-blank lines from rank 8 down to rank 1, one character
//! per square: `PNBRQK` for light, `pnbrqk` for dark, `.` for empty.
//! Whitespace inside a line is ignored.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

pub fn board_from_diagram(diagram: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<Vec<char>> = diagram
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    if rows.len() != 8 {
        return Err(ChessErrors::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != 8 {
            return Err(ChessErrors::WrongRowWidth { row, got: cells.len() });
        }
        for (col, cell) in cells.iter().enumerate() {
            board[Square::new(row as u8, col as u8)] = parse_cell(*cell)?;
        }
    }
    Ok(board)
}

/// Builds a position from a diagram. Both kings must be present exactly once;
/// castling rights without their king and rook at home are dropped.
pub fn game_state_from_diagram(
    diagram: &str,
    side_to_move: Color,
    castling_rights: CastlingRights,
) -> Result<GameState, ChessErrors> {
    let board = board_from_diagram(diagram)?;

    for color in [Color::Light, Color::Dark] {
        let kings = board
            .pieces()
            .filter(|(_, piece)| piece.is(color, PieceKind::King))
            .count();
        match kings {
            0 => return Err(ChessErrors::MissingKing(color)),
            1 => {}
            _ => return Err(ChessErrors::DuplicateKing(color)),
        }
    }

    let mut game_state = GameState::new_empty();
    for (square, piece) in board.pieces() {
        game_state.set_piece(square, Some(piece));
    }
    game_state.set_side_to_move(side_to_move);
    game_state.set_castling_rights(castling_rights);
    Ok(game_state)
}

fn parse_cell(cell: char) -> Result<Option<Piece>, ChessErrors> {
    if cell == '.' {
        return Ok(None);
    }
    let kind = PieceKind::from_letter(cell).ok_or(ChessErrors::InvalidPieceChar(cell))?;
    let color = if cell.is_ascii_uppercase() { Color::Light } else { Color::Dark };
    Ok(Some(Piece::new(color, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;

    const START: &str = "
        rnbqkbnr
        pppppppp
        . . . . . . . .
        ........
        ........
        ........
        PPPPPPPP
        RNBQKBNR
    ";

    #[test]
    fn starting_diagram_matches_starting_board() {
        assert_eq!(board_from_diagram(START), Ok(starting_board()));
        let game = game_state_from_diagram(START, Color::Light, CASTLE_ALL).expect("diagram should parse");
        assert_eq!(game.castling_rights(), CASTLE_ALL);
        assert_eq!(game.king_square(Color::Dark), Some(Square::new(0, 4)));
    }

    #[test]
    fn malformed_diagrams_are_rejected() {
        assert_eq!(board_from_diagram("........"), Err(ChessErrors::WrongRowCount(1)));
        let short_row = START.replacen("RNBQKBNR", "RNBQKBN", 1);
        assert_eq!(
            board_from_diagram(&short_row),
            Err(ChessErrors::WrongRowWidth { row: 7, got: 7 })
        );
        let bad_char = START.replacen("RNBQKBNR", "RNBQKBNX", 1);
        assert_eq!(board_from_diagram(&bad_char), Err(ChessErrors::InvalidPieceChar('X')));
    }

    #[test]
    fn kings_are_required_once() {
        let no_dark_king = START.replacen("rnbqkbnr", "rnbq.bnr", 1);
        assert_eq!(
            game_state_from_diagram(&no_dark_king, Color::Light, 0).map(|_| ()),
            Err(ChessErrors::MissingKing(Color::Dark))
        );
        let two_light_kings = START.replacen("RNBQKBNR", "RNBKKBNR", 1);
        assert_eq!(
            game_state_from_diagram(&two_light_kings, Color::Light, 0).map(|_| ()),
            Err(ChessErrors::DuplicateKing(Color::Light))
        );
    }
}
