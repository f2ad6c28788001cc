//! FEN-to-position parsing.
//!
//! Splits a Forsyth-Edwards Notation string into its six fields and
//! validates each strictly: any wrong rank/file count, unrecognized
//! character, bad color token, rights-granting-nothing castling field,
//! malformed en-passant square, or non-integer clock fails the whole parse.
//! The result is a plain field record; the caller assembles the `Position`
//! and recomputes its move grid.

use crate::board::chess_rules::{
    CastlingRights, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::board::coordinate::Coordinate;
use crate::board::piece::{Color, Piece};
use crate::board::position::BoardGrid;
use crate::errors::StateError;

/// The six parsed FEN fields, before move-grid computation.
#[derive(Debug)]
pub struct FenFields {
    pub grid: BoardGrid,
    pub turn_color: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Coordinate>,
    pub half_move: u16,
    pub full_move: u16,
}

pub fn parse_fen(fen: &str) -> Result<FenFields, StateError> {
    let sections: Vec<&str> = fen.split_whitespace().collect();
    if sections.len() != 6 {
        return Err(StateError::invalid_fen(
            fen,
            format!("has {} sections instead of 6", sections.len()),
        ));
    }

    let grid = parse_board(sections[0], fen)?;
    let turn_color = parse_turn_color(sections[1], fen)?;
    let castling_rights = parse_castling_rights(sections[2], fen)?;
    let en_passant_target = parse_en_passant_target(sections[3], fen)?;
    let half_move = sections[4].parse::<u16>().map_err(|_| {
        StateError::invalid_fen(fen, format!("half move '{}' must be an integer", sections[4]))
    })?;
    let full_move = sections[5].parse::<u16>().map_err(|_| {
        StateError::invalid_fen(fen, format!("full move '{}' must be an integer", sections[5]))
    })?;

    Ok(FenFields {
        grid,
        turn_color,
        castling_rights,
        en_passant_target,
        half_move,
        full_move,
    })
}

/// Walk the 8 ranks from rank 8 down to rank 1, left to right within each.
fn parse_board(board_section: &str, fen: &str) -> Result<BoardGrid, StateError> {
    let ranks: Vec<&str> = board_section.split('/').collect();
    if ranks.len() != 8 {
        return Err(StateError::invalid_fen(
            fen,
            format!("piece placement has {} ranks instead of 8", ranks.len()),
        ));
    }

    let mut grid: BoardGrid = [[None; 8]; 8];
    for (fen_rank_index, rank_text) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_index;
        let mut column = 0usize;

        for ch in rank_text.chars() {
            if let Some(skipped) = ch.to_digit(10) {
                if !(1..=8).contains(&skipped) {
                    return Err(StateError::invalid_fen(
                        fen,
                        format!("invalid empty-square count '{ch}'"),
                    ));
                }
                column += skipped as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                StateError::invalid_fen(fen, format!("invalid character '{ch}' in piece placement"))
            })?;
            if column > 7 {
                return Err(StateError::invalid_fen(fen, "more than 8 files in a rank"));
            }
            grid[row][column] = Some(piece);
            column += 1;
        }

        if column != 8 {
            return Err(StateError::invalid_fen(
                fen,
                "rank does not describe exactly 8 files",
            ));
        }
    }

    Ok(grid)
}

fn parse_turn_color(section: &str, fen: &str) -> Result<Color, StateError> {
    match section {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(StateError::invalid_fen(
            fen,
            format!("has color '{other}' instead of 'w' or 'b'"),
        )),
    }
}

fn parse_castling_rights(section: &str, fen: &str) -> Result<CastlingRights, StateError> {
    if section == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in section.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(StateError::invalid_fen(
                    fen,
                    format!("invalid castling rights character '{ch}'"),
                ))
            }
        }
    }
    // A non-"-" field must actually grant something.
    if rights == 0 {
        return Err(StateError::invalid_fen(fen, "castling section grants no rights"));
    }

    Ok(rights)
}

fn parse_en_passant_target(section: &str, fen: &str) -> Result<Option<Coordinate>, StateError> {
    if section == "-" {
        return Ok(None);
    }

    let bytes = section.as_bytes();
    if bytes.len() != 2 {
        return Err(StateError::invalid_fen(fen, "en-passant target is not 2 characters"));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(StateError::invalid_fen(fen, "invalid en-passant target"));
    }

    Ok(Some(Coordinate::new(
        (rank - b'1') as i8,
        (file - b'a') as i8,
    )))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::board::chess_rules::{CASTLE_ALL, CASTLE_WHITE_KINGSIDE, STARTING_POSITION_FEN};
    use crate::board::coordinate::Coordinate;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::errors::StateError;

    fn reason_of(error: StateError) -> String {
        match error {
            StateError::InvalidFen { reason, .. } => reason,
            other => panic!("expected InvalidFen, got {other:?}"),
        }
    }

    #[test]
    fn parses_the_starting_position() {
        let fields = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(fields.turn_color, Color::White);
        assert_eq!(fields.castling_rights, CASTLE_ALL);
        assert_eq!(fields.en_passant_target, None);
        assert_eq!(fields.half_move, 0);
        assert_eq!(fields.full_move, 1);
        assert_eq!(
            fields.grid[0][4],
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            fields.grid[7][3],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(fields.grid[3][3], None);
    }

    #[test]
    fn parses_en_passant_target_as_rank_and_file() {
        let fields = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        // d6: row 5 (rank 6), column 3 (file d).
        assert_eq!(fields.en_passant_target, Some(Coordinate::new(5, 3)));
    }

    #[test]
    fn rejects_wrong_section_count() {
        let error = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0")
            .expect_err("five sections must fail");
        assert!(reason_of(error).contains("5 sections"));

        let error = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra")
            .expect_err("seven sections must fail");
        assert!(reason_of(error).contains("7 sections"));
    }

    #[test]
    fn rejects_bad_color_token() {
        let error = parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").expect_err("color 'x' must fail");
        assert!(reason_of(error).contains("'x'"));
    }

    #[test]
    fn rejects_placement_with_short_rank() {
        let error =
            parse_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").expect_err("");
        assert!(reason_of(error).contains("8 files"));
    }

    #[test]
    fn rejects_placement_with_too_many_ranks() {
        let error = parse_fen("8/8/8/8/8/8/8/8/8 w - - 0 1").expect_err("");
        assert!(reason_of(error).contains("9 ranks"));
    }

    #[test]
    fn rejects_zero_as_empty_square_count() {
        let error = parse_fen("rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect_err("digit 0 must fail");
        assert!(reason_of(error).contains("'0'"));
    }

    #[test]
    fn rejects_unknown_placement_character() {
        let error = parse_fen("rnbqkbnr/ppppXppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect_err("'X' must fail");
        assert!(reason_of(error).contains("'X'"));
    }

    #[test]
    fn rejects_castling_section_with_unknown_letter() {
        let error = parse_fen("8/8/8/8/8/8/8/8 w Kx - 0 1").expect_err("");
        assert!(reason_of(error).contains("castling"));
    }

    #[test]
    fn accepts_partial_castling_rights() {
        let fields = parse_fen("8/8/8/8/8/8/8/8 w K - 0 1").expect("FEN should parse");
        assert_eq!(fields.castling_rights, CASTLE_WHITE_KINGSIDE);
    }

    #[test]
    fn rejects_malformed_en_passant_targets() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - e 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - e9 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - i3 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - e33 0 1").is_err());
    }

    #[test]
    fn rejects_non_integer_clocks() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - x 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 one").is_err());
    }
}
