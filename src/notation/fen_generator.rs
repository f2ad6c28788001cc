//! Position-to-FEN production.
//!
//! Inverse of the parser: ranks are emitted 8 down to 1 with empty squares
//! run-length encoded, then the turn color, castling letters (or `-`), the
//! en-passant square (or `-`), and the two clocks.

use crate::board::chess_rules::{
    CastlingRights, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::board::coordinate::Coordinate;
use crate::board::piece::Color;
use crate::board::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let turn = match position.turn_color() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = generate_en_passant_field(position.en_passant_target());

    format!(
        "{} {} {} {} {} {}",
        board,
        turn,
        castling,
        en_passant,
        position.half_move(),
        position.full_move()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut repeated_empty_squares = 0u8;

        for column in 0..8 {
            match position.get_piece_at(Coordinate::new(row, column)) {
                Some(piece) => {
                    if repeated_empty_squares > 0 {
                        out.push(char::from(b'0' + repeated_empty_squares));
                        repeated_empty_squares = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => repeated_empty_squares += 1,
            }
        }

        if repeated_empty_squares > 0 {
            out.push(char::from(b'0' + repeated_empty_squares));
        }
        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(target: Option<Coordinate>) -> String {
    match target {
        Some(coordinate) => coordinate.to_string(),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::board::chess_rules::{
        CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, STARTING_POSITION_FEN,
    };
    use crate::board::piece::Color;
    use crate::board::position::Position;

    #[test]
    fn round_trip_starting_position_fen() {
        let position =
            Position::from_notation(STARTING_POSITION_FEN, "").expect("starting FEN should parse");
        assert_eq!(generate_fen(&position), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let position = Position::from_notation(fen, "").expect("custom FEN should parse");

        assert_eq!(generate_fen(&position), fen);
        assert_eq!(position.turn_color(), Color::Black);
        assert_eq!(
            position.castling_rights(),
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn en_passant_square_is_rendered_in_file_rank_form() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let position = Position::from_notation(fen, "").expect("FEN should parse");
        assert_eq!(generate_fen(&position), fen);
    }
}
