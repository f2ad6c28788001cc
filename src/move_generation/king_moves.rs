//! King move generation.
//!
//! Single-step translations in the queen's eight directions, plus castling
//! candidates. Castling is offered whenever the side still holds the
//! corresponding right and the squares between king and rook are empty;
//! whether the king is in check, passes through check, or lands in check is
//! deliberately not tested here. That legality is enforced after the move
//! is tentatively applied, by the self-check test in
//! [`Position::try_apply_move`](crate::board::position::Position::try_apply_move).

use std::collections::HashSet;

use crate::board::chess_move::ChessMove;
use crate::board::chess_rules::{
    CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
    FIRST_ROW_BLACK, FIRST_ROW_WHITE, KINGSIDE_CASTLED_KING_COLUMN, QUEEN_DIRECTIONS_KING_STEPS,
    QUEENSIDE_CASTLED_KING_COLUMN,
};
use crate::board::coordinate::Coordinate;
use crate::board::piece::{Color, Piece};
use crate::board::position::Position;
use crate::move_generation::ray_moves::generate_step_moves;

pub fn generate_king_moves(
    position: &Position,
    from: Coordinate,
    piece: Piece,
    out: &mut HashSet<ChessMove>,
) {
    generate_step_moves(position, from, piece, &QUEEN_DIRECTIONS_KING_STEPS, out);

    let (row, kingside_right, queenside_right) = match piece.color {
        Color::White => (FIRST_ROW_WHITE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
        Color::Black => (FIRST_ROW_BLACK, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
    };

    if position.has_castling_right(kingside_right)
        && squares_empty(position, row, &[5, 6])
    {
        out.insert(ChessMove::kingside_castle(
            from,
            Coordinate::new(row, KINGSIDE_CASTLED_KING_COLUMN),
        ));
    }
    if position.has_castling_right(queenside_right)
        && squares_empty(position, row, &[1, 2, 3])
    {
        out.insert(ChessMove::queenside_castle(
            from,
            Coordinate::new(row, QUEENSIDE_CASTLED_KING_COLUMN),
        ));
    }
}

fn squares_empty(position: &Position, row: i8, columns: &[i8]) -> bool {
    columns
        .iter()
        .all(|&column| position.get_piece_at(Coordinate::new(row, column)).is_none())
}
