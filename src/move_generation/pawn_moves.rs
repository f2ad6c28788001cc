//! Pawn move generation.
//!
//! Pawns advance toward the opponent's back rank: a single push onto an
//! empty square, a double push from the home row when both squares are
//! empty, and diagonal captures against enemy pieces or the en-passant
//! target. Any move landing on the farthest rank is flagged as a promotion
//! to queen (under-promotion is not modeled).

use std::collections::HashSet;

use crate::board::chess_move::ChessMove;
use crate::board::coordinate::Coordinate;
use crate::board::piece::{Color, Piece};
use crate::board::position::Position;

pub fn generate_pawn_moves(
    position: &Position,
    from: Coordinate,
    piece: Piece,
    out: &mut HashSet<ChessMove>,
) {
    let (direction, home_row, last_row) = match piece.color {
        Color::White => (1i8, 1i8, 7i8),
        Color::Black => (-1i8, 6i8, 0i8),
    };

    // Forward pushes. The double push is only reachable while the single
    // push square is also empty.
    let forward_allowed = if from.row == home_row { 2 } else { 1 };
    for moved in 1..=forward_allowed {
        let target = from.offset(moved * direction, 0);
        if !target.is_on_board() || position.get_piece_at(target).is_some() {
            break;
        }
        out.insert(ChessMove::translation(
            from,
            target,
            piece.kind,
            false,
            target.row == last_row,
        ));
    }

    // Diagonal captures, kingside and queenside.
    for d_column in [1i8, -1i8] {
        let target = from.offset(direction, d_column);
        if !target.is_on_board() {
            continue;
        }
        let is_promotion = target.row == last_row;
        if let Some(occupant) = position.get_piece_at(target) {
            if occupant.color != piece.color {
                out.insert(ChessMove::translation(from, target, piece.kind, true, is_promotion));
            }
        }
        if position.en_passant_target() == Some(target) {
            out.insert(ChessMove::translation(from, target, piece.kind, true, is_promotion));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceKind;

    fn moves_from(position: &Position, row: i8, column: i8) -> HashSet<ChessMove> {
        position.get_possible_moves(Coordinate::new(row, column))
    }

    #[test]
    fn home_row_pawn_has_single_and_double_push() {
        let position = Position::new_game();
        let moves = moves_from(&position, 1, 4);

        let from = Coordinate::new(1, 4);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&ChessMove::quiet(from, Coordinate::new(2, 4), PieceKind::Pawn)));
        assert!(moves.contains(&ChessMove::quiet(from, Coordinate::new(3, 4), PieceKind::Pawn)));
    }

    #[test]
    fn double_push_cannot_jump_over_a_piece() {
        // White knight parked on e3 blocks the e2 pawn completely.
        let position =
            Position::from_notation("rnbqkbnr/pppppppp/8/8/8/4N3/PPPPPPPP/RNBQKB1R w KQkq - 0 1", "")
                .expect("FEN should parse");
        assert!(moves_from(&position, 1, 4).is_empty());
    }

    #[test]
    fn en_passant_target_is_a_capture() {
        // Black just played d7-d5 past the white pawn on e5, so the d6
        // square is capturable in passing.
        let position = Position::from_notation(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            "d7-d5",
        )
        .expect("FEN should parse");

        let from = Coordinate::new(4, 4);
        let en_passant = ChessMove::translation(
            from,
            Coordinate::new(5, 3),
            PieceKind::Pawn,
            true,
            false,
        );
        assert!(moves_from(&position, 4, 4).contains(&en_passant));
    }

    #[test]
    fn seventh_row_push_is_flagged_as_promotion() {
        let position = Position::from_notation("8/4P3/8/8/8/8/k7/4K3 w - - 0 1", "")
            .expect("FEN should parse");
        let moves = moves_from(&position, 6, 4);

        assert_eq!(moves.len(), 1);
        let push = moves.iter().next().expect("one pawn move");
        assert!(push.is_promotion_to_queen);
        assert!(!push.is_capture);
        assert_eq!(push.to, Coordinate::new(7, 4));
    }

    #[test]
    fn diagonal_capture_onto_last_rank_is_also_promotion() {
        // White pawn e7 can capture the black rook on d8.
        let position = Position::from_notation("3r4/4P3/8/8/8/8/k7/4K3 w - - 0 1", "")
            .expect("FEN should parse");
        let capture = ChessMove::translation(
            Coordinate::new(6, 4),
            Coordinate::new(7, 3),
            PieceKind::Pawn,
            true,
            true,
        );
        assert!(moves_from(&position, 6, 4).contains(&capture));
    }
}
