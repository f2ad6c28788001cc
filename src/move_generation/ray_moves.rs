//! Shared generation helpers for directional and fixed-step movement.
//!
//! Sliding pieces (rook, bishop, queen) walk each direction one square at a
//! time until they leave the board, capture an enemy piece, or run into a
//! friendly one. Fixed-step pieces (knight jumps, king translations) test
//! each offset exactly once under the same occupancy rules.

use std::collections::HashSet;

use crate::board::chess_move::ChessMove;
use crate::board::coordinate::Coordinate;
use crate::board::piece::Piece;
use crate::board::position::Position;

/// Walk each direction outward from `from`, adding quiet moves on empty
/// squares and a capture on the first enemy piece. A friendly piece stops
/// the ray without adding anything.
pub fn generate_sliding_moves(
    position: &Position,
    from: Coordinate,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut HashSet<ChessMove>,
) {
    for &(d_row, d_column) in directions {
        let mut moved: i8 = 1;
        loop {
            let target = from.offset(moved * d_row, moved * d_column);
            if !target.is_on_board() {
                break;
            }
            match position.get_piece_at(target) {
                None => {
                    out.insert(ChessMove::quiet(from, target, piece.kind));
                }
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.insert(ChessMove::translation(from, target, piece.kind, true, false));
                    }
                    break;
                }
            }
            moved += 1;
        }
    }
}

/// Test each single-step offset from `from` once: empty squares become quiet
/// moves, enemy-occupied squares become captures, friendly pieces block.
pub fn generate_step_moves(
    position: &Position,
    from: Coordinate,
    piece: Piece,
    steps: &[(i8, i8)],
    out: &mut HashSet<ChessMove>,
) {
    for &(d_row, d_column) in steps {
        let target = from.offset(d_row, d_column);
        if !target.is_on_board() {
            continue;
        }
        match position.get_piece_at(target) {
            None => {
                out.insert(ChessMove::quiet(from, target, piece.kind));
            }
            Some(occupant) if occupant.color != piece.color => {
                out.insert(ChessMove::translation(from, target, piece.kind, true, false));
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::{KNIGHT_JUMPS, ROOK_DIRECTIONS};
    use crate::board::piece::{Color, PieceKind};

    #[test]
    fn rook_ray_stops_at_friendly_and_captures_enemy() {
        // White rook a1, white pawn a4, black pawn h1.
        let position = Position::from_notation("4k3/8/8/8/P7/8/8/R3K2r w - - 0 1", "")
            .expect("FEN should parse");
        let from = Coordinate::new(0, 0);
        let rook = Piece::new(Color::White, PieceKind::Rook);

        let mut out = HashSet::new();
        generate_sliding_moves(&position, from, rook, &ROOK_DIRECTIONS, &mut out);

        // Up the a-file: a2, a3, then blocked by the friendly pawn on a4.
        assert!(out.contains(&ChessMove::quiet(from, Coordinate::new(1, 0), PieceKind::Rook)));
        assert!(out.contains(&ChessMove::quiet(from, Coordinate::new(2, 0), PieceKind::Rook)));
        assert!(!out.iter().any(|mv| mv.to == Coordinate::new(3, 0)));

        // Along rank 1: quiet through d1, blocked by own king on e1.
        assert!(out.contains(&ChessMove::quiet(from, Coordinate::new(0, 3), PieceKind::Rook)));
        assert!(!out.iter().any(|mv| mv.to.row == 0 && mv.to.column >= 4));
    }

    #[test]
    fn sliding_capture_ends_the_ray() {
        // White rook a1 faces the black rook on h1 with a clear rank.
        let position =
            Position::from_notation("4k3/8/8/8/8/8/8/R3r2K w - - 0 1", "").expect("FEN should parse");
        let from = Coordinate::new(0, 0);
        let rook = Piece::new(Color::White, PieceKind::Rook);

        let mut out = HashSet::new();
        generate_sliding_moves(&position, from, rook, &ROOK_DIRECTIONS, &mut out);

        let capture =
            ChessMove::translation(from, Coordinate::new(0, 4), PieceKind::Rook, true, false);
        assert!(out.contains(&capture));
        assert!(!out.iter().any(|mv| mv.to.row == 0 && mv.to.column > 4));
    }

    #[test]
    fn knight_jumps_respect_board_edges_and_occupancy() {
        let position = Position::new_game();
        let from = Coordinate::new(0, 1);
        let knight = Piece::new(Color::White, PieceKind::Knight);

        let mut out = HashSet::new();
        generate_step_moves(&position, from, knight, &KNIGHT_JUMPS, &mut out);

        // b1 knight: a3 and c3 only; d2 is occupied by a friendly pawn and
        // the remaining jumps leave the board.
        let targets: HashSet<Coordinate> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(
            targets,
            HashSet::from([Coordinate::new(2, 0), Coordinate::new(2, 2)])
        );
        assert!(out.iter().all(|mv| !mv.is_capture));
    }
}
