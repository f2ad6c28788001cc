//! The per-square grid of pseudo-legal move sets.
//!
//! Every constructed position owns one 8×8 grid mapping each square to the
//! set of moves its piece could make. Squares that are empty, or hold a
//! piece of the side not on turn, map to empty sets. The grid is rebuilt in
//! full on every transition; moves found here are pseudo-legal, so they may
//! still leave the mover's own king capturable, which is ruled out later by
//! the self-check test.

use std::collections::HashSet;

use crate::board::chess_move::ChessMove;
use crate::board::chess_rules::{
    BISHOP_DIRECTIONS, KNIGHT_JUMPS, QUEEN_DIRECTIONS_KING_STEPS, ROOK_DIRECTIONS,
};
use crate::board::coordinate::Coordinate;
use crate::board::piece::PieceKind;
use crate::board::position::Position;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::ray_moves::{generate_sliding_moves, generate_step_moves};

pub type MoveGrid = [[HashSet<ChessMove>; 8]; 8];

/// An all-empty grid, used while a position is still being assembled.
pub fn empty_move_grid() -> MoveGrid {
    std::array::from_fn(|_| std::array::from_fn(|_| HashSet::new()))
}

/// Rebuild the full grid for `position`.
pub fn generate_move_grid(position: &Position) -> MoveGrid {
    std::array::from_fn(|row| {
        std::array::from_fn(|column| {
            generate_moves_for_square(position, Coordinate::new(row as i8, column as i8))
        })
    })
}

/// Pseudo-legal moves for the piece on one square.
pub fn generate_moves_for_square(position: &Position, from: Coordinate) -> HashSet<ChessMove> {
    let mut out = HashSet::new();
    let Some(piece) = position.get_piece_at(from) else {
        return out;
    };
    if piece.color != position.turn_color() {
        return out;
    }

    match piece.kind {
        PieceKind::Rook => {
            generate_sliding_moves(position, from, piece, &ROOK_DIRECTIONS, &mut out)
        }
        PieceKind::Bishop => {
            generate_sliding_moves(position, from, piece, &BISHOP_DIRECTIONS, &mut out)
        }
        PieceKind::Queen => {
            generate_sliding_moves(position, from, piece, &QUEEN_DIRECTIONS_KING_STEPS, &mut out)
        }
        PieceKind::Knight => generate_step_moves(position, from, piece, &KNIGHT_JUMPS, &mut out),
        PieceKind::King => generate_king_moves(position, from, piece, &mut out),
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, &mut out),
    }

    out
}
