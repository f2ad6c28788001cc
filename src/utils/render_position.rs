//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from a position's grid for debugging,
//! tests, and diagnostics in text environments.

use crate::board::coordinate::Coordinate;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::position::Position;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top and file 'a' on the left.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for column in 0..8 {
            match position.get_piece_at(Coordinate::new(row, column)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
