//! Piece value types.
//!
//! A square either holds a [`Piece`] (color + kind) or nothing; emptiness is
//! represented by `Option<Piece>` at the board level rather than a dedicated
//! "none" piece.

use serde::{Deserialize, Serialize};

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

impl PieceKind {
    /// Capital letter used in both FEN piece placement and LAN piece prefixes.
    #[inline]
    pub const fn capital_letter(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Pawn => 'P',
        }
    }

    /// Inverse of [`capital_letter`](Self::capital_letter); expects an
    /// uppercase letter.
    pub fn from_capital_letter(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// A piece occupying one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// FEN character for this piece: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let capital = self.kind.capital_letter();
        match self.color {
            Color::White => capital,
            Color::Black => capital.to_ascii_lowercase(),
        }
    }

    /// Inverse of [`fen_char`](Self::fen_char): letter case selects the color.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        let kind = PieceKind::from_capital_letter(ch.to_ascii_uppercase())?;
        Some(Piece { color, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_char_round_trips_for_both_colors() {
        for kind in [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Pawn,
        ] {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
    }

    #[test]
    fn non_letter_is_not_a_piece() {
        assert_eq!(Piece::from_fen_char('3'), None);
        assert_eq!(Piece::from_fen_char('/'), None);
        assert_eq!(PieceKind::from_capital_letter('x'), None);
    }
}
