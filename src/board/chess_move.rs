//! The per-ply move record.
//!
//! A `ChessMove` describes one move together with all of its notation-level
//! annotations. Equality is structural over every field: legality checking
//! compares a candidate against the generated move set by value, so
//! generation always leaves `is_check`/`is_check_mate` false. They are
//! patched onto a position's `previous_move` only after the move has
//! actually been applied and the one-ply check scan has run.

use serde::{Deserialize, Serialize};

use crate::board::coordinate::Coordinate;
use crate::board::piece::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub piece_kind: PieceKind,
    pub is_capture: bool,
    pub is_promotion_to_queen: bool,
    pub draw_offer_extended: bool,
    pub is_check: bool,
    pub is_check_mate: bool,
    pub is_kingside_castle: bool,
    pub is_queenside_castle: bool,
}

impl ChessMove {
    /// A quiet (non-capturing) move with no annotations.
    pub const fn quiet(from: Coordinate, to: Coordinate, piece_kind: PieceKind) -> Self {
        Self::translation(from, to, piece_kind, false, false)
    }

    /// A plain translation with explicit capture and promotion flags. This is
    /// the shape every generated non-castle move takes.
    pub const fn translation(
        from: Coordinate,
        to: Coordinate,
        piece_kind: PieceKind,
        is_capture: bool,
        is_promotion_to_queen: bool,
    ) -> Self {
        ChessMove {
            from,
            to,
            piece_kind,
            is_capture,
            is_promotion_to_queen,
            draw_offer_extended: false,
            is_check: false,
            is_check_mate: false,
            is_kingside_castle: false,
            is_queenside_castle: false,
        }
    }

    /// A kingside castle candidate. `from`/`to` carry the king's squares when
    /// produced by generation, or [`Coordinate::NONE`] when parsed from
    /// notation; applying a castle consults only the flag and the turn color.
    pub const fn kingside_castle(from: Coordinate, to: Coordinate) -> Self {
        ChessMove {
            from,
            to,
            piece_kind: PieceKind::King,
            is_capture: false,
            is_promotion_to_queen: false,
            draw_offer_extended: false,
            is_check: false,
            is_check_mate: false,
            is_kingside_castle: true,
            is_queenside_castle: false,
        }
    }

    /// A queenside castle candidate; see [`kingside_castle`](Self::kingside_castle).
    pub const fn queenside_castle(from: Coordinate, to: Coordinate) -> Self {
        ChessMove {
            from,
            to,
            piece_kind: PieceKind::King,
            is_capture: false,
            is_promotion_to_queen: false,
            draw_offer_extended: false,
            is_check: false,
            is_check_mate: false,
            is_kingside_castle: false,
            is_queenside_castle: true,
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.is_kingside_castle || self.is_queenside_castle
    }

    /// Copy of this move with the check/checkmate annotations replaced.
    pub const fn with_check_flags(mut self, is_check: bool, is_check_mate: bool) -> Self {
        self.is_check = is_check;
        self.is_check_mate = is_check_mate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural_over_annotations() {
        let quiet = ChessMove::quiet(
            Coordinate::new(1, 4),
            Coordinate::new(3, 4),
            PieceKind::Pawn,
        );
        assert_eq!(quiet, quiet);
        assert_ne!(quiet, quiet.with_check_flags(true, false));

        let mut capture = quiet;
        capture.is_capture = true;
        assert_ne!(quiet, capture);
    }

    #[test]
    fn castle_constructors_set_exactly_one_flag() {
        let kingside = ChessMove::kingside_castle(Coordinate::new(0, 4), Coordinate::new(0, 6));
        assert!(kingside.is_kingside_castle && !kingside.is_queenside_castle);
        assert!(kingside.is_castle());

        let queenside = ChessMove::queenside_castle(Coordinate::NONE, Coordinate::NONE);
        assert!(queenside.is_queenside_castle && !queenside.is_kingside_castle);
        assert_eq!(queenside.piece_kind, PieceKind::King);
    }
}
