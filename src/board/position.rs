//! The central board position model.
//!
//! A `Position` is an immutable-per-turn snapshot: the 8×8 piece grid,
//! whose turn it is, castling rights, the en-passant target, the half/full
//! move clocks, the move that produced it, and the fully recomputed grid of
//! pseudo-legal move sets. Transitions never mutate: applying a move to a
//! position yields a brand-new position, so independent callers can hold
//! and query different positions concurrently without locking.

use std::collections::HashSet;

use crate::board::chess_move::ChessMove;
use crate::board::chess_rules::{
    CastlingRights, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE, FIRST_ROW_BLACK, FIRST_ROW_WHITE, KINGSIDE_CASTLED_KING_COLUMN,
    KINGSIDE_CASTLED_ROOK_COLUMN, KINGSIDE_ROOK_COLUMN, KING_START_COLUMN,
    QUEENSIDE_CASTLED_KING_COLUMN, QUEENSIDE_CASTLED_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN,
    STARTING_POSITION_FEN,
};
use crate::board::coordinate::Coordinate;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::errors::StateError;
use crate::move_generation::check::{classify_check, king_is_capturable};
use crate::move_generation::move_grid::{empty_move_grid, generate_move_grid, MoveGrid};
use crate::notation::fen_generator::generate_fen;
use crate::notation::fen_parser::parse_fen;
use crate::notation::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};

/// Owned piece placement; row 0 is rank 1 (White's side), column 0 is file 'a'.
pub type BoardGrid = [[Option<Piece>; 8]; 8];

/// Result of [`Position::try_apply_move`]. Leaving one's own king capturable
/// is an expected interactive outcome, not an error, so it is reported as a
/// normal variant rather than through `StateError`.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The move was legal; here is the successor position.
    Applied(Position),
    /// The move would leave the mover's own king capturable; the original
    /// position stands.
    PutsUserInCheck,
}

#[derive(Debug, Clone)]
pub struct Position {
    grid: BoardGrid,
    turn_color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Coordinate>,
    half_move: u16,
    full_move: u16,
    previous_move: Option<ChessMove>,
    move_grid: MoveGrid,
}

impl Position {
    /// The standard starting position with no previous move.
    pub fn new_game() -> Self {
        Self::from_notation(STARTING_POSITION_FEN, "")
            .expect("starting FEN should always parse")
    }

    /// Rebuild a position from its FEN description plus the long algebraic
    /// text of the move that produced it (empty when there is none). This is
    /// the deserialization path for stored and transmitted games; the FEN
    /// already reflects the move.
    pub fn from_notation(fen: &str, long_algebraic: &str) -> Result<Self, StateError> {
        let fields = parse_fen(fen)?;
        let previous_move = parse_long_algebraic(long_algebraic)?;

        let mut position = Position {
            grid: fields.grid,
            turn_color: fields.turn_color,
            castling_rights: fields.castling_rights,
            en_passant_target: fields.en_passant_target,
            half_move: fields.half_move,
            full_move: fields.full_move,
            previous_move,
            move_grid: empty_move_grid(),
        };
        position.move_grid = generate_move_grid(&position);
        Ok(position)
    }

    /// Transition constructor: the position after `new_move` is applied.
    ///
    /// Non-castle moves must be members of this position's generated move
    /// set for their origin square; castles are trusted to come only from
    /// generation. With `look_for_check`, the applied move is re-annotated
    /// with its check/checkmate flags via a one-ply reply scan.
    pub fn apply(&self, new_move: &ChessMove, look_for_check: bool) -> Result<Self, StateError> {
        if !new_move.is_castle() {
            if !new_move.from.is_on_board()
                || !self.moves_at(new_move.from).contains(new_move)
            {
                return Err(StateError::IllegalMove);
            }
        }

        let mover = self.turn_color;
        let mut grid = self.grid;
        let mut castling_rights = self.castling_rights;
        // En passant is only open for the single following ply.
        let mut en_passant_target = None;

        if new_move.is_castle() {
            let row = first_row(mover);
            let (rook_start, king_end, rook_end) = if new_move.is_kingside_castle {
                (
                    KINGSIDE_ROOK_COLUMN,
                    KINGSIDE_CASTLED_KING_COLUMN,
                    KINGSIDE_CASTLED_ROOK_COLUMN,
                )
            } else {
                (
                    QUEENSIDE_ROOK_COLUMN,
                    QUEENSIDE_CASTLED_KING_COLUMN,
                    QUEENSIDE_CASTLED_ROOK_COLUMN,
                )
            };
            grid[row as usize][KING_START_COLUMN as usize] = None;
            grid[row as usize][rook_start as usize] = None;
            grid[row as usize][king_end as usize] = Some(Piece::new(mover, PieceKind::King));
            grid[row as usize][rook_end as usize] = Some(Piece::new(mover, PieceKind::Rook));
            castling_rights &= !both_rights(mover);
        } else {
            match new_move.piece_kind {
                PieceKind::Pawn => {
                    // A pawn landing on the open en-passant target removes
                    // the bypassed pawn one rank behind the destination.
                    if self.en_passant_target == Some(new_move.to) {
                        let behind = match mover {
                            Color::White => new_move.to.offset(-1, 0),
                            Color::Black => new_move.to.offset(1, 0),
                        };
                        grid[behind.row as usize][behind.column as usize] = None;
                    }
                    // A double step opens en passant for the reply.
                    let (double_from_row, double_to_row, target_row) = match mover {
                        Color::White => (1, 3, 2),
                        Color::Black => (6, 4, 5),
                    };
                    if new_move.from.row == double_from_row && new_move.to.row == double_to_row {
                        en_passant_target =
                            Some(Coordinate::new(target_row, new_move.from.column));
                    }
                }
                PieceKind::King => {
                    castling_rights &= !both_rights(mover);
                }
                PieceKind::Rook => {
                    let row = first_row(mover);
                    if new_move.from == Coordinate::new(row, KINGSIDE_ROOK_COLUMN) {
                        castling_rights &= !kingside_right(mover);
                    } else if new_move.from == Coordinate::new(row, QUEENSIDE_ROOK_COLUMN) {
                        castling_rights &= !queenside_right(mover);
                    }
                }
                _ => {}
            }

            let placed_kind = if new_move.is_promotion_to_queen {
                PieceKind::Queen
            } else {
                new_move.piece_kind
            };
            grid[new_move.from.row as usize][new_move.from.column as usize] = None;
            grid[new_move.to.row as usize][new_move.to.column as usize] =
                Some(Piece::new(mover, placed_kind));
        }

        // Half-move clock resets on any capture or pawn move; the full-move
        // number advances after Black's move.
        let half_move = if new_move.is_capture || new_move.piece_kind == PieceKind::Pawn {
            0
        } else {
            // A parseable FEN can already carry the clock at the type's
            // maximum; pin it there instead of wrapping.
            self.half_move.saturating_add(1)
        };
        let full_move = if mover == Color::Black {
            self.full_move + 1
        } else {
            self.full_move
        };

        let mut next = Position {
            grid,
            turn_color: mover.opposite(),
            castling_rights,
            en_passant_target,
            half_move,
            full_move,
            previous_move: Some(*new_move),
            move_grid: empty_move_grid(),
        };
        next.move_grid = generate_move_grid(&next);

        if look_for_check {
            let (is_check, is_check_mate) = classify_check(&next)?;
            next.previous_move = Some(new_move.with_check_flags(is_check, is_check_mate));
        }

        Ok(next)
    }

    /// Apply `new_move` and reject it when it leaves the mover's own king
    /// capturable. This is the legality gate that generation deliberately
    /// skips.
    pub fn try_apply_move(&self, new_move: &ChessMove) -> Result<MoveOutcome, StateError> {
        let next = self.apply(new_move, true)?;
        if king_is_capturable(&next) {
            Ok(MoveOutcome::PutsUserInCheck)
        } else {
            Ok(MoveOutcome::Applied(next))
        }
    }

    /// Piece on a square, or `None` for empty or off-board coordinates.
    pub fn get_piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        if !coordinate.is_on_board() {
            return None;
        }
        self.grid[coordinate.row as usize][coordinate.column as usize]
    }

    /// Defensive copy of the pseudo-legal move set for one square.
    pub fn get_possible_moves(&self, coordinate: Coordinate) -> HashSet<ChessMove> {
        if !coordinate.is_on_board() {
            return HashSet::new();
        }
        self.moves_at(coordinate).clone()
    }

    /// Every generated move of the side to move, across all squares.
    pub fn iter_possible_moves(&self) -> impl Iterator<Item = &ChessMove> {
        self.move_grid
            .iter()
            .flat_map(|row| row.iter().flat_map(|moves| moves.iter()))
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// The move that produced this position, if any.
    pub fn previous_move(&self) -> Option<&ChessMove> {
        self.previous_move.as_ref()
    }

    /// Long algebraic text of the previous move; empty for the initial
    /// position. Together with [`to_fen`](Self::to_fen) this is the full
    /// persisted form of a position.
    pub fn previous_move_lan(&self) -> String {
        self.previous_move
            .as_ref()
            .map(move_to_long_algebraic)
            .unwrap_or_default()
    }

    pub fn turn_color(&self) -> Color {
        self.turn_color
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    pub fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }

    pub fn half_move(&self) -> u16 {
        self.half_move
    }

    pub fn full_move(&self) -> u16 {
        self.full_move
    }

    pub(crate) fn moves_at(&self, coordinate: Coordinate) -> &HashSet<ChessMove> {
        &self.move_grid[coordinate.row as usize][coordinate.column as usize]
    }

    /// Same placement viewed with `turn_color` on the move and the move grid
    /// rebuilt accordingly. The en-passant target is not carried over;
    /// kings cannot be captured in passing, and this view exists only to
    /// answer attack queries.
    pub(crate) fn with_turn(&self, turn_color: Color) -> Position {
        let mut view = Position {
            grid: self.grid,
            turn_color,
            castling_rights: self.castling_rights,
            en_passant_target: None,
            half_move: self.half_move,
            full_move: self.full_move,
            previous_move: None,
            move_grid: empty_move_grid(),
        };
        view.move_grid = generate_move_grid(&view);
        view
    }
}

#[inline]
const fn first_row(color: Color) -> i8 {
    match color {
        Color::White => FIRST_ROW_WHITE,
        Color::Black => FIRST_ROW_BLACK,
    }
}

#[inline]
const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
const fn both_rights(color: Color) -> CastlingRights {
    kingside_right(color) | queenside_right(color)
}
