//! Canonical chess-rule constants.
//!
//! Direction and jump tables for move generation, the column layout of
//! castling, castle notation tokens, and the standard starting position FEN.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Long algebraic token for a kingside castle.
pub const KINGSIDE_CASTLE_TOKEN: &str = "0-0";
/// Long algebraic token for a queenside castle. Checked before the kingside
/// token when parsing, since it has the kingside token as a prefix.
pub const QUEENSIDE_CASTLE_TOKEN: &str = "0-0-0";

/// Directions a rook slides in, as (row, column) deltas.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Directions a bishop slides in.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Directions a queen slides in; also the single-step translations of a king.
pub const QUEEN_DIRECTIONS_KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight fixed knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
];

// Column layout of the castling squares, shared by move generation and the
// transition logic.
pub const FIRST_ROW_WHITE: i8 = 0;
pub const FIRST_ROW_BLACK: i8 = 7;
pub const KING_START_COLUMN: i8 = 4;
pub const KINGSIDE_ROOK_COLUMN: i8 = 7;
pub const QUEENSIDE_ROOK_COLUMN: i8 = 0;
pub const KINGSIDE_CASTLED_KING_COLUMN: i8 = 6;
pub const QUEENSIDE_CASTLED_KING_COLUMN: i8 = 2;
pub const KINGSIDE_CASTLED_ROOK_COLUMN: i8 = 5;
pub const QUEENSIDE_CASTLED_ROOK_COLUMN: i8 = 3;

/// Compact castling-rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;
