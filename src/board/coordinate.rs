//! Board coordinates.
//!
//! Rows and columns are zero-based: row 0 is rank 1 (White's side), row 7 is
//! rank 8; column 0 is file 'a', column 7 is file 'h'. Coordinates may hold
//! out-of-range values; `Coordinate::NONE` is the `(-1,-1)` sentinel used
//! for "no en-passant target" style absences and for castle moves parsed
//! from notation, where single from/to squares are not meaningful.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i8,
    pub column: i8,
}

impl Coordinate {
    /// Sentinel for "no square".
    pub const NONE: Coordinate = Coordinate { row: -1, column: -1 };

    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Coordinate { row, column }
    }

    /// Translation constructor: a new coordinate offset from this one.
    /// The result may be off-board; callers test with [`is_on_board`](Self::is_on_board).
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Self {
        Coordinate {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row <= 7 && self.column >= 0 && self.column <= 7
    }

    /// File letter for this coordinate's column ('a'..='h').
    ///
    /// Only meaningful for on-board coordinates.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.column as u8)
    }

    /// Rank digit for this coordinate's row ('1'..='8').
    ///
    /// Only meaningful for on-board coordinates.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.row as u8)
    }
}

/// Renders as algebraic square text ("e4"), or "-" when off-board. This is
/// the exact form used in FEN's en-passant field and in LAN square tokens.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file_char(), self.rank_char())
        } else {
            write!(f, "-")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn renders_algebraic_square_text() {
        assert_eq!(Coordinate::new(0, 0).to_string(), "a1");
        assert_eq!(Coordinate::new(7, 7).to_string(), "h8");
        assert_eq!(Coordinate::new(3, 4).to_string(), "e4");
    }

    #[test]
    fn off_board_renders_dash() {
        assert_eq!(Coordinate::NONE.to_string(), "-");
        assert_eq!(Coordinate::new(8, 0).to_string(), "-");
        assert_eq!(Coordinate::new(0, -1).to_string(), "-");
    }

    #[test]
    fn offset_walks_off_the_board() {
        let corner = Coordinate::new(7, 7);
        assert!(corner.is_on_board());
        assert!(!corner.offset(1, 0).is_on_board());
        assert!(!corner.offset(0, 1).is_on_board());
        assert!(corner.offset(-1, -1).is_on_board());
    }
}
