//! Errors used throughout the position core.
//!
//! A single taxonomy covers every failure mode: malformed FEN, malformed
//! long algebraic notation, and a move that is not in the generating
//! position's legal-move set. All three are fatal to the construction
//! attempt that raised them; there is never a partially built `Position`
//! for the caller to inspect or retry with.

/// Unified error type for position construction and notation parsing.
///
/// Variants carry the offending input plus a short reason so callers can log
/// or display precise diagnostics. The self-check outcome of
/// [`Position::try_apply_move`](crate::board::position::Position::try_apply_move)
/// is deliberately *not* an error: leaving one's own king capturable is an
/// expected result during interactive play and is reported as a normal value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A Forsyth-Edwards Notation string failed to parse.
    #[error("invalid Forsyth-Edwards Notation '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A long algebraic notation string failed to parse.
    #[error("invalid long algebraic notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// A non-castle move was applied that is not present in the generating
    /// position's move set for its origin square.
    #[error("illegal move")]
    IllegalMove,
}

impl StateError {
    pub fn invalid_fen(fen: &str, reason: impl Into<String>) -> Self {
        StateError::InvalidFen {
            fen: fen.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn invalid_notation(notation: &str, reason: impl Into<String>) -> Self {
        StateError::InvalidNotation {
            notation: notation.to_owned(),
            reason: reason.into(),
        }
    }
}
