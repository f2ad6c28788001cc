//! Check and checkmate detection.
//!
//! There is no standalone "is square attacked" routine: attacks are
//! discovered by generating the attacker's candidate moves and asking
//! whether any lands on a king. [`is_color_in_check`] is the single named
//! operation for "is color C's king attacked in position P"; everything
//! else is built on it and on the one-ply reply scan in [`classify_check`].

use crate::board::piece::{Color, PieceKind};
use crate::board::position::Position;
use crate::errors::StateError;

/// Whether the side to move in `position` could capture a king on its next
/// ply. A true result marks the position as one the previous mover was not
/// entitled to reach.
pub fn king_is_capturable(position: &Position) -> bool {
    position.iter_possible_moves().any(|mv| {
        !mv.is_castle()
            && matches!(
                position.get_piece_at(mv.to),
                Some(piece) if piece.kind == PieceKind::King
            )
    })
}

/// Whether `color`'s king is attacked in `position`, regardless of whose
/// turn it is. Rebuilds the move grid from the attacker's perspective and
/// asks [`king_is_capturable`].
pub fn is_color_in_check(position: &Position, color: Color) -> bool {
    let attacker_view = position.with_turn(color.opposite());
    king_is_capturable(&attacker_view)
}

/// Check/checkmate annotations for the move that produced `next`.
///
/// `next` is the successor position, so its side to move is the defender.
/// If the defender is in check, every one of the defender's generated
/// replies is applied (with check detection off, so the lookahead is exactly
/// one ply) and the position is checkmate only when no reply frees the
/// king.
pub fn classify_check(next: &Position) -> Result<(bool, bool), StateError> {
    let defender = next.turn_color();
    if !is_color_in_check(next, defender) {
        return Ok((false, false));
    }

    for reply in next.iter_possible_moves() {
        let after = next.apply(reply, false)?;
        if !king_is_capturable(&after) {
            return Ok((true, false));
        }
    }
    Ok((true, true))
}
