//! Long algebraic notation (LAN) parsing and production.
//!
//! The grammar matches the wire format of the surrounding application:
//! castle tokens `0-0` / `0-0-0`, an optional leading piece letter (absent
//! means pawn), from-square, `-` for a quiet move or `x` for a capture,
//! to-square, then trailing flag characters in any order: `Q` promotion,
//! `=` draw offer extended, `+` check, `#` checkmate. The empty string is
//! the "no previous move" sentinel and maps to `None`.

use crate::board::chess_move::ChessMove;
use crate::board::chess_rules::{KINGSIDE_CASTLE_TOKEN, QUEENSIDE_CASTLE_TOKEN};
use crate::board::coordinate::Coordinate;
use crate::board::piece::PieceKind;
use crate::errors::StateError;

// From-square, separator, and to-square; one more when a piece letter leads.
const MINIMUM_NOTATION_LENGTH: usize = 5;

pub fn parse_long_algebraic(text: &str) -> Result<Option<ChessMove>, StateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let bytes = text.as_bytes();

    // Castles first; the queenside token must be tested before the kingside
    // token it starts with, or "0-0-0" would parse as "0-0" plus garbage.
    if let Some(rest) = text.strip_prefix(QUEENSIDE_CASTLE_TOKEN) {
        let mut chess_move = ChessMove::queenside_castle(Coordinate::NONE, Coordinate::NONE);
        parse_flags(rest.as_bytes(), &mut chess_move, text)?;
        return Ok(Some(chess_move));
    }
    if let Some(rest) = text.strip_prefix(KINGSIDE_CASTLE_TOKEN) {
        let mut chess_move = ChessMove::kingside_castle(Coordinate::NONE, Coordinate::NONE);
        parse_flags(rest.as_bytes(), &mut chess_move, text)?;
        return Ok(Some(chess_move));
    }

    // An absent piece letter implies a pawn and shortens the required length.
    let mut i = 0usize;
    let piece_kind = match PieceKind::from_capital_letter(bytes[0] as char) {
        Some(kind) => {
            i += 1;
            kind
        }
        None => PieceKind::Pawn,
    };
    let minimum_length = MINIMUM_NOTATION_LENGTH + i;
    if bytes.len() < minimum_length {
        return Err(StateError::invalid_notation(text, "too few characters to be valid"));
    }

    let from = parse_square(bytes, &mut i, text)?;
    let is_capture = match bytes[i] {
        b'-' => false,
        b'x' => true,
        other => {
            return Err(StateError::invalid_notation(
                text,
                format!("invalid capture character '{}'", char::from(other)),
            ))
        }
    };
    i += 1;
    let to = parse_square(bytes, &mut i, text)?;

    let mut chess_move = ChessMove::translation(from, to, piece_kind, is_capture, false);
    parse_flags(&bytes[i..], &mut chess_move, text)?;
    Ok(Some(chess_move))
}

fn parse_square(bytes: &[u8], i: &mut usize, text: &str) -> Result<Coordinate, StateError> {
    let file = bytes[*i];
    if !(b'a'..=b'h').contains(&file) {
        return Err(StateError::invalid_notation(
            text,
            format!("invalid file character '{}'", char::from(file)),
        ));
    }
    *i += 1;

    let rank = bytes[*i];
    if !(b'1'..=b'8').contains(&rank) {
        return Err(StateError::invalid_notation(
            text,
            format!("invalid rank character '{}'", char::from(rank)),
        ));
    }
    *i += 1;

    Ok(Coordinate::new((rank - b'1') as i8, (file - b'a') as i8))
}

fn parse_flags(rest: &[u8], chess_move: &mut ChessMove, text: &str) -> Result<(), StateError> {
    for &byte in rest {
        match byte {
            b'Q' => chess_move.is_promotion_to_queen = true,
            b'=' => chess_move.draw_offer_extended = true,
            b'+' => chess_move.is_check = true,
            b'#' => chess_move.is_check_mate = true,
            other => {
                return Err(StateError::invalid_notation(
                    text,
                    format!("invalid flag character '{}'", char::from(other)),
                ))
            }
        }
    }
    Ok(())
}

pub fn move_to_long_algebraic(chess_move: &ChessMove) -> String {
    let mut notation = String::new();

    if chess_move.is_kingside_castle {
        notation.push_str(KINGSIDE_CASTLE_TOKEN);
    } else if chess_move.is_queenside_castle {
        notation.push_str(QUEENSIDE_CASTLE_TOKEN);
    } else {
        // Pawn moves carry no piece letter.
        if chess_move.piece_kind != PieceKind::Pawn {
            notation.push(chess_move.piece_kind.capital_letter());
        }
        notation.push_str(&chess_move.from.to_string());
        notation.push(if chess_move.is_capture { 'x' } else { '-' });
        notation.push_str(&chess_move.to.to_string());
    }

    if chess_move.is_promotion_to_queen {
        notation.push('Q');
    }
    if chess_move.draw_offer_extended {
        notation.push('=');
    }
    if chess_move.is_check {
        notation.push('+');
    }
    if chess_move.is_check_mate {
        notation.push('#');
    }
    notation
}
