//! Long algebraic input helpers (`e2`, `e2e4`, `e7e8q`).

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Parse a square such as `e4`.
pub fn square_from_algebraic(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let col = match bytes[0] {
        f @ b'a'..=b'h' => f - b'a',
        _ => return Err(ChessErrors::InvalidAlgebraic(text.to_owned())),
    };
    let row = match bytes[1] {
        r @ b'1'..=b'8' => b'8' - r,
        _ => return Err(ChessErrors::InvalidAlgebraic(text.to_owned())),
    };
    Ok(Square::new(row, col))
}

/// Parse a move such as `e2e4` into its start and end squares.
///
/// A trailing promotion letter is accepted and ignored: pawns always promote
/// to a queen.
pub fn squares_from_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let valid_suffix = match text.len() {
        4 => true,
        5 => matches!(text.as_bytes()[4], b'q' | b'Q'),
        _ => false,
    };
    if !valid_suffix || !text.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let start = square_from_algebraic(&text[0..2])?;
    let end = square_from_algebraic(&text[2..4])?;
    Ok((start, end))
}
