//! FEN serialization of a [`GameState`].
//!
//! Move clocks are not tracked by the engine, so the last two fields are
//! always `0 1`.

use crate::game_state::chess_types::*;

pub fn generate_fen(game: &GameState) -> String {
    let mut out = String::with_capacity(80);

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match game.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game.side_to_move() {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out.push(' ');
    let rights = game.castling_rights();
    let before = out.len();
    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }
    if out.len() == before {
        out.push('-');
    }

    out.push(' ');
    match game.en_passant_target() {
        Some(square) => out.push_str(&square.to_string()),
        None => out.push('-'),
    }

    out.push_str(" 0 1");
    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::Light => letter,
        Color::Dark => letter.to_ascii_lowercase(),
    }
}
