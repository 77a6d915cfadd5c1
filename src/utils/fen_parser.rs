//! FEN parsing into a [`GameState`].
//!
//! Used to set up starting, test and demo positions. Move clocks are accepted
//! but ignored since the engine does not track them.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::long_algebraic::square_from_algebraic;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut fields = fen.split_ascii_whitespace();
    let mut game = GameState::empty();

    let placement = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen(format!("missing placement field in {fen:?}")))?;
    parse_placement(&mut game, placement)?;

    game.side_to_move = match fields.next() {
        Some("w") => Color::Light,
        Some("b") => Color::Dark,
        other => {
            return Err(ChessErrors::InvalidFen(format!(
                "side to move must be 'w' or 'b', got {other:?}"
            )))
        }
    };

    let castling = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing castling field".to_owned()))?;
    for c in castling.chars() {
        match c {
            'K' => game.castling_rights.light_kingside = true,
            'Q' => game.castling_rights.light_queenside = true,
            'k' => game.castling_rights.dark_kingside = true,
            'q' => game.castling_rights.dark_queenside = true,
            '-' => {}
            _ => return Err(ChessErrors::InvalidFen(format!("bad castling token {c:?}"))),
        }
    }

    game.en_passant_target = match fields.next() {
        None | Some("-") => None,
        Some(square) => Some(
            square_from_algebraic(square)
                .map_err(|_| ChessErrors::InvalidFen(format!("bad en passant square {square:?}")))?,
        ),
    };

    for clock in fields.take(2) {
        if clock.parse::<u16>().is_err() {
            return Err(ChessErrors::InvalidFen(format!("bad move clock {clock:?}")));
        }
    }

    game.validate()?;
    let waiting = game.side_to_move.opposite();
    if is_king_in_check(&game, waiting) {
        return Err(ChessErrors::InvalidPosition(format!(
            "{waiting} is in check but it is not {waiting}'s move"
        )));
    }
    Ok(game)
}

fn parse_placement(game: &mut GameState, placement: &str) -> ChessResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, rank) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as u8;
            } else {
                let piece = piece_from_fen_char(c)?;
                if col > 7 {
                    return Err(ChessErrors::InvalidFen(format!("rank {rank:?} is too long")));
                }
                game.place_piece(Square::new(row as u8, col), piece);
                col += 1;
            }
        }
        if col != 8 {
            return Err(ChessErrors::InvalidFen(format!(
                "rank {rank:?} covers {col} squares"
            )));
        }
    }
    Ok(())
}

fn piece_from_fen_char(c: char) -> ChessResult<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match c.to_ascii_uppercase() {
        'P' => PieceKind::Pawn,
        'N' => PieceKind::Knight,
        'B' => PieceKind::Bishop,
        'R' => PieceKind::Rook,
        'Q' => PieceKind::Queen,
        'K' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidFen(format!("unknown piece token {c:?}"))),
    };
    Ok(Piece::new(color, kind))
}
