//! In-place move application and its exact inverse.
//!
//! `apply_move` mutates the board and pushes an [`UndoState`]; `undo_last`
//! pops it and restores the previous position bit for bit, including
//! castling rights, the en-passant target and the king square cache.

use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_KING_COL, KINGSIDE_ROOK_COL, QUEENSIDE_CASTLE_KING_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Rook start and end columns for a castle landing the king on `king_end_col`.
#[inline]
fn castle_rook_cols(king_end_col: u8) -> (u8, u8) {
    if king_end_col == KINGSIDE_CASTLE_KING_COL {
        (KINGSIDE_ROOK_COL, KINGSIDE_CASTLE_KING_COL - 1)
    } else {
        (QUEENSIDE_ROOK_COL, QUEENSIDE_CASTLE_KING_COL + 1)
    }
}

impl GameState {
    /// Play `mv`, which must be legal in the current position.
    pub fn apply_move(&mut self, mv: &Move) {
        let color = mv.piece_moved.color;
        debug_assert_eq!(color, self.side_to_move, "move played out of turn");
        debug_assert_eq!(self.piece_at(mv.start), Some(mv.piece_moved));
        debug_assert!(
            mv.piece_captured.map(|p| p.kind) != Some(PieceKind::King),
            "king captured by {mv}"
        );

        self.history.push(UndoState {
            mv: *mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.set_piece(mv.start, None);
        if mv.is_en_passant {
            self.set_piece(mv.capture_square(), None);
        }

        let placed = if mv.is_promotion {
            Piece::new(color, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.set_piece(mv.end, Some(placed));

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_cols(mv.end.col);
            let row = mv.start.row;
            let rook = self.piece_at(Square::new(row, rook_from));
            debug_assert_eq!(rook, Some(Piece::new(color, PieceKind::Rook)));
            self.set_piece(Square::new(row, rook_from), None);
            self.set_piece(Square::new(row, rook_to), rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[color.index()] = mv.end;
        }

        self.update_castling_rights(mv);

        self.en_passant_target = if mv.piece_moved.kind == PieceKind::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2
        {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        self.side_to_move = color.opposite();
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        let color = mv.piece_moved.color;
        match mv.piece_moved.kind {
            PieceKind::King => self.castling_rights.revoke_all(color),
            PieceKind::Rook if mv.start.row == color.home_row() => {
                if mv.start.col == KINGSIDE_ROOK_COL {
                    self.castling_rights.revoke_kingside(color);
                } else if mv.start.col == QUEENSIDE_ROOK_COL {
                    self.castling_rights.revoke_queenside(color);
                }
            }
            _ => {}
        }

        // Capturing a rook on its home corner kills that side's right.
        if let Some(captured) = mv.piece_captured {
            let enemy = captured.color;
            if captured.kind == PieceKind::Rook && mv.end.row == enemy.home_row() {
                if mv.end.col == KINGSIDE_ROOK_COL {
                    self.castling_rights.revoke_kingside(enemy);
                } else if mv.end.col == QUEENSIDE_ROOK_COL {
                    self.castling_rights.revoke_queenside(enemy);
                }
            }
        }
    }

    /// Take back the most recent move. Returns it, or `None` at the root.
    pub fn undo_last(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        let mv = record.mv;
        let color = mv.piece_moved.color;

        self.set_piece(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set_piece(mv.end, None);
            self.set_piece(mv.capture_square(), mv.piece_captured);
        } else {
            self.set_piece(mv.end, mv.piece_captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_cols(mv.end.col);
            let row = mv.start.row;
            let rook = self.piece_at(Square::new(row, rook_to));
            self.set_piece(Square::new(row, rook_to), None);
            self.set_piece(Square::new(row, rook_from), rook);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_squares[color.index()] = mv.start;
        }

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_target = record.prev_en_passant_target;
        self.side_to_move = color;

        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::moves::chess_move::Move;
    use crate::utils::long_algebraic::squares_from_long_algebraic;

    fn find_move(game: &GameState, text: &str) -> Move {
        let (from, to) = squares_from_long_algebraic(text).unwrap();
        legal_moves(game)
            .moves
            .into_iter()
            .find(|m| m.start == from && m.end == to)
            .unwrap_or_else(|| panic!("{text} should be legal in {}", game.get_fen()))
    }

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = find_move(game, text);
            game.apply_move(&mv);
        }
    }

    fn assert_undo_restores(game: &mut GameState, depth: u8) {
        if depth == 0 {
            return;
        }
        for mv in legal_moves(game).moves {
            let before = game.clone();
            game.apply_move(&mv);
            assert!(game.validate().is_ok());
            assert_undo_restores(game, depth - 1);
            assert_eq!(game.undo_last(), Some(mv));
            assert_eq!(*game, before, "undo of {mv} diverged");
        }
    }

    #[test]
    fn undo_is_exact_inverse() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/1P6/8/2pP4/8/8/6p1/R3K2R w KQkq c6 0 1",
        ] {
            let mut game = GameState::from_fen(fen).unwrap();
            assert_undo_restores(&mut game, 2);
        }
        assert_eq!(GameState::new_game().undo_last(), None);
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.en_passant_target().map(|s| s.to_string()), Some("d6".to_owned()));

        let ep = find_move(&game, "e5d6");
        assert!(ep.is_en_passant);
        game.apply_move(&ep);
        assert_eq!(game.get_fen(), "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
        game.undo_last();

        // A quiet move instead closes the window.
        play(&mut game, &["g1f3", "h7h6"]);
        assert!(legal_moves(&game).moves.iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn castling_moves_rook_and_rights_restore() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castle = find_move(&game, "e1g1");
        assert!(castle.is_castle);
        game.apply_move(&castle);
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1");
        assert_eq!(game.king_square(Color::Light).to_string(), "g1");

        game.undo_last();
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        // Rook takes rook on a8: both queenside rights go.
        play(&mut game, &["a1a8"]);
        assert_eq!(game.get_fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");
    }

    #[test]
    fn rook_step_drops_only_its_own_right() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).unwrap();
        play(&mut game, &["h1g1"]);
        let rights = game.castling_rights();
        assert!(!rights.light_kingside);
        assert!(rights.light_queenside && rights.dark_kingside && rights.dark_queenside);

        game.undo_last();
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
        assert_eq!(game.get_fen(), fen);
    }

    #[test]
    fn promotion_becomes_queen_and_undoes_to_pawn() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        play(&mut game, &["a7a8"]);
        assert_eq!(game.piece_at(Square::new(0, 0)), Some(Piece::new(Color::Light, PieceKind::Queen)));
        game.undo_last();
        assert_eq!(game.piece_at(Square::new(1, 0)), Some(Piece::new(Color::Light, PieceKind::Pawn)));
    }

    #[test]
    fn queen_h5_after_e4_e5_is_not_check() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "e7e5", "d1h5"]);
        // f7 still shields the dark king.
        assert!(!is_king_in_check(&game, Color::Dark));
        assert!(!legal_moves(&game).in_check);
    }
}
