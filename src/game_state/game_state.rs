//! Mailbox board state.
//!
//! `GameState` is the central model for the engine. It owns the piece grid,
//! side to move, castling rights, en-passant target, a cache of both king
//! squares, and the undo stack used by the `apply_move` / `undo_last` pair
//! (implemented in `move_generation::legal_move_apply`).

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    /// `[light, dark]`; always the square holding that color's king.
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<UndoState>,
}

impl GameState {
    /// Board with no pieces. Only used while a position is being built.
    pub(crate) fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: Color::Light,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(game) => game,
            Err(e) => unreachable!("starting FEN must parse: {e}"),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row as usize][square.col as usize] = piece;
    }

    /// Place a piece while building a position, keeping the king cache current.
    pub(crate) fn place_piece(&mut self, square: Square, piece: Piece) {
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
        self.set_piece(square, Some(piece));
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Iterate every occupied square with its piece, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let square = Square::new(row, col);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }

    /// Check the one-king-per-color invariant and the king cache.
    pub fn validate(&self) -> ChessResult<()> {
        for color in [Color::Light, Color::Dark] {
            let kings: Vec<Square> = self
                .pieces()
                .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
                .map(|(sq, _)| sq)
                .collect();
            match kings.as_slice() {
                [square] if *square == self.king_square(color) => {}
                [square] => {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "{color} king cached on {} but found on {square}",
                        self.king_square(color)
                    )))
                }
                _ => {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "expected exactly one {color} king, found {}",
                        kings.len()
                    )))
                }
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
