//! The move value object produced by the generator and consumed by the board.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::KINGSIDE_CASTLE_KING_COL;
use crate::game_state::chess_types::*;

/// One transition between two squares plus its special-move flags.
///
/// Equality and hashing use the move identity (start, end and flags). The
/// promotion target is never part of the identity since pawns always promote
/// to a queen.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the passed pawn, which does not stand on `end`.
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub is_castle: bool,
}

impl Move {
    /// A plain move or capture.
    pub fn new(start: Square, end: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_promotion: false,
            is_castle: false,
        }
    }

    /// A pawn move onto the far rank; the pawn becomes a queen.
    pub fn promotion(start: Square, end: Square, pawn: Piece, piece_captured: Option<Piece>) -> Self {
        Self {
            is_promotion: true,
            ..Self::new(start, end, pawn, piece_captured)
        }
    }

    /// An en-passant capture of the pawn standing beside `start`.
    pub fn en_passant(start: Square, end: Square, pawn: Piece) -> Self {
        let passed_pawn = Piece::new(pawn.color.opposite(), PieceKind::Pawn);
        Self {
            is_en_passant: true,
            ..Self::new(start, end, pawn, Some(passed_pawn))
        }
    }

    /// A castling king move; the rook relocation is implied by `end`.
    pub fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            is_castle: true,
            ..Self::new(start, end, king, None)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.end.col == KINGSIDE_CASTLE_KING_COL
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.start.row, self.end.col)
        } else {
            self.end
        }
    }

    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut s = format!("{}{}", self.start, self.end);
        if self.is_promotion {
            s.push('q');
        }
        s
    }

    /// Short notation without check or disambiguation markers,
    /// e.g. `O-O`, `e4`, `exd5`, `e8=Q`, `Nxf3`.
    pub fn to_short_notation(&self) -> String {
        if self.is_castle {
            return if self.is_kingside_castle() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            };
        }

        let mut s = String::new();
        match self.piece_moved.kind {
            PieceKind::Pawn => {
                if self.is_capture() {
                    s.push(self.start.file_char());
                    s.push('x');
                }
            }
            kind => {
                s.push(kind.letter());
                if self.is_capture() {
                    s.push('x');
                }
            }
        }
        s.push_str(&self.end.to_string());
        if self.is_promotion {
            s.push_str("=Q");
        }
        s
    }

    fn identity(&self) -> (Square, Square, bool, bool, bool) {
        (
            self.start,
            self.end,
            self.is_en_passant,
            self.is_promotion,
            self.is_castle,
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_short_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::square_from_algebraic;

    fn sq(s: &str) -> Square {
        square_from_algebraic(s).unwrap()
    }

    const WP: Piece = Piece::new(Color::Light, PieceKind::Pawn);
    const WN: Piece = Piece::new(Color::Light, PieceKind::Knight);
    const WK: Piece = Piece::new(Color::Light, PieceKind::King);
    const BP: Piece = Piece::new(Color::Dark, PieceKind::Pawn);
    const BR: Piece = Piece::new(Color::Dark, PieceKind::Rook);

    #[test]
    fn notation() {
        assert_eq!(Move::new(sq("e2"), sq("e4"), WP, None).to_short_notation(), "e4");
        assert_eq!(Move::new(sq("e4"), sq("d5"), WP, Some(BP)).to_short_notation(), "exd5");
        assert_eq!(Move::new(sq("g1"), sq("f3"), WN, None).to_short_notation(), "Nf3");
        assert_eq!(Move::new(sq("g1"), sq("f3"), WN, Some(BP)).to_short_notation(), "Nxf3");
        assert_eq!(Move::promotion(sq("e7"), sq("d8"), WP, Some(BR)).to_short_notation(), "exd8=Q");
        assert_eq!(Move::castle(sq("e1"), sq("g1"), WK).to_short_notation(), "O-O");
        assert_eq!(Move::castle(sq("e1"), sq("c1"), WK).to_short_notation(), "O-O-O");
        assert_eq!(Move::promotion(sq("e7"), sq("e8"), WP, None).to_long_algebraic(), "e7e8q");
    }

    #[test]
    fn identity_ignores_captured_piece() {
        let a = Move::new(sq("e4"), sq("d5"), WP, Some(BP));
        let b = Move::new(sq("e4"), sq("d5"), WP, None);
        assert_eq!(a, b);
        assert_ne!(a, Move::en_passant(sq("e4"), sq("d5"), WP));
    }

    #[test]
    fn en_passant_captures_beside_start() {
        let mv = Move::en_passant(sq("e5"), sq("d6"), WP);
        assert_eq!(mv.capture_square(), sq("d5"));
        assert_eq!(mv.piece_captured, Some(BP));
    }
}
