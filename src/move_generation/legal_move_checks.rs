//! Check, pin and attack detection by ray casting from a king square.
//!
//! `detect_pins_and_checks` is computed once per legal-move generation and
//! handed read-only to the per-piece generators. `is_square_attacked` answers
//! the simpler question used by king moves, castling and en passant, usually
//! through a [`BoardView`] that overrides a few squares so hypothetical
//! positions can be probed without touching the board.

use crate::game_state::chess_types::*;
use crate::moves::directions::{
    is_diagonal, reversed, Direction, ALL_RAYS, KING_OFFSETS, KNIGHT_OFFSETS,
};

/// An own piece that may only move along `direction` (or its reverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Direction from the king towards the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub origin: Square,
    /// Ray direction from the king for sliders, the raw offset otherwise.
    pub direction: Direction,
    pub kind: PieceKind,
}

impl Check {
    #[inline]
    pub fn is_sliding(&self) -> bool {
        matches!(self.kind, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Does landing on `square` resolve this check (capture or block)?
    pub fn is_resolved_by(&self, king: Square, square: Square) -> bool {
        if square == self.origin {
            return true;
        }
        if !self.is_sliding() {
            return false;
        }
        let mut cursor = king;
        while let Some(next) = cursor.offset(self.direction.0, self.direction.1) {
            if next == self.origin {
                return false;
            }
            if next == square {
                return true;
            }
            cursor = next;
        }
        false
    }
}

/// Pins and checks against one king, computed from the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl PinsAndChecks {
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }

    /// Pin direction of the piece on `square`, if it is pinned.
    pub fn pin_direction(&self, square: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.direction)
    }

    /// May the piece on `from` travel along `direction` given its pin?
    pub fn allows(&self, from: Square, direction: Direction) -> bool {
        match self.pin_direction(from) {
            None => true,
            Some(pin) => pin == direction || reversed(pin) == direction,
        }
    }
}

/// Read-only board with a handful of squares replaced.
pub struct BoardView<'a> {
    game: &'a GameState,
    overrides: &'a [(Square, Option<Piece>)],
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self {
            game,
            overrides: &[],
        }
    }

    pub fn with_overrides(game: &'a GameState, overrides: &'a [(Square, Option<Piece>)]) -> Self {
        Self { game, overrides }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        for (overridden, piece) in self.overrides {
            if *overridden == square {
                return *piece;
            }
        }
        self.game.piece_at(square)
    }
}

#[inline]
fn slides_along(kind: PieceKind, direction: Direction) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !is_diagonal(direction),
        PieceKind::Bishop => is_diagonal(direction),
        _ => false,
    }
}

/// Cast all eight rays from `king` and probe knight and pawn offsets.
pub fn detect_pins_and_checks(game: &GameState, king: Square, color: Color) -> PinsAndChecks {
    let view = BoardView::new(game);
    let mut result = PinsAndChecks::default();

    for direction in ALL_RAYS {
        let mut candidate_pin: Option<Square> = None;
        let mut cursor = king;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            let Some(piece) = view.piece_at(next) else {
                continue;
            };
            if piece.color == color {
                if candidate_pin.is_some() {
                    break;
                }
                candidate_pin = Some(next);
                continue;
            }
            if slides_along(piece.kind, direction) {
                match candidate_pin {
                    Some(square) => result.pins.push(Pin { square, direction }),
                    None => result.checks.push(Check {
                        origin: next,
                        direction,
                        kind: piece.kind,
                    }),
                }
            }
            break;
        }
    }

    let enemy = color.opposite();
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king.offset(offset.0, offset.1) {
            if view.piece_at(square) == Some(Piece::new(enemy, PieceKind::Knight)) {
                result.checks.push(Check {
                    origin: square,
                    direction: offset,
                    kind: PieceKind::Knight,
                });
            }
        }
    }

    for offset in pawn_attacker_offsets(enemy) {
        if let Some(square) = king.offset(offset.0, offset.1) {
            if view.piece_at(square) == Some(Piece::new(enemy, PieceKind::Pawn)) {
                result.checks.push(Check {
                    origin: square,
                    direction: offset,
                    kind: PieceKind::Pawn,
                });
            }
        }
    }

    result
}

/// Offsets from a target square to the squares an `attacker` pawn hits it from.
#[inline]
fn pawn_attacker_offsets(attacker: Color) -> [Direction; 2] {
    let back = -attacker.pawn_direction();
    [(back, -1), (back, 1)]
}

/// Is `square` attacked by any piece of `attacker` in `view`?
pub fn is_square_attacked(view: &BoardView<'_>, square: Square, attacker: Color) -> bool {
    for direction in ALL_RAYS {
        let mut cursor = square;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            if let Some(piece) = view.piece_at(next) {
                if piece.color == attacker && slides_along(piece.kind, direction) {
                    return true;
                }
                break;
            }
        }
    }

    let pawn_offsets = pawn_attacker_offsets(attacker);
    let probes = [
        (KNIGHT_OFFSETS.as_slice(), PieceKind::Knight),
        (KING_OFFSETS.as_slice(), PieceKind::King),
        (pawn_offsets.as_slice(), PieceKind::Pawn),
    ];
    for (offsets, kind) in probes {
        for offset in offsets {
            if let Some(from) = square.offset(offset.0, offset.1) {
                if view.piece_at(from) == Some(Piece::new(attacker, kind)) {
                    return true;
                }
            }
        }
    }

    false
}

/// Is the king of `color` currently attacked?
pub fn is_king_in_check(game: &GameState, color: Color) -> bool {
    is_square_attacked(
        &BoardView::new(game),
        game.king_square(color),
        color.opposite(),
    )
}
