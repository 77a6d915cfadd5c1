//! Full legal move generation pipeline.
//!
//! Pins and checks against the side to move are detected once, then every
//! own piece is dispatched to its per-piece generator. King safety is
//! handled inside the generators (pins, king probes, en passant discovery),
//! so the only filter left here is check evasion: in single check a
//! non-king move must capture the checker or block its ray, and in double
//! check only the king may move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{detect_pins_and_checks, PinsAndChecks};
use crate::move_generation::legal_move_shared::GenerationContext;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Legal moves of the side to move, plus whether that side is in check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    pub moves: Vec<Move>,
    pub in_check: bool,
}

impl MoveList {
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.moves.is_empty()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check && self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

fn generate_for_all_pieces(ctx: &GenerationContext<'_>, out: &mut Vec<Move>) {
    for (from, piece) in ctx.game.pieces() {
        if piece.color != ctx.color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(ctx, from, piece, out),
            PieceKind::Knight => generate_knight_moves(ctx, from, piece, out),
            PieceKind::Bishop => generate_bishop_moves(ctx, from, piece, out),
            PieceKind::Rook => generate_rook_moves(ctx, from, piece, out),
            PieceKind::Queen => generate_queen_moves(ctx, from, piece, out),
            PieceKind::King => generate_king_moves(ctx, from, piece, out),
        }
    }
}

/// Movement-rule moves ignoring king safety.
///
/// Castling here still needs the right, home squares and empty between
/// squares, but not the attack tests.
pub fn pseudo_moves(game: &GameState) -> Vec<Move> {
    let ctx = GenerationContext::pseudo(game);
    let mut out = Vec::with_capacity(64);
    generate_for_all_pieces(&ctx, &mut out);
    out
}

/// Every legal move of the side to move.
///
/// Pure in `game`: calling it twice on the same position yields the same
/// list in the same order.
pub fn legal_moves(game: &GameState) -> MoveList {
    let color = game.side_to_move();
    let king = game.king_square(color);
    let pins = detect_pins_and_checks(game, king, color);

    let ctx = GenerationContext::legal(game, &pins);
    let mut moves = Vec::with_capacity(64);
    generate_for_all_pieces(&ctx, &mut moves);

    if pins.in_check() {
        retain_evasions(&mut moves, &pins, king);
    }

    MoveList {
        moves,
        in_check: pins.in_check(),
    }
}

fn retain_evasions(moves: &mut Vec<Move>, pins: &PinsAndChecks, king: Square) {
    if pins.is_double_check() {
        moves.retain(|mv| mv.piece_moved.kind == PieceKind::King);
        return;
    }
    let Some(check) = pins.checks.first() else {
        return;
    };
    moves.retain(|mv| {
        mv.piece_moved.kind == PieceKind::King
            || check.is_resolved_by(king, mv.end)
            || (mv.is_en_passant && mv.capture_square() == check.origin)
    });
}
