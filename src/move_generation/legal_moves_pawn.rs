//! Pawn move generation: pushes, captures, promotion and en passant.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, BoardView};
use crate::move_generation::legal_move_shared::GenerationContext;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let forward = ctx.color.pawn_direction();

    if ctx.pin_allows(from, (forward, 0)) {
        if let Some(one_step) = from.offset(forward, 0) {
            if ctx.game.piece_at(one_step).is_none() {
                push_pawn_move(ctx, from, one_step, piece, None, out);

                if from.row == ctx.color.pawn_start_row() {
                    if let Some(two_step) = from.offset(2 * forward, 0) {
                        if ctx.game.piece_at(two_step).is_none() {
                            out.push(Move::new(from, two_step, piece, None));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        if !ctx.pin_allows(from, (forward, d_col)) {
            continue;
        }
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        if let Some(target) = ctx.enemy_on(to) {
            push_pawn_move(ctx, from, to, piece, Some(target), out);
        } else if ctx.game.en_passant_target() == Some(to) {
            let mv = Move::en_passant(from, to, piece);
            if ctx.game.piece_at(mv.capture_square()) != mv.piece_captured {
                continue;
            }
            if ctx.is_legal_pass() && en_passant_exposes_king(ctx.game, &mv) {
                continue;
            }
            out.push(mv);
        }
    }
}

fn push_pawn_move(
    ctx: &GenerationContext<'_>,
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    out: &mut Vec<Move>,
) {
    if to.row == ctx.color.promotion_row() {
        out.push(Move::promotion(from, to, piece, captured));
    } else {
        out.push(Move::new(from, to, piece, captured));
    }
}

/// Discovered-check test for en passant.
///
/// Both pawns leave their rank at once, which the single-piece pin scan
/// cannot see (e.g. king and enemy rook on the same rank with only the two
/// pawns between them). Probe the king with both pawns lifted and the
/// capturer on the target square.
pub fn en_passant_exposes_king(game: &GameState, mv: &Move) -> bool {
    let color = mv.piece_moved.color;
    let overrides = [
        (mv.start, None),
        (mv.capture_square(), None),
        (mv.end, Some(mv.piece_moved)),
    ];
    let view = BoardView::with_overrides(game, &overrides);
    is_square_attacked(&view, game.king_square(color), color.opposite())
}
