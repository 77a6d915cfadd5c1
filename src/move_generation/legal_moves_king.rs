use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_KING_COL, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_CASTLE_KING_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_square_attacked, BoardView};
use crate::move_generation::legal_move_shared::GenerationContext;
use crate::moves::chess_move::Move;
use crate::moves::directions::KING_OFFSETS;

pub fn generate_king_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        let target = ctx.game.piece_at(to);
        if target.is_some_and(|p| p.color == ctx.color) {
            continue;
        }
        if ctx.is_legal_pass() && king_would_be_attacked(ctx.game, from, to, piece) {
            continue;
        }
        out.push(Move::new(from, to, piece, target));
    }

    generate_castling_moves(ctx, from, piece, out);
}

/// Probe `to` as if the king stood there with its origin vacated.
fn king_would_be_attacked(game: &GameState, from: Square, to: Square, king: Piece) -> bool {
    let overrides = [(from, None), (to, Some(king))];
    let view = BoardView::with_overrides(game, &overrides);
    is_square_attacked(&view, to, king.color.opposite())
}

fn generate_castling_moves(ctx: &GenerationContext<'_>, from: Square, king: Piece, out: &mut Vec<Move>) {
    let color = ctx.color;
    let row = color.home_row();
    if from != Square::new(row, KING_HOME_COL) {
        return;
    }

    let rights = ctx.game.castling_rights();
    let view = BoardView::new(ctx.game);
    let enemy = color.opposite();
    let attacked = |col: u8| is_square_attacked(&view, Square::new(row, col), enemy);

    // Cannot castle out of check.
    if ctx.is_legal_pass() && attacked(KING_HOME_COL) {
        return;
    }

    let own_rook = Some(Piece::new(color, PieceKind::Rook));
    let is_empty = |col: u8| ctx.game.piece_at(Square::new(row, col)).is_none();

    if rights.kingside(color)
        && ctx.game.piece_at(Square::new(row, KINGSIDE_ROOK_COL)) == own_rook
        && (KING_HOME_COL + 1..KINGSIDE_ROOK_COL).all(is_empty)
        && (!ctx.is_legal_pass() || !(KING_HOME_COL + 1..=KINGSIDE_CASTLE_KING_COL).any(attacked))
    {
        out.push(Move::castle(from, Square::new(row, KINGSIDE_CASTLE_KING_COL), king));
    }

    if rights.queenside(color)
        && ctx.game.piece_at(Square::new(row, QUEENSIDE_ROOK_COL)) == own_rook
        && (QUEENSIDE_ROOK_COL + 1..KING_HOME_COL).all(is_empty)
        && (!ctx.is_legal_pass() || !(QUEENSIDE_CASTLE_KING_COL..KING_HOME_COL).any(attacked))
    {
        out.push(Move::castle(from, Square::new(row, QUEENSIDE_CASTLE_KING_COL), king));
    }
}
