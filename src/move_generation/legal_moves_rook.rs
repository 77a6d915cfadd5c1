//! Rook move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, GenerationContext};
use crate::moves::chess_move::Move;
use crate::moves::directions::ORTHOGONAL;

pub fn generate_rook_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(ctx, from, piece, &ORTHOGONAL, out);
}
