use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, GenerationContext};
use crate::moves::chess_move::Move;
use crate::moves::directions::ALL_RAYS;

pub fn generate_queen_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(ctx, from, piece, &ALL_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::detect_pins_and_checks;
    use crate::utils::long_algebraic::square_from_algebraic;

    #[test]
    fn pinned_queen_keeps_both_pin_directions() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4Q3/4K3 w - - 0 1").unwrap();
        let pins = detect_pins_and_checks(&game, game.king_square(Color::Light), Color::Light);
        let ctx = GenerationContext::legal(&game, &pins);
        let from = square_from_algebraic("e2").unwrap();
        let mut out = Vec::new();
        generate_queen_moves(&ctx, from, game.piece_at(from).unwrap(), &mut out);
        // e3..e8 towards the rook, nothing sideways or diagonal.
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|m| m.end.col == 4));
    }
}
