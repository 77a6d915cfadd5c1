use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, GenerationContext};
use crate::moves::chess_move::Move;
use crate::moves::directions::DIAGONAL;

pub fn generate_bishop_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(ctx, from, piece, &DIAGONAL, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::detect_pins_and_checks;
    use crate::utils::long_algebraic::square_from_algebraic;

    #[test]
    fn pinned_bishop_slides_along_pin() {
        let game = GameState::from_fen("6k1/8/8/8/8/2q5/3B4/4K3 w - - 0 1").unwrap();
        let pins = detect_pins_and_checks(&game, game.king_square(Color::Light), Color::Light);
        let ctx = GenerationContext::legal(&game, &pins);
        let from = square_from_algebraic("d2").unwrap();
        let mut out = Vec::new();
        generate_bishop_moves(&ctx, from, game.piece_at(from).unwrap(), &mut out);
        let targets: Vec<String> = out.iter().map(|m| m.end.to_string()).collect();
        assert_eq!(targets, vec!["c3"]);
        assert!(out[0].is_capture());

        let mut pseudo = Vec::new();
        generate_bishop_moves(&GenerationContext::pseudo(&game), from, game.piece_at(from).unwrap(), &mut pseudo);
        // c3, e3 f4 g5 h6, c1
        assert_eq!(pseudo.len(), 6);
    }
}
