use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::GenerationContext;
use crate::moves::chess_move::Move;
use crate::moves::directions::KNIGHT_OFFSETS;

pub fn generate_knight_moves(ctx: &GenerationContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    // A pinned knight can never stay on its pin ray.
    if ctx.is_pinned(from) {
        return;
    }
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match ctx.game.piece_at(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != ctx.color => {
                out.push(Move::new(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::detect_pins_and_checks;
    use crate::utils::long_algebraic::square_from_algebraic;

    fn knight_moves(fen: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).unwrap();
        let pins = detect_pins_and_checks(&game, game.king_square(Color::Light), Color::Light);
        let ctx = GenerationContext::legal(&game, &pins);
        let from = square_from_algebraic(from).unwrap();
        let mut out = Vec::new();
        generate_knight_moves(&ctx, from, game.piece_at(from).unwrap(), &mut out);
        out
    }

    #[test]
    fn corner_knight() {
        let moves = knight_moves("4k3/8/8/8/8/8/2p5/N3K3 w - - 0 1", "a1");
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }

    #[test]
    fn pinned_knight_is_frozen() {
        let moves = knight_moves("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }
}
