//! Perft: exhaustive legal-move tree counting used to verify the generator.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes `depth` plies below `game`, walking the tree in place.
///
/// Move-type tallies describe the final ply only, matching the usual perft
/// tables. The board is back in its starting state on return.
pub fn perft(game: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = legal_moves(game).moves;
    let mut total = PerftCounts::default();

    for mv in moves {
        game.apply_move(&mv);
        if depth == 1 {
            let replies = legal_moves(game);
            total.merge(PerftCounts {
                nodes: 1,
                captures: usize::from(mv.is_capture()),
                en_passant: usize::from(mv.is_en_passant),
                castles: usize::from(mv.is_castle),
                promotions: usize::from(mv.is_promotion),
                checks: usize::from(replies.in_check),
                checkmates: usize::from(replies.is_checkmate()),
            });
        } else {
            total.merge(perft(game, depth - 1));
        }
        game.undo_last();
    }

    total
}

/// Leaf count below each root move, keyed by long algebraic text.
pub fn perft_divide(game: &mut GameState, depth: u8) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in legal_moves(game).moves {
        game.apply_move(&mv);
        out.push((mv.to_long_algebraic(), perft(game, depth - 1).nodes));
        game.undo_last();
    }
    out
}
