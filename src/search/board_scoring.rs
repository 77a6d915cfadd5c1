//! Board evaluation for the alpha-beta search.
//!
//! Scores are always from Light's point of view: positive favours Light.
//! Static evaluation goes through the [`BoardScorer`] trait so search code
//! does not depend on a particular heuristic; terminal positions are scored
//! separately by [`terminal_score`].

use crate::game_state::chess_types::*;

/// Magnitude of a checkmate score.
pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer {
    /// Static score of a non-terminal position, Light minus Dark.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Pure material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        material_score(game_state)
    }
}

/// Signed material balance, Light minus Dark.
pub fn material_score(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(_, piece)| {
            let value = MaterialScorer::piece_value(piece.kind);
            match piece.color {
                Color::Light => value,
                Color::Dark => -value,
            }
        })
        .sum()
}

/// Score of a position where `side_to_move` has no legal moves.
pub fn terminal_score(side_to_move: Color, in_check: bool) -> i32 {
    if !in_check {
        return STALEMATE_SCORE;
    }
    match side_to_move {
        Color::Light => -CHECKMATE_SCORE,
        Color::Dark => CHECKMATE_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(material_score(&GameState::new_game()), 0);
    }

    #[test]
    fn material_counts_by_color() {
        // Light: queen + pawn, Dark: rook + knight.
        let game = GameState::from_fen("3rk3/8/2n5/8/8/8/4P3/3QK3 w - - 0 1").unwrap();
        assert_eq!(MaterialScorer.score(&game), 10 - 8);
    }

    #[test]
    fn terminal_scores() {
        assert_eq!(terminal_score(Color::Light, true), -CHECKMATE_SCORE);
        assert_eq!(terminal_score(Color::Dark, true), CHECKMATE_SCORE);
        assert_eq!(terminal_score(Color::Dark, false), STALEMATE_SCORE);
    }
}
