//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Light maximises and Dark minimises the Light-relative score from
//! [`BoardScorer`]. The search walks the caller's board in place through
//! `apply_move` / `undo_last`, so the position is unchanged on return
//! whatever cutoffs happened along the way.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{legal_moves, MoveList};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{terminal_score, BoardScorer, CHECKMATE_SCORE};

pub const DEFAULT_SEARCH_DEPTH: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when no root move ever beat the opening sentinel.
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

struct AlphaBeta<'s, S: BoardScorer> {
    scorer: &'s S,
    root_depth: u8,
    best_move: Option<Move>,
    nodes: u64,
}

impl<S: BoardScorer> AlphaBeta<'_, S> {
    fn minimax(
        &mut self,
        game: &mut GameState,
        moves: &MoveList,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if moves.is_empty() {
            return terminal_score(game.side_to_move(), moves.in_check);
        }
        if depth == 0 {
            return self.scorer.score(game);
        }

        let maximizing = game.side_to_move() == Color::Light;
        let mut best_score = if maximizing {
            -CHECKMATE_SCORE
        } else {
            CHECKMATE_SCORE
        };

        for mv in &moves.moves {
            game.apply_move(mv);
            let replies = legal_moves(game);
            let score = self.minimax(game, &replies, depth - 1, alpha, beta);
            game.undo_last();

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                if depth == self.root_depth {
                    self.best_move = Some(*mv);
                }
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        best_score
    }
}

/// Pick a move for the side to move in `game` from `legal`.
///
/// Root moves are shuffled with `rng` first, so equally scored moves are
/// chosen at random while the first move reaching the best score wins
/// within one ordering. `depth` is clamped to at least one ply.
pub fn search_best_move<S: BoardScorer, R: Rng + ?Sized>(
    game: &mut GameState,
    legal: &[Move],
    config: SearchConfig,
    scorer: &S,
    rng: &mut R,
) -> SearchOutcome {
    let depth = config.depth.max(1);
    let mut root = MoveList {
        moves: legal.to_vec(),
        in_check: false,
    };
    root.moves.shuffle(rng);
    if root.moves.is_empty() {
        root.in_check = legal_moves(game).in_check;
    }

    let mut search = AlphaBeta {
        scorer,
        root_depth: depth,
        best_move: None,
        nodes: 0,
    };
    let score = search.minimax(game, &root, depth, -CHECKMATE_SCORE, CHECKMATE_SCORE);

    trace!(
        depth,
        nodes = search.nodes,
        score,
        best = ?search.best_move.map(|m| m.to_long_algebraic()),
        "alpha-beta search finished"
    );

    SearchOutcome {
        best_move: search.best_move,
        score,
        nodes: search.nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{material_score, MaterialScorer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn search(fen: &str, depth: u8, seed: u64) -> (GameState, SearchOutcome) {
        let mut game = GameState::from_fen(fen).unwrap();
        let legal = legal_moves(&game).moves;
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = search_best_move(&mut game, &legal, SearchConfig { depth }, &MaterialScorer, &mut rng);
        (game, outcome)
    }

    fn material_after(game: &GameState, mv: &Move) -> i32 {
        let mut next = game.clone();
        next.apply_move(mv);
        material_score(&next)
    }

    #[test]
    fn depth_one_picks_a_best_material_move() {
        // Dark to move can take the queen on d4 with the knight or the pawn.
        let fen = "4k3/8/2n5/4p3/3Q4/8/8/4K3 b - - 0 1";
        for seed in 0..8 {
            let (game, outcome) = search(fen, 1, seed);
            let chosen = outcome.best_move.unwrap();
            let chosen_score = material_after(&game, &chosen);
            for other in legal_moves(&game).moves {
                assert!(chosen_score <= material_after(&game, &other));
            }
            assert_eq!(outcome.score, chosen_score);
        }
    }

    #[test]
    fn board_is_restored_after_search() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let before = GameState::from_fen(fen).unwrap();
        let (after, outcome) = search(fen, 2, 7);
        assert_eq!(after, before);
        assert!(outcome.best_move.is_some());
        assert!(outcome.nodes > 48);
    }

    #[test]
    fn finds_mate_in_one() {
        let (_, outcome) = search("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1", 1, 3);
        assert_eq!(outcome.best_move.unwrap().to_long_algebraic(), "d1d8");
        assert_eq!(outcome.score, CHECKMATE_SCORE);
    }

    #[test]
    fn stalemate_is_worth_nothing_at_depth() {
        // Qf7 stalemates while Qf8 mates.
        let (game, outcome) = search("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1", 2, 11);
        let chosen = outcome.best_move.unwrap();
        let mut next = game.clone();
        next.apply_move(&chosen);
        assert!(!legal_moves(&next).is_stalemate());
    }

    #[test]
    fn lost_position_marks_no_best_move() {
        // Ka7 is forced and Qb7 mates, so nothing beats the opening sentinel.
        let (_, outcome) = search("k7/8/2K5/8/8/8/8/1Q6 b - - 0 1", 2, 0);
        assert_eq!(outcome.score, CHECKMATE_SCORE);
        assert!(outcome.best_move.is_none());
    }
}
