//! Alpha-beta opponent engine.
//!
//! Runs [`search_best_move`] at a fixed depth over a shuffled root. If the
//! search marks no best move although moves exist (every line scores as
//! lost), it falls back to a uniformly random legal move so the game keeps
//! going.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{search_best_move, SearchConfig};
use crate::search::board_scoring::MaterialScorer;

pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: MaterialScorer,
    rng: StdRng,
    fallback: RandomEngine,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
            scorer: MaterialScorer,
            rng: StdRng::from_os_rng(),
            fallback: RandomEngine::new(),
        }
    }

    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self {
            config: SearchConfig { depth },
            scorer: MaterialScorer,
            rng: StdRng::seed_from_u64(seed),
            fallback: RandomEngine::with_seed(seed),
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            scorer: MaterialScorer,
            rng: StdRng::from_os_rng(),
            fallback: RandomEngine::new(),
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let outcome = search_best_move(
            game_state,
            legal_moves,
            self.config,
            &self.scorer,
            &mut self.rng,
        );
        out.info_lines.push(format!(
            "minimax depth {} score {} nodes {}",
            self.config.depth, outcome.score, outcome.nodes
        ));

        let chosen = match outcome.best_move {
            Some(mv) => mv,
            None => {
                warn!(
                    score = outcome.score,
                    legal = legal_moves.len(),
                    "search marked no best move, playing a random one"
                );
                self.fallback
                    .pick(legal_moves)
                    .ok_or_else(|| ChessErrors::EngineFailure("no move to fall back on".to_owned()))?
            }
        };

        debug!(mv = %chosen, score = outcome.score, "engine chose move");
        out.best_move = Some(chosen);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn takes_hanging_queen() {
        let mut game = GameState::from_fen("4k3/8/2n5/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
        let legal = legal_moves(&game).moves;
        let mut engine = MinimaxEngine::with_seed(1, 5);
        let out = engine.choose_move(&mut game, &legal).unwrap();
        assert_eq!(out.best_move.unwrap().to_long_algebraic(), "c6d4");
    }

    #[test]
    fn falls_back_when_every_line_loses() {
        let fen = "k7/8/2K5/8/8/8/8/1Q6 b - - 0 1";
        let mut game = GameState::from_fen(fen).unwrap();
        let legal = legal_moves(&game).moves;
        let mut engine = MinimaxEngine::with_seed(2, 9);
        let out = engine.choose_move(&mut game, &legal).unwrap();
        assert!(legal.contains(&out.best_move.unwrap()));
        assert_eq!(game.get_fen(), fen);

        // Seeded fallbacks repeat.
        let again = MinimaxEngine::with_seed(2, 9).choose_move(&mut game, &legal).unwrap();
        assert_eq!(again.best_move, out.best_move);
    }
}
