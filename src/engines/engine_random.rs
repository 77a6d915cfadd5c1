//! Random-move engine.
//!
//! Selects uniformly from legal moves. Serves as the weakest opponent setting
//! and as the fallback whenever another engine cannot name a move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    pub fn pick(&mut self, legal_moves: &[Move]) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        _game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = self
            .pick(legal_moves)
            .ok_or_else(|| ChessErrors::EngineFailure("failed to choose a random move".to_owned()))?;
        out.best_move = Some(picked);
        Ok(out)
    }
}
