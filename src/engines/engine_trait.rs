//! Engine abstraction used by the game session.
//!
//! An engine picks one move for the side to move. It may walk the board it
//! is handed through apply/undo but must leave it as it found it; the
//! session applies the chosen move itself.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose among `legal_moves`, the legal moves of `game_state`.
    ///
    /// `best_move` is `None` only when `legal_moves` is empty.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput>;
}
