//! Host notifications emitted by the game session.

use chrono::TimeDelta;

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const MAX_FINAL_SCORE: i64 = 1500;
pub const MIN_FINAL_SCORE: i64 = 250;
/// Points lost per elapsed second.
pub const SCORE_DECAY_PER_SECOND: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveMade(Move),
    Capture(Move),
    /// The side now to move is in check.
    Check(Color),
    /// Sent once per game. `score` is non-zero only for a human checkmate win.
    GameOver { outcome: GameOutcome, score: i64 },
}

/// Receives session events (sound, UI, score submission).
///
/// Errors are logged by the session and otherwise ignored.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent) -> ChessResult<()>;
}

/// Score for a checkmate win after `elapsed` play time.
pub fn final_score(elapsed: TimeDelta) -> i64 {
    let seconds = elapsed.num_seconds().max(0);
    (MAX_FINAL_SCORE - SCORE_DECAY_PER_SECOND * seconds).clamp(MIN_FINAL_SCORE, MAX_FINAL_SCORE)
}
