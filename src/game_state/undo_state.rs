use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record pushed by `apply_move` and popped by `undo_last`.
///
/// Holds the applied move together with the castling rights and en-passant
/// target that were in force before it, so undo restores them in O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
