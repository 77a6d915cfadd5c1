//! Canonical chess-rule constants.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings on their home squares (e-file).
pub const KING_HOME_COL: u8 = 4;
/// Column of the kingside rook on its home square (h-file).
pub const KINGSIDE_ROOK_COL: u8 = 7;
/// Column of the queenside rook on its home square (a-file).
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Column the king lands on when castling kingside (g-file).
pub const KINGSIDE_CASTLE_KING_COL: u8 = 6;
/// Column the king lands on when castling queenside (c-file).
pub const QUEENSIDE_CASTLE_KING_COL: u8 = 2;
