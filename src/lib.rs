//! Crate root module declarations for the arcade chess game.
//!
//! This file exposes the board model, legal move generation, alpha-beta
//! search, opponent engines, the game session controller and utility
//! helpers so the terminal front end, tests and benches share stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod directions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod notifications;
    pub mod session_config;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
