//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type of the crate. Move generation and
//! search never fail; errors come from parsing input (FEN, algebraic squares,
//! configuration), from positions that break the board invariants, and from
//! engines or host observers. Illegal move attempts are not errors: the
//! session reports them with a `false` return value.

use thiserror::Error;

/// Unified error type for the chess engine.
#[derive(Debug, Error)]
pub enum ChessErrors {
    /// A FEN string could not be interpreted as a position.
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// A square or move in algebraic notation failed to parse.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The position breaks a board invariant (for example a missing king).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An engine could not produce a move.
    #[error("engine failure: {0}")]
    EngineFailure(String),

    /// A host observer rejected a notification.
    #[error("notification failed: {0}")]
    NotificationFailed(String),

    /// Session configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a config file or the terminal failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration could not be parsed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used by fallible engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
