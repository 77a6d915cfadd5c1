//! Session configuration.
//!
//! Loaded from JSON by hosts that want persistent settings; every field has
//! a default so a partial file (or none at all) is fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::alpha_beta::DEFAULT_SEARCH_DEPTH;

/// Which engine plays the computer side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side played by the engine; `None` for two human players.
    pub engine_color: Option<Color>,
    pub opponent: Opponent,
    /// Ignored by the random opponent.
    pub search_depth: u8,
    /// Fixed engine seed for reproducible games; random when absent.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine_color: Some(Color::Dark),
            opponent: Opponent::Minimax,
            search_depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }

    pub fn validate(&self) -> ChessResult<()> {
        if self.search_depth == 0 {
            return Err(ChessErrors::InvalidConfig(
                "search_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
