//! Run configuration.
//!
//! A [`Config`] bundles the starting player with solver and self-play
//! settings. It can be loaded from a JSON file; every field is optional and
//! falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Player;
use crate::selfplay::SelfPlayConfig;
use crate::solve::{SolveError, SolverConfig};

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid solver settings: {0}")]
    Solver(#[from] SolveError),
}

/// Complete configuration for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player to move on the empty board.
    pub start: Player,
    pub solver: SolverConfig,
    pub selfplay: SelfPlayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: Player::X,
            solver: SolverConfig::default(),
            selfplay: SelfPlayConfig::default(),
        }
    }
}

/// Loads and validates a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads and validates a configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(json)?;
    config.solver.validate()?;
    Ok(config)
}
