use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Top-level game configuration, loadable from TOML.
///
/// Everything the engine needs is passed in through this struct; nothing is
/// read from globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    pub ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            ai: AiConfig::default(),
        }
    }
}

/// Computer opponent tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Chebyshev distance from existing stones for candidate cells
    pub candidate_radius: usize,
    /// Candidates sampled by the random (Beginner) strategy
    pub random_limit: usize,
    /// Candidates scanned when looking for an immediate win or block
    pub win_scan_limit: usize,
    /// Candidates scored by the heuristic strategy
    pub heuristic_limit: usize,
    /// Seed for the random strategy; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            candidate_radius: 2,
            random_limit: 30,
            win_scan_limit: 50,
            heuristic_limit: 30,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )));
        }
        if self.ai.candidate_radius == 0 {
            return Err(ConfigError::Validation(
                "ai.candidate_radius must be > 0".into(),
            ));
        }
        if self.ai.random_limit == 0 || self.ai.win_scan_limit == 0 || self.ai.heuristic_limit == 0 {
            return Err(ConfigError::Validation(
                "ai candidate limits must be > 0".into(),
            ));
        }
        Ok(())
    }
}
