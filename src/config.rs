//! Game configuration loaded from `config.json`
//!
//! Every section and field is optional; anything missing takes its default.
//! Unknown keys (such as `"_comment"` annotations) are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{DEFAULT_BOARD_SIZE, WIN_LENGTH};
use crate::engine::Difficulty;
use crate::search::DEFAULT_SEARCH_DEPTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board size {0} is too small (minimum 5)")]
    InvalidBoardSize(usize),
}

/// RGB triple
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Intersections per side
    pub size: usize,
    /// Pixels between grid lines
    pub cell_size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cell_size: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub board: Rgb,
    pub black: Rgb,
    pub white: Rgb,
    pub text: Rgb,
    pub win_text: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            board: [220, 179, 92],
            black: [0, 0, 0],
            white: [255, 255, 255],
            text: [0, 0, 0],
            win_text: [255, 0, 0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub default_difficulty: Difficulty,
    /// Plies searched on Hard
    pub search_depth: u8,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Easy,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: u32,
    /// Font file stem looked up in the system font directories; egui's
    /// default font is used when it is not found
    pub name: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 24,
            name: "simhei".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub colors: ColorConfig,
    pub ai: AiConfig,
    pub font: FontConfig,
}

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validated()
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    ///
    /// Unreadable or malformed files are still errors.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found, using default config", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.board.size < WIN_LENGTH {
            return Err(ConfigError::InvalidBoardSize(self.board.size));
        }
        self.ai.search_depth = self.ai.search_depth.max(1);
        Ok(self)
    }
}
