// Runtime configuration
//
// Priority: command-line flags, then the JSON config file, then defaults.

use super::events::DEFAULT_REVEAL_INTERVAL_MS;
use crate::engine::physics::DEFAULT_GRAVITY;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default startup deadline for asset loading
pub const DEFAULT_ASSET_TIMEOUT_SECS: f32 = 10.0;

/// Longest accepted startup deadline
pub const MAX_ASSET_TIMEOUT_SECS: f32 = 3600.0;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Root of the assets directory
    pub assets_root: PathBuf,
    /// Level file name inside `levels/`
    pub level: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    /// Downward acceleration in pixels per tick squared
    pub gravity: f32,
    /// Milliseconds between revealed dialogue characters
    pub reveal_interval_ms: f32,
    /// How long startup waits for assets
    pub asset_timeout_secs: f32,
    /// Start with the debug overlay on
    pub show_debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            level: "level1.txt".to_string(),
            viewport_width: 800,
            viewport_height: 600,
            tile_width: 24.0,
            tile_height: 24.0,
            gravity: DEFAULT_GRAVITY,
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            asset_timeout_secs: DEFAULT_ASSET_TIMEOUT_SECS,
            show_debug: false,
        }
    }
}

impl GameConfig {
    /// Load a config file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Build the effective config from command-line arguments
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(assets) = &args.assets {
            config.assets_root = assets.clone();
        }
        if let Some(level) = &args.level {
            config.level = level.clone();
        }
        if args.debug {
            config.show_debug = true;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tiles must have a positive size, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if !(self.asset_timeout_secs > 0.0 && self.asset_timeout_secs <= MAX_ASSET_TIMEOUT_SECS) {
            return Err(ConfigError::Invalid(format!(
                "asset_timeout_secs must be in (0, {}], got {}",
                MAX_ASSET_TIMEOUT_SECS, self.asset_timeout_secs
            )));
        }
        Ok(())
    }

    pub fn asset_timeout(&self) -> Duration {
        Duration::try_from_secs_f32(self.asset_timeout_secs)
            .unwrap_or(Duration::from_secs_f32(DEFAULT_ASSET_TIMEOUT_SECS))
    }
}

/// Command-line flags
#[derive(Debug, Default, Parser)]
#[command(name = "critter-escape")]
#[command(about = "Side-scrolling platformer with three switchable characters")]
#[command(version)]
pub struct CliArgs {
    /// Assets directory
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Level file inside the assets' levels/ directory
    #[arg(long)]
    pub level: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the debug overlay enabled
    #[arg(long)]
    pub debug: bool,
}
