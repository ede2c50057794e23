// Asset management system
//
// Loads and caches images and text from the assets directory, and runs the
// startup load on a background thread so the window can wait on it with a
// deadline.

mod loader;
mod manager;
mod pending;
mod sprite;

pub use loader::{AssetLoader, AssetType};
pub use manager::AssetManager;
pub use pending::PendingAssets;
pub use sprite::SpriteSheet;

use std::path::PathBuf;
use std::time::Duration;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid sprite sheet {name}: {reason}")]
    InvalidSpriteSheet { name: String, reason: String },

    #[error("Asset loading did not finish within {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
