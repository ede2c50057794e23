// Asset loading functionality

use super::AssetError;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Kinds of assets and the directories they live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    /// Static images: platform tile, exit door, background
    Image,
    /// Per-character animation strips
    Character,
    /// Text tile maps
    Level,
    /// Dialogue scripts
    Dialogue,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Image => "img",
            AssetType::Character => "characters",
            AssetType::Level => "levels",
            AssetType::Dialogue => "dialogue",
        }
    }
}

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, asset_type: AssetType, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(asset_type, name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to read {}: {}", name, e)))
    }

    /// Load a UTF-8 text asset
    pub fn load_text(&self, asset_type: AssetType, name: &str) -> Result<String, AssetError> {
        let bytes = self.load_bytes(asset_type, name)?;
        String::from_utf8(bytes)
            .map_err(|e| AssetError::LoadError(format!("{} is not valid UTF-8: {}", name, e)))
    }

    /// Load and decode an image into RGBA pixels
    pub fn load_image(&self, asset_type: AssetType, name: &str) -> Result<RgbaImage, AssetError> {
        let bytes = self.load_bytes(asset_type, name)?;
        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: self.resolve_path(asset_type, name),
            source,
        })?;
        Ok(image.to_rgba8())
    }
}
