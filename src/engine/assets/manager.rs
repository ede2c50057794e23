// Central asset cache

use super::{AssetError, AssetLoader, AssetType, SpriteSheet};
use image::RgbaImage;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Loads assets through an [`AssetLoader`] and keeps decoded images so
/// repeated requests share pixels
pub struct AssetManager {
    loader: AssetLoader,

    /// Decoded images keyed by type and name
    images: HashMap<(AssetType, String), Arc<RgbaImage>>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        info!("Asset root: {}", asset_path.as_ref().display());
        Self {
            loader: AssetLoader::new(asset_path),
            images: HashMap::new(),
        }
    }

    /// Load an image, returning the cached copy when already loaded
    pub fn image(&mut self, asset_type: AssetType, name: &str) -> Result<Arc<RgbaImage>, AssetError> {
        let key = (asset_type, name.to_string());
        if let Some(image) = self.images.get(&key) {
            return Ok(Arc::clone(image));
        }

        let image = Arc::new(self.loader.load_image(asset_type, name)?);
        debug!(
            "Loaded {:?} image {} ({}x{})",
            asset_type,
            name,
            image.width(),
            image.height()
        );
        self.images.insert(key, Arc::clone(&image));
        Ok(image)
    }

    /// Load an image that may legitimately be absent
    pub fn optional_image(
        &mut self,
        asset_type: AssetType,
        name: &str,
    ) -> Result<Option<Arc<RgbaImage>>, AssetError> {
        match self.image(asset_type, name) {
            Ok(image) => Ok(Some(image)),
            Err(AssetError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load an animation strip
    pub fn sprite_sheet(
        &mut self,
        asset_type: AssetType,
        name: &str,
        frames: u32,
    ) -> Result<SpriteSheet, AssetError> {
        let image = self.image(asset_type, name)?;
        SpriteSheet::new(name, image, frames)
    }

    /// Load a text asset (not cached)
    pub fn text(&self, asset_type: AssetType, name: &str) -> Result<String, AssetError> {
        self.loader.load_text(asset_type, name)
    }

    /// Load a text asset that may legitimately be absent
    pub fn optional_text(&self, asset_type: AssetType, name: &str) -> Result<Option<String>, AssetError> {
        match self.text(asset_type, name) {
            Ok(text) => Ok(Some(text)),
            Err(AssetError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            image_count: self.images.len(),
            image_bytes: self.images.values().map(|i| i.as_raw().len()).sum(),
        }
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy)]
pub struct AssetStats {
    pub image_count: usize,
    pub image_bytes: usize,
}
