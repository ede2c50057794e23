// Horizontal animation strips

use super::AssetError;
use crate::core::math::Rect;
use image::RgbaImage;
use std::sync::Arc;

/// An image holding `frames` equally wide animation frames side by side
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: Arc<RgbaImage>,
    frames: u32,
}

impl SpriteSheet {
    /// Wrap a decoded strip; its width must split evenly into `frames`
    pub fn new(name: &str, image: Arc<RgbaImage>, frames: u32) -> Result<Self, AssetError> {
        let invalid = |reason: String| AssetError::InvalidSpriteSheet {
            name: name.to_string(),
            reason,
        };

        if frames == 0 {
            return Err(invalid("frame count must be at least 1".to_string()));
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(invalid("image is empty".to_string()));
        }
        if image.width() % frames != 0 {
            return Err(invalid(format!(
                "width {} does not split into {} frames",
                image.width(),
                frames
            )));
        }

        Ok(Self { image, frames })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn frame_width(&self) -> f32 {
        (self.image.width() / self.frames) as f32
    }

    pub fn frame_height(&self) -> f32 {
        self.image.height() as f32
    }

    /// Source rectangle of a frame; indices wrap around the strip
    pub fn frame_rect(&self, index: u32) -> Rect {
        let index = index % self.frames;
        Rect::new(
            index as f32 * self.frame_width(),
            0.0,
            self.frame_width(),
            self.frame_height(),
        )
    }
}
