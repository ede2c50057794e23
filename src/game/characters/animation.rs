// Character animation: strip table and tick-driven frame cycling

use super::state::AnimState;
use crate::engine::assets::{AssetError, SpriteSheet};

/// One strip per animation state, all with the same frame size and count
#[derive(Debug, Clone)]
pub struct SpriteSet {
    sheets: [SpriteSheet; 4],
}

impl SpriteSet {
    /// Build from strips in [`AnimState::ALL`] order
    pub fn new(name: &str, sheets: [SpriteSheet; 4]) -> Result<Self, AssetError> {
        let first = &sheets[0];
        for (state, sheet) in AnimState::ALL.iter().zip(sheets.iter()) {
            if sheet.frames() != first.frames()
                || sheet.frame_width() != first.frame_width()
                || sheet.frame_height() != first.frame_height()
            {
                return Err(AssetError::InvalidSpriteSheet {
                    name: format!("{}/{}", name, state.file_name()),
                    reason: format!(
                        "{} frames of {}x{} do not match Idle ({} frames of {}x{})",
                        sheet.frames(),
                        sheet.frame_width(),
                        sheet.frame_height(),
                        first.frames(),
                        first.frame_width(),
                        first.frame_height()
                    ),
                });
            }
        }
        Ok(Self { sheets })
    }

    pub fn get(&self, state: AnimState) -> &SpriteSheet {
        &self.sheets[state.index()]
    }

    pub fn frame_width(&self) -> f32 {
        self.sheets[0].frame_width()
    }

    pub fn frame_height(&self) -> f32 {
        self.sheets[0].frame_height()
    }

    pub fn total_frames(&self) -> u32 {
        self.sheets[0].frames()
    }
}

/// Advances the frame index once every `animation_speed` ticks.
///
/// The index is shared by all strips and keeps running across state
/// changes.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    frame_index: u32,
    frame_counter: u32,
    total_frames: u32,
    animation_speed: u32,
}

impl AnimationPlayer {
    pub fn new(total_frames: u32, animation_speed: u32) -> Self {
        Self {
            frame_index: 0,
            frame_counter: 0,
            total_frames: total_frames.max(1),
            animation_speed: animation_speed.max(1),
        }
    }

    /// Count one gameplay tick
    pub fn tick(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter >= self.animation_speed {
            self.frame_index = (self.frame_index + 1) % self.total_frames;
            self.frame_counter = 0;
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.frame_index
    }
}
