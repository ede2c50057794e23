// Horizontal scroll camera for the side-scrolling view

use crate::core::math::Rect;
use glam::Vec2;

/// Horizontal scroll state of the playfield.
///
/// `offset_x` is added to world x coordinates to get screen x coordinates,
/// so it is zero at the left edge of the world and negative once scrolled.
#[derive(Debug, Clone)]
pub struct Camera {
    offset_x: f32,
    viewport_width: f32,
    viewport_height: f32,
}

impl Camera {
    /// Create a camera at the left edge of the world
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            offset_x: 0.0,
            viewport_width,
            viewport_height,
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Snap the view so that world x `target_x` sits at the viewport centre,
    /// then clamp to the world
    pub fn focus_on(&mut self, target_x: f32, world_width: f32) {
        self.offset_x = self.viewport_width / 2.0 - target_x;
        self.clamp_to_world(world_width);
    }

    /// Keep the world's right edge from scrolling into view and the left
    /// edge from scrolling past zero. The left edge wins when the world is
    /// narrower than the viewport.
    pub fn clamp_to_world(&mut self, world_width: f32) {
        self.offset_x = self
            .offset_x
            .max(self.viewport_width - world_width)
            .min(0.0);
    }

    /// Scroll along with a rightward step of the tracked character.
    ///
    /// Only scrolls once the character is past the viewport centre and not
    /// yet within half a viewport of the world's right edge.
    pub fn follow_right(&mut self, character_x: f32, step: f32, world_width: f32) {
        if character_x + self.offset_x >= self.viewport_width / 2.0
            && character_x <= world_width - self.viewport_width / 2.0
        {
            self.offset_x -= step;
        }
        self.clamp_to_world(world_width);
    }

    /// Scroll along with a leftward step of the tracked character
    pub fn follow_left(&mut self, character_x: f32, step: f32, world_width: f32) {
        if character_x + self.offset_x < self.viewport_width / 4.0 && self.offset_x < 0.0 {
            self.offset_x += step;
        }
        self.clamp_to_world(world_width);
    }

    /// Convert a world x coordinate to a screen x coordinate
    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x + self.offset_x
    }

    /// World-space rectangle currently on screen
    pub fn viewport(&self) -> Viewport {
        Viewport {
            min: Vec2::new(-self.offset_x, 0.0),
            max: Vec2::new(-self.offset_x + self.viewport_width, self.viewport_height),
        }
    }
}

/// Viewport bounds in world coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    /// Broad-phase visibility test: true when any part of `rect` is on screen
    pub fn overlaps(&self, rect: &Rect) -> bool {
        rect.right() > self.min.x
            && rect.x < self.max.x
            && rect.bottom() > self.min.y
            && rect.y < self.max.y
    }
}
