use crate::core::math::Rect;

/// An axis-aligned box moved by its own velocity.
///
/// Coordinates are in world pixels with y growing downward. Velocities are
/// in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl KinematicBody {
    /// Create a resting body; `width` and `height` must be positive
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// y coordinate of the body's feet
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
