use super::body::KinematicBody;
use super::collision::CollisionResponse;
use super::world::StaticCollider;
use crate::core::math::Rect;
use crate::engine::renderer::{colors, Camera, Canvas};

const OUTLINE_WIDTH: f32 = 1.0;
const STATS_X: f32 = 10.0;
const STATS_TOP: f32 = 60.0;
const STATS_LINE_HEIGHT: f32 = 18.0;

/// Debug renderer for physics objects.
/// Outlines bodies and colliders and prints diagnostic lines.
pub struct DebugRenderer {
    enabled: bool,
}

impl DebugRenderer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Check if debug rendering is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Outline on-screen colliders and every body, then print `stats`
    pub fn draw<'a, C, B>(
        &self,
        canvas: &mut dyn Canvas,
        camera: &Camera,
        colliders: C,
        bodies: B,
        stats: &[String],
    ) where
        C: IntoIterator<Item = &'a StaticCollider>,
        B: IntoIterator<Item = &'a KinematicBody>,
    {
        if !self.enabled {
            return;
        }

        let viewport = camera.viewport();
        for collider in colliders {
            if !viewport.overlaps(&collider.rect) {
                continue;
            }
            let color = match collider.response {
                CollisionResponse::OneWayPlatform => colors::DEBUG_PLATFORM,
                CollisionResponse::Trigger => colors::DEBUG_EXIT,
            };
            canvas.stroke_rect(to_screen(camera, collider.rect), color, OUTLINE_WIDTH);
        }

        for body in bodies {
            canvas.stroke_rect(to_screen(camera, body.rect()), colors::DEBUG_BODY, OUTLINE_WIDTH);
        }

        for (i, line) in stats.iter().enumerate() {
            canvas.fill_text(
                line,
                STATS_X,
                STATS_TOP + i as f32 * STATS_LINE_HEIGHT,
                colors::WHITE,
            );
        }
    }
}

fn to_screen(camera: &Camera, rect: Rect) -> Rect {
    rect.translated(camera.offset_x(), 0.0)
}
