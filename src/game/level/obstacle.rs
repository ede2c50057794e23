use crate::core::math::Rect;
use crate::engine::physics::{CollisionResponse, StaticCollider};
use crate::engine::renderer::{Camera, Canvas};
use image::RgbaImage;

/// Exit door sprite size; the door stands on the bottom edge of its tile
pub const EXIT_DOOR_WIDTH: f32 = 87.0;
pub const EXIT_DOOR_HEIGHT: f32 = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Solid from above only
    Platform,
    /// Trigger volume ending the level
    ExitDoor,
}

/// A static rectangle of level geometry
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    collider: StaticCollider,
}

impl Obstacle {
    pub fn platform(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: ObstacleKind::Platform,
            collider: StaticCollider {
                rect: Rect::new(x, y, width, height),
                response: CollisionResponse::OneWayPlatform,
            },
        }
    }

    /// Door at tile column `x` whose tile spans down to `tile_bottom`
    pub fn exit_door(x: f32, tile_bottom: f32) -> Self {
        Self {
            kind: ObstacleKind::ExitDoor,
            collider: StaticCollider {
                rect: Rect::new(
                    x,
                    tile_bottom - EXIT_DOOR_HEIGHT,
                    EXIT_DOOR_WIDTH,
                    EXIT_DOOR_HEIGHT,
                ),
                response: CollisionResponse::Trigger,
            },
        }
    }

    pub fn rect(&self) -> Rect {
        self.collider.rect
    }

    pub fn collider(&self) -> &StaticCollider {
        &self.collider
    }

    /// Broad-phase test: is any part of the obstacle on screen
    pub fn on_canvas_area(&self, camera: &Camera) -> bool {
        camera.viewport().overlaps(&self.collider.rect)
    }

    /// Draw `image` stretched over the obstacle if it is on screen
    pub fn render(&self, canvas: &mut dyn Canvas, camera: &Camera, image: &RgbaImage) {
        if !self.on_canvas_area(camera) {
            return;
        }
        let rect = self.collider.rect;
        let src = Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32);
        let dst = Rect::new(camera.to_screen_x(rect.x), rect.y, rect.width, rect.height);
        canvas.draw_image(image, src, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::canvas::testing::RecordingCanvas;

    #[test]
    fn test_exit_door_stands_on_tile_bottom() {
        let door = Obstacle::exit_door(96.0, 48.0);
        assert_eq!(door.rect(), Rect::new(96.0, -80.0, 87.0, 128.0));
        assert_eq!(door.collider().response, CollisionResponse::Trigger);
    }

    #[test]
    fn test_platform_is_one_way() {
        let platform = Obstacle::platform(24.0, 0.0, 24.0, 24.0);
        assert_eq!(platform.kind, ObstacleKind::Platform);
        assert_eq!(platform.collider().response, CollisionResponse::OneWayPlatform);
    }

    #[test]
    fn test_render_culls_offscreen() {
        let camera = Camera::new(800.0, 600.0);
        let image = RgbaImage::new(24, 24);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);

        Obstacle::platform(900.0, 100.0, 24.0, 24.0).render(&mut canvas, &camera, &image);
        assert!(canvas.commands.is_empty());

        Obstacle::platform(790.0, 100.0, 24.0, 24.0).render(&mut canvas, &camera, &image);
        assert_eq!(canvas.image_targets(), vec![Rect::new(790.0, 100.0, 24.0, 24.0)]);
    }

    #[test]
    fn test_render_applies_camera_offset() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.focus_on(1000.0, 3000.0);
        let image = RgbaImage::new(24, 24);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        Obstacle::platform(1000.0, 100.0, 24.0, 24.0).render(&mut canvas, &camera, &image);
        assert_eq!(canvas.image_targets(), vec![Rect::new(400.0, 100.0, 24.0, 24.0)]);
    }
}
