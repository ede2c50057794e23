use super::obstacle::{Obstacle, ObstacleKind};
use crate::engine::renderer::Camera;
use glam::Vec2;

/// Static level geometry and extent, fixed once parsed
#[derive(Debug, Clone)]
pub struct World {
    obstacles: Vec<Obstacle>,
    x_max: f32,
    y_max: f32,
    /// Feet position of the first spawned character
    spawn: Vec2,
}

impl World {
    pub fn new(obstacles: Vec<Obstacle>, x_max: f32, y_max: f32, spawn: Vec2) -> Self {
        Self {
            obstacles,
            x_max,
            y_max,
            spawn,
        }
    }

    /// Obstacles in row-major map order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    pub fn y_max(&self) -> f32 {
        self.y_max
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Obstacles on screen, with their map index
    pub fn visible<'a>(&'a self, camera: &'a Camera) -> impl Iterator<Item = (usize, &'a Obstacle)> + 'a {
        self.obstacles
            .iter()
            .enumerate()
            .filter(move |(_, obstacle)| obstacle.on_canvas_area(camera))
    }

    /// True when a platform whose top is at `ground_y` lies under the
    /// centre of a body spanning `x..x + width`
    pub fn has_ground(&self, x: f32, width: f32, ground_y: f32) -> bool {
        let centre = x + width / 2.0;
        self.obstacles.iter().any(|obstacle| {
            let rect = obstacle.rect();
            obstacle.kind == ObstacleKind::Platform
                && (rect.y - ground_y).abs() < 0.5
                && rect.x <= centre
                && centre < rect.right()
        })
    }

    pub fn count(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|o| o.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(
            vec![
                Obstacle::platform(0.0, 576.0, 24.0, 24.0),
                Obstacle::platform(1200.0, 576.0, 24.0, 24.0),
                Obstacle::exit_door(1500.0, 600.0),
            ],
            2400.0,
            600.0,
            Vec2::new(0.0, 576.0),
        )
    }

    #[test]
    fn test_visible_keeps_map_indices() {
        let world = world();
        let mut camera = Camera::new(800.0, 600.0);
        camera.focus_on(1400.0, world.x_max());

        let visible: Vec<usize> = world.visible(&camera).map(|(i, _)| i).collect();
        assert_eq!(visible, vec![1, 2]);
    }

    #[test]
    fn test_ground_under_body_centre() {
        let world = world();
        assert!(world.has_ground(0.0, 32.0, 576.0));
        // Centre past the tile's right edge
        assert!(!world.has_ground(10.0, 32.0, 576.0));
        // Door tiles are not ground
        assert!(!world.has_ground(1500.0, 32.0, 472.0));
        assert!(!world.has_ground(0.0, 32.0, 552.0));
    }

    #[test]
    fn test_counts() {
        let world = world();
        assert_eq!(world.count(ObstacleKind::Platform), 2);
        assert_eq!(world.count(ObstacleKind::ExitDoor), 1);
    }
}
