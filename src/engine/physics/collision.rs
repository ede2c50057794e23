use super::body::KinematicBody;
use crate::core::math::Rect;

/// How an obstacle reacts to a body touching it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResponse {
    /// Solid from above only: bodies land on top and pass through from
    /// below or the sides
    OneWayPlatform,

    /// Reports overlap without moving the body
    Trigger,
}

/// Custom collision event for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// A body came to rest on top of an obstacle
    Landed { body: usize, obstacle: usize },

    /// A body overlaps a trigger volume
    Triggered { body: usize, obstacle: usize },
}

/// Events collected during one physics step
#[derive(Debug, Default)]
pub struct CollisionEventQueue {
    events: Vec<CollisionEvent>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.events.push(event);
    }

    /// All collision events from this step
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One-way landing test against the top of `obstacle`.
///
/// True when the body overlaps the obstacle horizontally, its feet are above
/// the obstacle's bottom edge now, and this tick's fall would carry them
/// past the obstacle's top.
pub fn lands_on(body: &KinematicBody, obstacle: &Rect) -> bool {
    body.x < obstacle.right()
        && body.right() > obstacle.x
        && body.bottom() < obstacle.bottom()
        && body.bottom() + body.velocity_y > obstacle.y
}

/// Stand the body on top of `obstacle` and stop its fall
pub fn snap_onto(body: &mut KinematicBody, obstacle: &Rect) {
    body.y = obstacle.y - body.height;
    body.velocity_y = 0.0;
}

/// Plain box overlap, used for trigger volumes
pub fn overlaps(body: &KinematicBody, volume: &Rect) -> bool {
    body.rect().intersects(volume)
}
