use super::body::KinematicBody;
use super::collision::{lands_on, overlaps, snap_onto, CollisionEvent, CollisionEventQueue, CollisionResponse};
use crate::core::math::Rect;

/// Default downward acceleration in pixels per tick squared
pub const DEFAULT_GRAVITY: f32 = 0.5;

/// A static shape the physics step tests bodies against
#[derive(Debug, Clone, Copy)]
pub struct StaticCollider {
    pub rect: Rect,
    pub response: CollisionResponse,
}

/// Gravity integration and static collision resolution
pub struct PhysicsWorld {
    gravity: f32,

    /// Events from the most recent resolve calls
    collision_event_queue: CollisionEventQueue,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            collision_event_queue: CollisionEventQueue::new(),
        }
    }

    /// Accelerate the body downward and move it by its vertical velocity
    pub fn integrate(&self, body: &mut KinematicBody) {
        body.velocity_y += self.gravity;
        body.y += body.velocity_y;
    }

    /// Start a new step
    pub fn begin_step(&mut self) {
        self.collision_event_queue.clear();
    }

    /// Test `body` against `colliders` in order.
    ///
    /// Triggers are reported for every overlap. The first platform the body
    /// lands on wins and later platforms are skipped. Returns that
    /// platform's index.
    pub fn resolve<'a, I>(&mut self, body_index: usize, body: &mut KinematicBody, colliders: I) -> Option<usize>
    where
        I: IntoIterator<Item = (usize, &'a StaticCollider)>,
    {
        let mut landed = None;
        for (index, collider) in colliders {
            match collider.response {
                CollisionResponse::Trigger => {
                    if overlaps(body, &collider.rect) {
                        self.collision_event_queue.push(CollisionEvent::Triggered {
                            body: body_index,
                            obstacle: index,
                        });
                    }
                }
                CollisionResponse::OneWayPlatform => {
                    if landed.is_none() && lands_on(body, &collider.rect) {
                        snap_onto(body, &collider.rect);
                        self.collision_event_queue.push(CollisionEvent::Landed {
                            body: body_index,
                            obstacle: index,
                        });
                        landed = Some(index);
                    }
                }
            }
        }
        landed
    }

    /// Collision events since the last `begin_step`
    pub fn events(&self) -> &[CollisionEvent] {
        self.collision_event_queue.events()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
