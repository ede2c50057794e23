// Kinematic physics: gravity, one-way platforms and trigger volumes

pub mod body;
mod collision;
mod debug;
mod world;

pub use body::KinematicBody;
pub use collision::{lands_on, overlaps, snap_onto, CollisionEvent, CollisionResponse};
pub use debug::DebugRenderer;
pub use world::{PhysicsWorld, StaticCollider, DEFAULT_GRAVITY};
