// Character system
//
// - `character`: the steerable body and the party that owns focus
// - `stats`: movement and animation tuning
// - `state`: animation state selection
// - `animation`: strip table and frame cycling

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

pub use animation::{AnimationPlayer, SpriteSet};
pub use character::{Character, MoveInput, Party, FRAMES_PER_STRIP, ROSTER, SPAWN_SPACING};
pub use state::AnimState;
pub use stats::{CharacterStats, BASE_STATS};
