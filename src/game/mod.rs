// Platformer gameplay built on the engine
//
// - `config`: runtime settings and command-line flags
// - `assets`: the startup asset bundle
// - `characters`: the steerable party
// - `level`: tile map and static obstacles
// - `events`: one-shot modal sequences such as dialogue
// - `state`: per-level state, tick and frame composition

pub mod assets;
pub mod characters;
pub mod config;
pub mod events;
pub mod level;
pub mod state;

pub use assets::GameAssets;
pub use config::{CliArgs, GameConfig};
pub use state::{GameError, GameState};
