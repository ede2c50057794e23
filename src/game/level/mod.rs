// Level geometry: obstacles and the tile map they are parsed from

mod map;
mod obstacle;
mod world;

pub use map::{parse_level, MAX_LEVEL_DIMENSION};
pub use obstacle::{Obstacle, ObstacleKind, EXIT_DOOR_HEIGHT, EXIT_DOOR_WIDTH};
pub use world::World;

/// Level map errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level map has no tiles")]
    Empty,

    #[error("Level map has no platform to spawn on")]
    NoGround,

    #[error("Level map is {columns}x{rows} tiles, larger than {max} in some direction")]
    TooLarge { columns: usize, rows: usize, max: usize },
}
