// Text tile map parser
//
// One line per row. `#` is a solid platform tile, `$` an exit door, any
// other character is empty space.

use super::obstacle::{Obstacle, ObstacleKind};
use super::world::World;
use super::LevelError;
use glam::Vec2;
use log::info;

const PLATFORM_TILE: char = '#';
const EXIT_TILE: char = '$';

/// Largest accepted map width or height in tiles
pub const MAX_LEVEL_DIMENSION: usize = 10_000;

/// Parse a tile map into level geometry.
///
/// The world spans the longest row and every line of the map. Characters
/// spawn on the leftmost platform of the lowest row that has one.
pub fn parse_level(text: &str, tile_width: f32, tile_height: f32) -> Result<World, LevelError> {
    let rows: Vec<&str> = text.lines().collect();
    let columns = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    if columns > MAX_LEVEL_DIMENSION || rows.len() > MAX_LEVEL_DIMENSION {
        return Err(LevelError::TooLarge {
            columns,
            rows: rows.len(),
            max: MAX_LEVEL_DIMENSION,
        });
    }

    let mut obstacles = Vec::new();
    let mut spawn: Option<(usize, usize)> = None;

    for (row, line) in rows.iter().enumerate() {
        let y = row as f32 * tile_height;
        for (column, tile) in line.chars().enumerate() {
            let x = column as f32 * tile_width;
            match tile {
                PLATFORM_TILE => {
                    obstacles.push(Obstacle::platform(x, y, tile_width, tile_height));
                    // Rows are visited top to bottom, so a later row is lower
                    if spawn.map_or(true, |(spawn_row, _)| row > spawn_row) {
                        spawn = Some((row, column));
                    }
                }
                EXIT_TILE => obstacles.push(Obstacle::exit_door(x, y + tile_height)),
                _ => {}
            }
        }
    }

    if obstacles.is_empty() {
        return Err(LevelError::Empty);
    }
    let (spawn_row, spawn_column) = spawn.ok_or(LevelError::NoGround)?;

    let world = World::new(
        obstacles,
        columns as f32 * tile_width,
        rows.len() as f32 * tile_height,
        Vec2::new(
            spawn_column as f32 * tile_width,
            spawn_row as f32 * tile_height,
        ),
    );

    info!(
        "Parsed level: {}x{} tiles, {} platforms, {} exit doors, world {}x{}",
        columns,
        rows.len(),
        world.count(ObstacleKind::Platform),
        world.count(ObstacleKind::ExitDoor),
        world.x_max(),
        world.y_max()
    );

    Ok(world)
}
