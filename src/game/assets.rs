// Everything a level needs from disk, loaded in one go at startup

use super::characters::{AnimState, SpriteSet, FRAMES_PER_STRIP, ROSTER};
use super::config::GameConfig;
use crate::engine::assets::{AssetError, AssetManager, AssetType};
use image::RgbaImage;
use log::info;
use std::sync::Arc;

const PLATFORM_IMAGE: &str = "platform.png";
const EXIT_DOOR_IMAGE: &str = "ExitDoor.png";
const BACKGROUND_IMAGE: &str = "background.png";
const INTRO_SCRIPT: &str = "intro.json";
const EXIT_SCRIPT: &str = "exit.json";

/// Decoded images and raw text for one level
#[derive(Debug, Clone)]
pub struct GameAssets {
    /// Sprite sets in roster order
    pub characters: Vec<(String, SpriteSet)>,
    pub platform: Arc<RgbaImage>,
    pub exit_door: Arc<RgbaImage>,
    pub background: Option<Arc<RgbaImage>>,
    pub level: String,
    pub intro_script: Option<String>,
    pub exit_script: Option<String>,
}

impl GameAssets {
    /// Load every asset named by `config`. Missing optional assets are
    /// `None`; anything else missing is an error.
    pub fn load(config: &GameConfig) -> Result<Self, AssetError> {
        let mut manager = AssetManager::new(&config.assets_root);

        let mut characters = Vec::with_capacity(ROSTER.len());
        for name in ROSTER {
            characters.push((name.to_string(), load_sprite_set(&mut manager, name)?));
        }

        let platform = manager.image(AssetType::Image, PLATFORM_IMAGE)?;
        let exit_door = manager.image(AssetType::Image, EXIT_DOOR_IMAGE)?;
        let background = manager.optional_image(AssetType::Image, BACKGROUND_IMAGE)?;
        let level = manager.text(AssetType::Level, &config.level)?;
        let intro_script = manager.optional_text(AssetType::Dialogue, INTRO_SCRIPT)?;
        let exit_script = manager.optional_text(AssetType::Dialogue, EXIT_SCRIPT)?;

        let stats = manager.stats();
        info!(
            "Loaded {} images ({} KiB), level {}",
            stats.image_count,
            stats.image_bytes / 1024,
            config.level
        );

        Ok(Self {
            characters,
            platform,
            exit_door,
            background,
            level,
            intro_script,
            exit_script,
        })
    }
}

/// Load the four animation strips of one character
fn load_sprite_set(manager: &mut AssetManager, name: &str) -> Result<SpriteSet, AssetError> {
    let [idle, run, jump, fall] = AnimState::ALL;
    let mut strip = |state: AnimState| {
        manager.sprite_sheet(
            AssetType::Character,
            &format!("{}/{}", name, state.file_name()),
            FRAMES_PER_STRIP,
        )
    };
    let strips = [strip(idle)?, strip(run)?, strip(jump)?, strip(fall)?];
    SpriteSet::new(name, strips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_png(root: &Path, relative: &str, width: u32, height: u32) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::new(width, height).save(path).unwrap();
    }

    fn write_text(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    fn populate(root: &Path) {
        for name in ROSTER {
            for state in AnimState::ALL {
                write_png(root, &format!("characters/{}/{}", name, state.file_name()), 128, 48);
            }
        }
        write_png(root, "img/platform.png", 24, 24);
        write_png(root, "img/ExitDoor.png", 87, 128);
        write_text(root, "levels/level1.txt", "\n###\n");
    }

    fn config(root: &Path) -> GameConfig {
        GameConfig {
            assets_root: root.to_path_buf(),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_load_full_set() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        write_text(dir.path(), "dialogue/intro.json", r#"[{"speaker":"Dog","text":"Woof"}]"#);

        let assets = GameAssets::load(&config(dir.path())).unwrap();
        let names: Vec<&str> = assets.characters.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ROSTER);
        assert_eq!(assets.characters[0].1.frame_width(), 32.0);
        assert_eq!(assets.exit_door.dimensions(), (87, 128));
        assert!(assets.background.is_none());
        assert_eq!(assets.level, "\n###\n");
        assert!(assets.intro_script.is_some());
        assert!(assets.exit_script.is_none());
    }

    #[test]
    fn test_missing_character_strip_fails() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        std::fs::remove_file(dir.path().join("characters/Dog/Fall.png")).unwrap();

        let result = GameAssets::load(&config(dir.path()));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_missing_level_fails() {
        let dir = tempdir().unwrap();
        populate(dir.path());
        let config = GameConfig {
            level: "level9.txt".to_string(),
            ..config(dir.path())
        };
        assert!(matches!(GameAssets::load(&config), Err(AssetError::NotFound(_))));
    }
}
