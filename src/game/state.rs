// Per-level game state and the tick that drives it
//
// Tick order: events first. While an event occurs it owns the tick and
// gameplay is skipped. Otherwise character selection, then every
// character's movement and collision.

use super::assets::GameAssets;
use super::characters::{Character, MoveInput, Party, BASE_STATS, SPAWN_SPACING};
use super::config::GameConfig;
use super::events::{
    Dialogue, EventList, EventProgress, EventTag, Script, ScriptError, TriggerContext,
};
use super::level::{parse_level, LevelError, ObstacleKind, World};
use crate::core::math::Rect;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::{CollisionEvent, DebugRenderer, PhysicsWorld};
use crate::engine::renderer::{colors, Camera, Canvas};
use log::{debug, info};

/// Where the focused character's name is printed
const HUD_X: f32 = 10.0;
const HUD_BASELINE: f32 = 30.0;

/// Errors building a game from loaded assets
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid level: {0}")]
    Level(#[from] LevelError),

    #[error("Invalid dialogue script: {0}")]
    Script(#[from] ScriptError),
}

/// Everything one run of a level owns
pub struct GameState {
    assets: GameAssets,
    world: World,
    intro_script: Script,
    exit_script: Script,
    reveal_interval_ms: f32,
    viewport_width: f32,
    viewport_height: f32,

    physics: PhysicsWorld,
    party: Party,
    camera: Camera,
    events: EventList,
    debug: DebugRenderer,

    /// Survives reinit so the intro plays once per process
    tutorial_shown: bool,
    exit_reached: bool,
}

impl GameState {
    /// Parse the level and scripts, then start the first run
    pub fn new(config: &GameConfig, assets: GameAssets) -> Result<Self, GameError> {
        let world = parse_level(&assets.level, config.tile_width, config.tile_height)?;
        let intro_script = match &assets.intro_script {
            Some(json) => Script::from_json(json)?,
            None => Script::intro(),
        };
        let exit_script = match &assets.exit_script {
            Some(json) => Script::from_json(json)?,
            None => Script::level_complete(),
        };

        let viewport_width = config.viewport_width as f32;
        let viewport_height = config.viewport_height as f32;

        let mut state = Self {
            assets,
            world,
            intro_script,
            exit_script,
            reveal_interval_ms: config.reveal_interval_ms,
            viewport_width,
            viewport_height,
            physics: PhysicsWorld::with_gravity(config.gravity),
            party: Party::default(),
            camera: Camera::new(viewport_width, viewport_height),
            events: EventList::new(),
            debug: DebugRenderer::new(config.show_debug),
            tutorial_shown: false,
            exit_reached: false,
        };
        state.reinit();
        Ok(state)
    }

    /// Start the level over: fresh characters, camera and events.
    ///
    /// The tutorial is only registered until it has been shown once.
    pub fn reinit(&mut self) {
        let spawn = self.world.spawn();
        let characters = self
            .assets
            .characters
            .iter()
            .enumerate()
            .map(|(i, (name, sprites))| {
                Character::spawn(
                    name,
                    sprites.clone(),
                    BASE_STATS,
                    self.spawn_x(i, sprites.frame_width()),
                    spawn.y,
                    self.world.x_max(),
                    self.world.y_max(),
                )
            })
            .collect();
        self.party = Party::new(characters);
        self.camera = Camera::new(self.viewport_width, self.viewport_height);

        self.events = EventList::new();
        if !self.tutorial_shown {
            self.events.push(Box::new(Dialogue::new(
                EventTag::Tutorial,
                self.intro_script.clone(),
                Box::new(|_: &TriggerContext| true),
                self.reveal_interval_ms,
            )));
        }
        self.events.push(Box::new(Dialogue::new(
            EventTag::LevelComplete,
            self.exit_script.clone(),
            Box::new(|ctx: &TriggerContext| ctx.exit_reached),
            self.reveal_interval_ms,
        )));

        self.exit_reached = false;
        self.focus_on_character(0);
        info!(
            "Level started with {} characters, {} events",
            self.party.len(),
            self.events.len()
        );
    }

    /// Spawn x of party member `index`: spaced out along the spawn row while
    /// there is ground under the spaced position, otherwise on the spawn
    /// tile. Always inside the world.
    fn spawn_x(&self, index: usize, width: f32) -> f32 {
        let spawn = self.world.spawn();
        let max_x = (self.world.x_max() - width).max(0.0);
        let spaced = (spawn.x + index as f32 * SPAWN_SPACING).min(max_x);
        if self.world.has_ground(spaced, width, spawn.y) {
            spaced
        } else {
            spawn.x.min(max_x)
        }
    }

    /// Make character `index` the focus and centre the view on it.
    /// Returns false if there is no such character.
    pub fn focus_on_character(&mut self, index: usize) -> bool {
        if !self.party.set_focus(index) {
            return false;
        }
        if let Some(character) = self.party.focused() {
            self.camera.focus_on(character.body.x, self.world.x_max());
            debug!(
                "Focus on {} at x={:.1}, offset {:.1}",
                character.name,
                character.body.x,
                self.camera.offset_x()
            );
        }
        true
    }

    /// Run one logic tick
    pub fn update(&mut self, input: &mut InputState) {
        if input.consume_just_pressed(Action::ToggleDebug) {
            let enabled = self.debug.toggle();
            info!("Debug overlay {}", if enabled { "on" } else { "off" });
        }

        let ctx = TriggerContext {
            exit_reached: self.exit_reached,
        };
        match self.events.update(&ctx, input) {
            Some(EventProgress::Running(_)) => return,
            Some(EventProgress::Finished(EventTag::Tutorial)) => {
                self.tutorial_shown = true;
                return;
            }
            Some(EventProgress::Finished(EventTag::LevelComplete)) => {
                info!("Level complete, restarting");
                self.reinit();
                return;
            }
            None => {}
        }

        for action in Action::CHARACTER_SELECTION {
            if let Some(slot) = action.character_slot() {
                if input.consume_just_pressed(action) {
                    self.focus_on_character(slot);
                }
            }
        }

        if self.step_characters(MoveInput::from_state(input)) {
            self.reinit();
        }
    }

    /// Move every character and resolve its collisions. Returns true if one
    /// fell out of the world.
    fn step_characters(&mut self, focused_input: MoveInput) -> bool {
        let focus = self.party.focus_index();
        self.physics.begin_step();

        for (index, character) in self.party.iter_mut().enumerate() {
            let died = if index == focus {
                character.update(focused_input, Some(&mut self.camera), &self.physics)
            } else {
                character.update(MoveInput::default(), None, &self.physics)
            };
            if died {
                info!("{} fell out of the world", character.name);
                return true;
            }

            // Off-screen characters test against the view they would have
            // if focused, so they keep standing while the camera is away
            let view = if index == focus {
                self.camera.clone()
            } else {
                let mut view = self.camera.clone();
                view.focus_on(character.body.x, self.world.x_max());
                view
            };
            let colliders = self
                .world
                .visible(&view)
                .map(|(i, obstacle)| (i, obstacle.collider()));
            if self
                .physics
                .resolve(index, &mut character.body, colliders)
                .is_some()
            {
                character.land();
            }
        }

        let exit_touched = self
            .physics
            .events()
            .iter()
            .any(|event| matches!(event, CollisionEvent::Triggered { .. }));
        if exit_touched && !self.exit_reached {
            info!("Exit reached");
            self.exit_reached = true;
        }
        false
    }

    /// Draw the frame: background, obstacles, characters, then overlays
    pub fn render(&mut self, canvas: &mut dyn Canvas, delta_ms: f32, fps: f32, paused: bool) {
        let (width, height) = canvas.size();
        canvas.clear_rect(Rect::new(0.0, 0.0, width, height));
        self.render_background(canvas, width, height);

        for obstacle in self.world.obstacles() {
            let image = match obstacle.kind {
                ObstacleKind::Platform => &self.assets.platform,
                ObstacleKind::ExitDoor => &self.assets.exit_door,
            };
            obstacle.render(canvas, &self.camera, image);
        }

        for character in self.party.iter() {
            character.render(canvas, &self.camera);
        }

        self.events.render_active(canvas, delta_ms);

        if let Some(character) = self.party.focused() {
            canvas.fill_text(&character.name, HUD_X, HUD_BASELINE, colors::WHITE);
        }

        if self.debug.is_enabled() {
            let focused = self.party.focused().map_or("-", |c| c.name.as_str());
            let stats = [
                format!("FPS {:.0}", fps),
                format!("Focus {} offset {:.1}", focused, self.camera.offset_x()),
            ];
            self.debug.draw(
                canvas,
                &self.camera,
                self.world.obstacles().iter().map(|o| o.collider()),
                self.party.iter().map(|c| &c.body),
                &stats,
            );
        }

        if paused {
            let label = "PAUSED";
            let x = (width - canvas.measure_text(label)) / 2.0;
            canvas.fill_text(label, x, height / 2.0, colors::YELLOW);
        }
    }

    /// Tile the background across the world with the scroll offset, or
    /// fill with sky when there is none
    fn render_background(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let Some(image) = &self.assets.background else {
            canvas.fill_rect(Rect::new(0.0, 0.0, width, height), colors::SKY);
            return;
        };

        let (image_width, image_height) = image.dimensions();
        if image_width == 0 || image_height == 0 {
            return;
        }
        // Scale to the viewport height, keep the aspect ratio
        let tile_width = image_width as f32 * height / image_height as f32;
        let src = Rect::new(0.0, 0.0, image_width as f32, image_height as f32);
        let offset = self.camera.offset_x();
        let first = (-offset / tile_width).floor();
        let mut x = first * tile_width + offset;
        while x < width {
            canvas.draw_image(image, src, Rect::new(x, 0.0, tile_width, height));
            x += tile_width;
        }
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tutorial_shown(&self) -> bool {
        self.tutorial_shown
    }

    pub fn exit_reached(&self) -> bool {
        self.exit_reached
    }

    /// True while an event owns the game
    pub fn has_active_event(&self) -> bool {
        self.events.has_active()
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::canvas::testing::{DrawCommand, RecordingCanvas};
    use crate::game::characters::testing::sprites;
    use crate::game::characters::ROSTER;
    use approx::assert_relative_eq;
    use image::RgbaImage;
    use std::sync::Arc;

    /// 50 tiles wide, ground on the last of four rows
    const FLAT: &str = "..................................................\n\n\n##################################################";

    fn assets(level: &str) -> GameAssets {
        GameAssets {
            characters: ROSTER
                .iter()
                .map(|name| (name.to_string(), sprites(32, 48)))
                .collect(),
            platform: Arc::new(RgbaImage::new(24, 24)),
            exit_door: Arc::new(RgbaImage::new(87, 128)),
            background: None,
            level: level.to_string(),
            intro_script: Some(r#"[{"speaker":"Dog","text":"Woof"}]"#.to_string()),
            exit_script: None,
        }
    }

    fn game(level: &str) -> GameState {
        GameState::new(&GameConfig::default(), assets(level)).unwrap()
    }

    fn tick(state: &mut GameState, actions: &[Action]) {
        let mut input = InputState::new();
        for action in actions {
            input.press(*action);
        }
        state.update(&mut input);
    }

    /// Play the active dialogue through to its end
    fn finish_dialogue(state: &mut GameState) {
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        tick(state, &[]);
        for _ in 0..200 {
            if !state.has_active_event() {
                return;
            }
            state.render(&mut canvas, 100.0, 60.0, false);
            tick(state, &[Action::Confirm]);
        }
        panic!("dialogue never finished");
    }

    fn started(level: &str) -> GameState {
        let mut state = game(level);
        finish_dialogue(&mut state);
        assert!(state.tutorial_shown());
        state
    }

    #[test]
    fn test_party_spawns_on_ground() {
        let state = game(FLAT);
        assert_eq!(state.party().len(), 3);
        assert_eq!(state.party().focus_index(), 0);
        let xs: Vec<f32> = state.party().iter().map(|c| c.body.x).collect();
        assert_eq!(xs, vec![0.0, 60.0, 120.0]);
        for character in state.party().iter() {
            assert_eq!(character.body.bottom(), 72.0);
        }
        assert_eq!(state.camera().offset_x(), 0.0);
    }

    #[test]
    fn test_narrow_ledge_keeps_party_on_ground() {
        // Two-tile ledge in a three-tile world
        let mut state = started("...\n...\n##.");
        let x_max = state.world().x_max();
        for character in state.party().iter() {
            assert_eq!(character.body.x, 0.0);
            assert!(character.body.right() <= x_max);
        }

        for _ in 0..600 {
            tick(&mut state, &[]);
            for character in state.party().iter() {
                assert_relative_eq!(character.body.bottom(), 48.0);
                assert_eq!(character.body.velocity_y, 0.0);
            }
        }
    }

    #[test]
    fn test_spacing_clamped_to_world_edge() {
        // Ground runs to the right edge, so the clamped spot still has ground
        let state = game("....\n....\n####");
        let xs: Vec<f32> = state.party().iter().map(|c| c.body.x).collect();
        assert_eq!(xs, vec![0.0, 60.0, 64.0]);
        for character in state.party().iter() {
            assert!(character.body.right() <= state.world().x_max());
        }
    }

    #[test]
    fn test_broken_level_is_an_error() {
        let result = GameState::new(&GameConfig::default(), assets("...\n..."));
        assert!(matches!(result, Err(GameError::Level(LevelError::Empty))));
    }

    #[test]
    fn test_broken_script_is_an_error() {
        let mut assets = assets(FLAT);
        assets.exit_script = Some("not json".to_string());
        let result = GameState::new(&GameConfig::default(), assets);
        assert!(matches!(result, Err(GameError::Script(_))));
    }

    #[test]
    fn test_tutorial_blocks_gameplay() {
        let mut state = game(FLAT);
        tick(&mut state, &[Action::MoveRight]);
        assert!(state.has_active_event());
        tick(&mut state, &[Action::MoveRight, Action::SelectCharacter2]);
        assert_eq!(state.party().focused().unwrap().body.x, 0.0);
        assert_eq!(state.party().focus_index(), 0);
    }

    #[test]
    fn test_only_focused_character_moves() {
        let mut state = started(FLAT);
        tick(&mut state, &[Action::MoveRight]);
        let xs: Vec<f32> = state.party().iter().map(|c| c.body.x).collect();
        assert_eq!(xs, vec![5.0, 60.0, 120.0]);
    }

    #[test]
    fn test_characters_rest_on_ground() {
        let mut state = started(FLAT);
        for _ in 0..30 {
            tick(&mut state, &[]);
        }
        for character in state.party().iter() {
            assert_relative_eq!(character.body.bottom(), 72.0);
            assert_eq!(character.body.velocity_y, 0.0);
            assert!(!character.is_jumping);
        }
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let mut state = started(FLAT);
        tick(&mut state, &[Action::Jump]);
        assert!(state.party().focused().unwrap().body.bottom() < 72.0);
        for _ in 0..60 {
            tick(&mut state, &[]);
        }
        let monkey = state.party().focused().unwrap();
        assert_relative_eq!(monkey.body.bottom(), 72.0);
        assert!(!monkey.is_jumping);
    }

    #[test]
    fn test_select_character_snaps_camera() {
        let mut state = started(FLAT);
        for _ in 0..150 {
            tick(&mut state, &[Action::MoveRight]);
        }
        let monkey_x = state.party().focused().unwrap().body.x;
        assert!(state.camera().offset_x() < 0.0);

        // The others stayed on the ground while off screen
        let cat = state.party().get(1).unwrap();
        assert_eq!(cat.body.bottom(), 72.0);

        tick(&mut state, &[Action::SelectCharacter2]);
        assert_eq!(state.party().focus_index(), 1);
        assert_eq!(state.camera().offset_x(), 0.0);

        tick(&mut state, &[Action::SelectCharacter1]);
        assert_eq!(state.party().focus_index(), 0);
        let expected = (400.0 - monkey_x).max(800.0 - 1200.0).min(0.0);
        assert_relative_eq!(state.camera().offset_x(), expected);
    }

    #[test]
    fn test_camera_invariants_while_walking() {
        let mut state = started(FLAT);
        for _ in 0..300 {
            tick(&mut state, &[Action::MoveRight]);
            let offset = state.camera().offset_x();
            assert!(offset <= 0.0);
            assert!(offset >= 800.0 - state.world().x_max());
        }
    }

    #[test]
    fn test_fall_out_of_world_restarts_level() {
        // Ground only under the spawn, world wider than the ground
        let level = "..................................................\n\n\n######";
        let mut state = started(level);
        while state.party().focused().unwrap().body.x < 150.0 {
            tick(&mut state, &[Action::MoveRight]);
        }
        let mut restarted = false;
        for _ in 0..100 {
            tick(&mut state, &[]);
            if state.party().focused().unwrap().body.x == 0.0 {
                restarted = true;
                break;
            }
        }
        assert!(restarted);
        assert!(state.tutorial_shown());
        assert!(!state.has_active_event());
        assert_eq!(state.party().focused().unwrap().body.bottom(), 72.0);
    }

    #[test]
    fn test_exit_door_completes_level() {
        // Door stands on the ground, covering the third character
        let level = "..................................................\n\n....$\n##################################################";
        let mut state = started(level);
        tick(&mut state, &[]);
        assert!(state.exit_reached());

        tick(&mut state, &[]);
        assert!(state.has_active_event());

        finish_dialogue(&mut state);
        assert!(!state.exit_reached());
        assert_eq!(state.party().focused().unwrap().body.x, 0.0);
    }

    #[test]
    fn test_toggle_debug() {
        let mut state = game(FLAT);
        assert!(!state.debug_enabled());
        tick(&mut state, &[Action::ToggleDebug]);
        assert!(state.debug_enabled());

        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        state.render(&mut canvas, 0.0, 60.0, false);
        assert!(canvas
            .commands
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Stroke(_, c) if *c == colors::DEBUG_BODY)));
        assert!(canvas.texts().contains(&"FPS 60".to_string()));
    }

    #[test]
    fn test_render_order() {
        let mut state = started(FLAT);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        state.render(&mut canvas, 16.0, 60.0, false);

        assert_eq!(
            canvas.commands[0],
            DrawCommand::Clear(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
        assert_eq!(
            canvas.commands[1],
            DrawCommand::Fill(Rect::new(0.0, 0.0, 800.0, 600.0), colors::SKY)
        );

        // 34 ground tiles fit in the 800 pixel view, then the characters
        let targets = canvas.image_targets();
        assert_eq!(targets.len(), 34 + 3);
        assert_eq!(targets[34], Rect::new(0.0, 24.0, 32.0, 48.0));
        assert_eq!(canvas.texts(), vec!["Monkey".to_string()]);
    }

    #[test]
    fn test_dialogue_overlay_and_pause_banner() {
        let mut state = game(FLAT);
        tick(&mut state, &[]);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        state.render(&mut canvas, 100.0, 60.0, true);
        let texts = canvas.texts();
        assert!(texts.contains(&"Dog: ".to_string()));
        assert_eq!(texts.last().map(String::as_str), Some("PAUSED"));
    }

    #[test]
    fn test_background_tiles_with_scroll() {
        let mut assets = assets(FLAT);
        assets.background = Some(Arc::new(RgbaImage::new(300, 600)));
        let mut state = GameState::new(&GameConfig::default(), assets).unwrap();
        finish_dialogue(&mut state);
        for _ in 0..100 {
            tick(&mut state, &[Action::MoveRight]);
        }
        let offset = state.camera().offset_x();
        assert!(offset < 0.0);

        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        state.render(&mut canvas, 0.0, 60.0, false);
        let first = canvas.image_targets()[0];
        assert!(first.x <= 0.0 && first.right() > 0.0);
        assert_eq!(first.width, 300.0);
    }
}
