// Character entity and party management

use super::animation::{AnimationPlayer, SpriteSet};
use super::state::AnimState;
use super::stats::CharacterStats;
use crate::core::math::Rect;
use crate::engine::input::{Action, InputState};
use crate::engine::physics::{KinematicBody, PhysicsWorld};
use crate::engine::renderer::{Camera, Canvas};

/// Party members in selection order
pub const ROSTER: [&str; 3] = ["Monkey", "Cat", "Dog"];

/// Frames in every character animation strip
pub const FRAMES_PER_STRIP: u32 = 4;

/// Horizontal gap between party members at spawn
pub const SPAWN_SPACING: f32 = 60.0;

/// Movement requested for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MoveInput {
    /// Read the movement actions from the current input state
    pub fn from_state(input: &InputState) -> Self {
        Self {
            left: input.is_pressed(Action::MoveLeft),
            right: input.is_pressed(Action::MoveRight),
            jump: input.is_pressed(Action::Jump),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.left || self.right
    }
}

/// An animated body the player can steer
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub body: KinematicBody,
    pub is_jumping: bool,
    pub stats: CharacterStats,
    anim_state: AnimState,
    animation: AnimationPlayer,
    sprites: SpriteSet,
    /// World extent the character is clamped to / dies below
    x_max: f32,
    y_max: f32,
}

impl Character {
    /// Create a character standing with its feet at `ground_y`. Its box is
    /// one animation frame.
    pub fn spawn(
        name: &str,
        sprites: SpriteSet,
        stats: CharacterStats,
        x: f32,
        ground_y: f32,
        x_max: f32,
        y_max: f32,
    ) -> Self {
        let width = sprites.frame_width();
        let height = sprites.frame_height();
        Self {
            name: name.to_string(),
            body: KinematicBody::new(x, ground_y - height, width, height),
            is_jumping: false,
            animation: AnimationPlayer::new(sprites.total_frames(), stats.animation_speed),
            stats,
            anim_state: AnimState::Idle,
            sprites,
            x_max,
            y_max,
        }
    }

    /// Advance one tick. `camera` is passed only for the focused character
    /// so its steps scroll the view.
    ///
    /// Returns true when the character has fallen out of the world.
    pub fn update(&mut self, input: MoveInput, camera: Option<&mut Camera>, physics: &PhysicsWorld) -> bool {
        let body = &mut self.body;

        if input.right {
            body.velocity_x = self.stats.running_strength;
            body.x += body.velocity_x;
            if let Some(camera) = camera {
                camera.follow_right(body.x, body.velocity_x, self.x_max);
            }
            if body.right() > self.x_max {
                body.x = self.x_max - body.width;
            }
        } else if input.left {
            body.velocity_x = self.stats.running_strength;
            body.x -= body.velocity_x;
            if let Some(camera) = camera {
                camera.follow_left(body.x, body.velocity_x, self.x_max);
            }
            if body.x <= 0.0 {
                body.x = 0.0;
            }
        }
        // No lateral momentum
        body.velocity_x = 0.0;

        if input.jump && !self.is_jumping {
            body.velocity_y = self.stats.jumping_strength;
            self.is_jumping = true;
        }

        self.anim_state = AnimState::select(body.velocity_y, input.is_moving());

        physics.integrate(body);
        self.animation.tick();

        body.y > self.y_max
    }

    /// Called after the physics step stood the character on a platform
    pub fn land(&mut self) {
        self.is_jumping = false;
    }

    pub fn anim_state(&self) -> AnimState {
        self.anim_state
    }

    pub fn current_frame(&self) -> u32 {
        self.animation.current_frame()
    }

    /// Draw the current animation frame at the character's screen position
    pub fn render(&self, canvas: &mut dyn Canvas, camera: &Camera) {
        let sheet = self.sprites.get(self.anim_state);
        let dst = Rect::new(
            camera.to_screen_x(self.body.x),
            self.body.y,
            self.body.width,
            self.body.height,
        );
        canvas.draw_image(sheet.image(), sheet.frame_rect(self.current_frame()), dst);
    }
}

/// The playable characters and which one the camera follows
#[derive(Debug, Clone, Default)]
pub struct Party {
    characters: Vec<Character>,
    focus: usize,
}

impl Party {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters,
            focus: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Change the focused character; false if `index` names no character
    pub fn set_focus(&mut self, index: usize) -> bool {
        if index < self.characters.len() {
            self.focus = index;
            true
        } else {
            false
        }
    }

    pub fn focused(&self) -> Option<&Character> {
        self.characters.get(self.focus)
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.characters.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::canvas::testing::{DrawCommand, RecordingCanvas};
    use crate::game::characters::stats::BASE_STATS;
    use crate::game::characters::testing::sprites;
    use approx::assert_relative_eq;

    fn character(x: f32) -> Character {
        Character::spawn("Monkey", sprites(32, 48), BASE_STATS, x, 500.0, 1200.0, 600.0)
    }

    const RIGHT: MoveInput = MoveInput {
        left: false,
        right: true,
        jump: false,
    };
    const LEFT: MoveInput = MoveInput {
        left: true,
        right: false,
        jump: false,
    };
    const JUMP: MoveInput = MoveInput {
        left: false,
        right: false,
        jump: true,
    };

    #[test]
    fn test_spawn_stands_on_ground() {
        let c = character(100.0);
        assert_eq!(c.body.width, 32.0);
        assert_eq!(c.body.height, 48.0);
        assert_eq!(c.body.bottom(), 500.0);
    }

    #[test]
    fn test_run_right_has_no_momentum() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        c.update(RIGHT, None, &physics);
        assert_relative_eq!(c.body.x, 105.0);
        assert_eq!(c.body.velocity_x, 0.0);

        c.update(MoveInput::default(), None, &physics);
        assert_relative_eq!(c.body.x, 105.0);
    }

    #[test]
    fn test_right_edge_clamp() {
        let physics = PhysicsWorld::new();
        let mut c = character(1166.0);
        c.update(RIGHT, None, &physics);
        assert_relative_eq!(c.body.right(), 1200.0);
    }

    #[test]
    fn test_left_edge_clamp() {
        let physics = PhysicsWorld::new();
        let mut c = character(3.0);
        c.update(LEFT, None, &physics);
        assert_eq!(c.body.x, 0.0);
    }

    #[test]
    fn test_right_wins_over_left() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        let both = MoveInput {
            left: true,
            right: true,
            jump: false,
        };
        c.update(both, None, &physics);
        assert_relative_eq!(c.body.x, 105.0);
    }

    #[test]
    fn test_jump_then_gravity() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        c.update(JUMP, None, &physics);
        assert!(c.is_jumping);
        assert_relative_eq!(c.body.velocity_y, -9.5);
        assert_eq!(c.anim_state(), AnimState::Jump);

        // One frame later, still rising
        c.update(MoveInput::default(), None, &physics);
        assert_relative_eq!(c.body.velocity_y, -9.0);
        assert_eq!(c.anim_state(), AnimState::Jump);
    }

    #[test]
    fn test_no_double_jump() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        c.update(JUMP, None, &physics);
        c.update(JUMP, None, &physics);
        assert_relative_eq!(c.body.velocity_y, -9.0);

        c.land();
        assert!(!c.is_jumping);
    }

    #[test]
    fn test_run_animation_while_moving() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        c.update(LEFT, None, &physics);
        assert_eq!(c.anim_state(), AnimState::Run);
        c.update(MoveInput::default(), None, &physics);
        // Gravity from the previous tick is still pulling
        assert_eq!(c.anim_state(), AnimState::Fall);
    }

    #[test]
    fn test_falls_out_of_world() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        let mut died = false;
        for _ in 0..60 {
            if c.update(MoveInput::default(), None, &physics) {
                died = true;
                break;
            }
        }
        assert!(died);
        assert!(c.body.y > 600.0);
    }

    #[test]
    fn test_focused_character_scrolls_camera() {
        let physics = PhysicsWorld::new();
        let mut camera = Camera::new(800.0, 600.0);
        let mut c = character(400.0);
        c.update(RIGHT, Some(&mut camera), &physics);
        assert_relative_eq!(camera.offset_x(), -5.0);
    }

    #[test]
    fn test_animation_counts_ticks() {
        let physics = PhysicsWorld::new();
        let mut c = character(100.0);
        for _ in 0..10 {
            c.update(MoveInput::default(), None, &physics);
        }
        assert_eq!(c.current_frame(), 1);
    }

    #[test]
    fn test_render_uses_screen_position() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.focus_on(600.0, 1200.0);
        let c = character(600.0);
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        c.render(&mut canvas, &camera);
        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Image {
                src: Rect::new(0.0, 0.0, 32.0, 48.0),
                dst: Rect::new(400.0, 452.0, 32.0, 48.0),
            }]
        );
    }

    #[test]
    fn test_party_focus() {
        let mut party = Party::new(vec![character(0.0), character(60.0)]);
        assert_eq!(party.focus_index(), 0);
        assert!(party.set_focus(1));
        assert_relative_eq!(party.focused().unwrap().body.x, 60.0);
        assert!(!party.set_focus(2));
        assert_eq!(party.focus_index(), 1);
    }
}
