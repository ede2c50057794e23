// Input manager - turns window events into action state

use super::action::InputSource;
use super::config::InputConfig;
use super::state::InputState;
use super::touch::TouchMapper;
use log::debug;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, Touch, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Coordinates bindings, touch controls and the resulting action state
pub struct InputManager {
    config: InputConfig,
    state: InputState,
    touch: TouchMapper,
    /// Logical viewport size touches are mapped onto
    viewport: (f32, f32),
}

impl InputManager {
    /// Create a manager with default bindings for a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            config: InputConfig::with_defaults(),
            state: InputState::new(),
            touch: TouchMapper::new(),
            viewport: (viewport_width, viewport_height),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state, event.repeat);
        }
    }

    fn handle_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                // Only register if not a key repeat
                if !repeat {
                    self.state.press(action);
                }
            }
            ElementState::Released => self.state.release(action),
        }
    }

    /// Process a touch event; `window_size` converts window pixels into
    /// viewport coordinates
    pub fn process_touch(&mut self, touch: &Touch, window_size: PhysicalSize<u32>) {
        let scale_x = self.viewport.0 / window_size.width.max(1) as f32;
        let scale_y = self.viewport.1 / window_size.height.max(1) as f32;
        let x = touch.location.x as f32 * scale_x;
        let y = touch.location.y as f32 * scale_y;
        self.handle_touch(touch.phase, x, y, Instant::now());
    }

    fn handle_touch(&mut self, phase: TouchPhase, x: f32, y: f32, now: Instant) {
        match phase {
            TouchPhase::Started => {
                let (width, height) = self.viewport;
                for action in self.touch.touch_started(x, y, width, height, now) {
                    debug!("Touch at ({:.0}, {:.0}) -> {:?}", x, y, action);
                    self.state.press(action);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                for action in self.touch.touch_ended() {
                    self.state.release(*action);
                }
            }
            TouchPhase::Moved => {}
        }
    }

    /// Start a new tick. Call once per simulation tick after the game
    /// has read the state.
    pub fn update(&mut self) {
        self.state.update();
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Drop all held input, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
