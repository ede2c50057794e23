// Per-frame input state

use super::action::Action;
use std::collections::HashSet;

/// Logical action state seen by the game for the current tick
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions that went down since the last update
    just_pressed: HashSet<Action>,

    /// Actions that went up since the last update
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this tick
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Take a pressed action so no later handler sees it.
    ///
    /// The action stays consumed until it is physically released and
    /// pressed again.
    pub fn consume(&mut self, action: Action) -> bool {
        let was_pressed = self.pressed.remove(&action);
        self.just_pressed.remove(&action);
        was_pressed
    }

    /// Consume an action only if it went down this tick
    pub fn consume_just_pressed(&mut self, action: Action) -> bool {
        if self.just_pressed.contains(&action) {
            self.consume(action)
        } else {
            false
        }
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new tick: edge-triggered state is cleared, held state kept
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_consume_hides_action() {
        let mut input = InputState::new();
        input.press(Action::Confirm);
        assert!(input.consume(Action::Confirm));
        assert!(!input.is_pressed(Action::Confirm));
        assert!(!input.just_pressed(Action::Confirm));
        // Second handler in the same tick sees nothing
        assert!(!input.consume(Action::Confirm));
    }

    #[test]
    fn test_consumed_action_needs_new_press() {
        let mut input = InputState::new();
        input.press(Action::Confirm);
        input.consume(Action::Confirm);
        input.update();
        // Physical key-up arrives later and must not register
        input.release(Action::Confirm);
        assert!(!input.just_released(Action::Confirm));

        input.press(Action::Confirm);
        assert!(input.just_pressed(Action::Confirm));
    }

    #[test]
    fn test_consume_just_pressed_ignores_held() {
        let mut input = InputState::new();
        input.press(Action::Pause);
        input.update();
        assert!(!input.consume_just_pressed(Action::Pause));
        assert!(input.is_pressed(Action::Pause));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();
        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::Jump);
        assert!(!input.just_released(Action::Jump));
    }
}
