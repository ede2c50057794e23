// Input handling system
//
// - `action`: game actions and default key bindings
// - `config`: binding lookup and remapping
// - `state`: per-tick action state read by the game
// - `touch`: screen-region touch controls
// - `manager`: turns winit events into action state
//
// ```rust
// let mut input = InputManager::new(800.0, 600.0);
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Each simulation tick
// game.update(input.state_mut());
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod state;
pub mod touch;

pub use action::Action;
pub use manager::InputManager;
pub use state::InputState;
