// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Every logical input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Dialogue
    Confirm,

    // Character focus
    SelectCharacter1,
    SelectCharacter2,
    SelectCharacter3,

    // Meta actions
    Pause,
    ToggleDebug,
    Quit,
}

impl Action {
    /// Party slot addressed by a character selection action
    pub fn character_slot(self) -> Option<usize> {
        match self {
            Action::SelectCharacter1 => Some(0),
            Action::SelectCharacter2 => Some(1),
            Action::SelectCharacter3 => Some(2),
            _ => None,
        }
    }

    /// Selection actions in slot order
    pub const CHARACTER_SELECTION: [Action; 3] = [
        Action::SelectCharacter1,
        Action::SelectCharacter2,
        Action::SelectCharacter3,
    ];
}

/// Represents a physical input source bound to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (arrows plus the WASD layout)
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        // Dialogue
        (InputSource::key(KeyCode::Enter), Action::Confirm),
        (InputSource::key(KeyCode::NumpadEnter), Action::Confirm),
        // Character selection
        (InputSource::key(KeyCode::Digit1), Action::SelectCharacter1),
        (InputSource::key(KeyCode::Digit2), Action::SelectCharacter2),
        (InputSource::key(KeyCode::Digit3), Action::SelectCharacter3),
        (InputSource::key(KeyCode::Numpad1), Action::SelectCharacter1),
        (InputSource::key(KeyCode::Numpad2), Action::SelectCharacter2),
        (InputSource::key(KeyCode::Numpad3), Action::SelectCharacter3),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::F3), Action::ToggleDebug),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
