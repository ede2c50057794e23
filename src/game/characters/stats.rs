// Character stats - every character in the party moves the same way

/// Movement and animation tuning shared by all characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    /// Horizontal step per tick while a move action is held
    pub running_strength: f32,
    /// Vertical velocity set by a jump (negative is upward)
    pub jumping_strength: f32,
    /// Ticks each animation frame stays on screen
    pub animation_speed: u32,
}

pub const BASE_STATS: CharacterStats = CharacterStats {
    running_strength: 5.0,
    jumping_strength: -10.0,
    animation_speed: 10,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}
