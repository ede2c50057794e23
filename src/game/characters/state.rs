// Animation state selection

/// Which animation strip a character shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

impl AnimState {
    /// All states in strip-table order
    pub const ALL: [AnimState; 4] = [AnimState::Idle, AnimState::Run, AnimState::Jump, AnimState::Fall];

    /// Position in the fixed strip table
    pub fn index(self) -> usize {
        match self {
            AnimState::Idle => 0,
            AnimState::Run => 1,
            AnimState::Jump => 2,
            AnimState::Fall => 3,
        }
    }

    /// Strip file name inside a character's directory
    pub fn file_name(self) -> &'static str {
        match self {
            AnimState::Idle => "Idle.png",
            AnimState::Run => "Run.png",
            AnimState::Jump => "Jump.png",
            AnimState::Fall => "Fall.png",
        }
    }

    /// Pick the state from vertical velocity, with horizontal movement
    /// taking precedence
    pub fn select(velocity_y: f32, moving: bool) -> Self {
        if moving {
            AnimState::Run
        } else if velocity_y == 0.0 {
            AnimState::Idle
        } else if velocity_y < 0.0 {
            AnimState::Jump
        } else {
            AnimState::Fall
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_from_velocity() {
        assert_eq!(AnimState::select(0.0, false), AnimState::Idle);
        assert_eq!(AnimState::select(-9.5, false), AnimState::Jump);
        assert_eq!(AnimState::select(0.5, false), AnimState::Fall);
    }

    #[test]
    fn test_run_overrides_air_states() {
        assert_eq!(AnimState::select(-10.0, true), AnimState::Run);
        assert_eq!(AnimState::select(3.0, true), AnimState::Run);
        assert_eq!(AnimState::select(0.0, true), AnimState::Run);
    }

    #[test]
    fn test_indices_match_table_order() {
        for (i, state) in AnimState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }
}
