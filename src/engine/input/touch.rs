// Screen-region touch controls

use super::action::Action;
use std::time::{Duration, Instant};

/// Two taps closer together than this count as a confirm
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Actions a finished touch releases. Confirm stays down until a dialogue
/// consumes it.
pub const TOUCH_RELEASED: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];

/// Translates touches on the viewport into actions.
///
/// The left third of the screen moves left, the right third moves right
/// and the bottom half jumps. A quick second tap confirms dialogue.
#[derive(Debug)]
pub struct TouchMapper {
    last_tap: Option<Instant>,
    double_tap_window: Duration,
}

impl TouchMapper {
    pub fn new() -> Self {
        Self {
            last_tap: None,
            double_tap_window: DOUBLE_TAP_WINDOW,
        }
    }

    /// Actions pressed by a touch starting at (x, y) on a viewport of
    /// `width` x `height`
    pub fn touch_started(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        now: Instant,
    ) -> Vec<Action> {
        let mut actions = Vec::new();

        if x < width / 3.0 {
            actions.push(Action::MoveLeft);
        } else if x > width * 2.0 / 3.0 {
            actions.push(Action::MoveRight);
        }
        if y > height / 2.0 {
            actions.push(Action::Jump);
        }

        let double_tap = self
            .last_tap
            .map(|last| now.saturating_duration_since(last) < self.double_tap_window)
            .unwrap_or(false);
        if double_tap {
            actions.push(Action::Confirm);
            // A third tap starts a new pair
            self.last_tap = None;
        } else {
            self.last_tap = Some(now);
        }

        actions
    }

    /// Actions to release when a touch ends or is cancelled
    pub fn touch_ended(&self) -> &'static [Action] {
        &TOUCH_RELEASED
    }
}

impl Default for TouchMapper {
    fn default() -> Self {
        Self::new()
    }
}
