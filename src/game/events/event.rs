// One-shot event state machine

use crate::engine::input::InputState;
use crate::engine::renderer::Canvas;

/// World facts event triggers can look at
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriggerContext {
    /// A character has touched the exit door
    pub exit_reached: bool,
}

/// Condition that starts an event
pub type Trigger = Box<dyn Fn(&TriggerContext) -> bool>;

/// Identifies what an event is for, so the game can react when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    Tutorial,
    LevelComplete,
}

/// Idle -> Occurring -> Done.
///
/// The trigger is checked only while idle. Once occurring the event stays
/// occurring until [`EventCore::end`], and once ended it never starts again.
pub struct EventCore {
    trigger: Trigger,
    occurred: bool,
    occurring: bool,
}

impl EventCore {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            occurred: false,
            occurring: false,
        }
    }

    /// Start on the first tick the trigger holds; returns whether occurring
    pub fn update(&mut self, ctx: &TriggerContext) -> bool {
        if self.occurring || (!self.occurred && (self.trigger)(ctx)) {
            self.occurring = true;
        }
        self.occurring
    }

    pub fn end(&mut self) {
        self.occurred = true;
        self.occurring = false;
    }

    pub fn occurred(&self) -> bool {
        self.occurred
    }

    pub fn is_occurring(&self) -> bool {
        self.occurring
    }
}

impl std::fmt::Debug for EventCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCore")
            .field("occurred", &self.occurred)
            .field("occurring", &self.occurring)
            .finish_non_exhaustive()
    }
}

/// A modal sequence that takes over the game while it occurs
pub trait Event {
    fn tag(&self) -> EventTag;

    /// Check the trigger; true while the event occurs
    fn check(&mut self, ctx: &TriggerContext) -> bool;

    /// Run one tick of the event's logic. Returns false once the event has
    /// ended.
    fn update(&mut self, input: &mut InputState) -> bool;

    /// Advance timed effects by `delta_ms` and draw the overlay
    fn render(&mut self, canvas: &mut dyn Canvas, delta_ms: f32);

    fn is_occurring(&self) -> bool;

    fn occurred(&self) -> bool;
}
