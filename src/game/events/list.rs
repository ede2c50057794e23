// Ordered event list with a single active slot

use super::event::{Event, EventTag, TriggerContext};
use crate::engine::input::InputState;
use crate::engine::renderer::Canvas;

/// Result of giving the active event its tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventProgress {
    /// The event still owns the game
    Running(EventTag),
    /// The event ended this tick
    Finished(EventTag),
}

/// Events in priority order. The first occurring one is the active event.
#[derive(Default)]
pub struct EventList {
    events: Vec<Box<dyn Event>>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Box<dyn Event>) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check triggers in order and return the first occurring event.
    /// Events after it are not checked this tick.
    fn activate(&mut self, ctx: &TriggerContext) -> Option<&mut Box<dyn Event>> {
        for event in self.events.iter_mut() {
            if event.check(ctx) {
                return Some(event);
            }
        }
        None
    }

    /// Give the active event, if any, this tick's logic.
    ///
    /// `None` means no event occurs and gameplay runs.
    pub fn update(&mut self, ctx: &TriggerContext, input: &mut InputState) -> Option<EventProgress> {
        let event = self.activate(ctx)?;
        let tag = event.tag();
        if event.update(input) {
            Some(EventProgress::Running(tag))
        } else {
            Some(EventProgress::Finished(tag))
        }
    }

    /// True while some event owns the game
    pub fn has_active(&self) -> bool {
        self.events.iter().any(|event| event.is_occurring())
    }

    /// Draw the active event's overlay
    pub fn render_active(&mut self, canvas: &mut dyn Canvas, delta_ms: f32) {
        if let Some(event) = self.events.iter_mut().find(|event| event.is_occurring()) {
            event.render(canvas, delta_ms);
        }
    }

}
