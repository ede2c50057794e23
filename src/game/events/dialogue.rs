// Typewriter dialogue overlay

use super::event::{Event, EventCore, EventTag, Trigger, TriggerContext};
use super::script::Script;
use super::wrap::wrap_text;
use crate::core::math::Rect;
use crate::engine::input::{Action, InputState};
use crate::engine::renderer::{colors, Canvas};
use log::info;

/// Default time between revealed characters
pub const DEFAULT_REVEAL_INTERVAL_MS: f32 = 20.0;

const BOX_X: f32 = 50.0;
const BOX_Y: f32 = 50.0;
const BOX_HEIGHT: f32 = 150.0;
const BOX_BORDER: f32 = 2.0;
const TEXT_X: f32 = 70.0;
const TEXT_BASELINE: f32 = 90.0;
const LINE_SPACING: f32 = 24.0;
/// Horizontal space kept clear of text: both box margins plus padding
const TEXT_MARGIN: f32 = 120.0;

/// A scripted conversation revealed one character at a time and advanced
/// with Confirm
#[derive(Debug)]
pub struct Dialogue {
    core: EventCore,
    tag: EventTag,
    script: Script,
    line_index: usize,
    /// Characters of the current line on screen
    char_index: usize,
    line_finished: bool,
    accumulated_ms: f32,
    reveal_interval_ms: f32,
}

impl Dialogue {
    pub fn new(tag: EventTag, script: Script, trigger: Trigger, reveal_interval_ms: f32) -> Self {
        Self {
            core: EventCore::new(trigger),
            tag,
            script,
            line_index: 0,
            char_index: 0,
            line_finished: false,
            accumulated_ms: 0.0,
            reveal_interval_ms,
        }
    }

    fn current_len(&self) -> usize {
        self.script.lines()[self.line_index].text.chars().count()
    }

    /// Advance the typewriter by `delta_ms` of wall-clock time
    pub fn reveal(&mut self, delta_ms: f32) {
        let len = self.current_len();
        if self.line_finished {
            self.char_index = len;
            return;
        }

        self.accumulated_ms += delta_ms;
        if self.accumulated_ms >= self.reveal_interval_ms {
            self.char_index += 1;
            self.accumulated_ms = 0.0;

            if self.char_index >= len {
                self.char_index = len;
                self.line_finished = true;
            }
        }
    }

    /// The part of the current line revealed so far
    pub fn revealed_text(&self) -> String {
        self.script.lines()[self.line_index]
            .text
            .chars()
            .take(self.char_index)
            .collect()
    }

    pub fn speaker(&self) -> &str {
        &self.script.lines()[self.line_index].speaker
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn line_finished(&self) -> bool {
        self.line_finished
    }

    fn reset_line(&mut self) {
        self.char_index = 0;
        self.accumulated_ms = 0.0;
        self.line_finished = false;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let (width, _) = canvas.size();
        let frame = Rect::new(BOX_X, BOX_Y, width - 2.0 * BOX_X, BOX_HEIGHT);
        canvas.fill_rect(frame, colors::DIALOGUE_BOX);
        canvas.stroke_rect(frame, colors::WHITE, BOX_BORDER);

        let label = format!("{}: ", self.speaker());
        canvas.fill_text(&label, TEXT_X, TEXT_BASELINE, colors::YELLOW);

        let start_x = TEXT_X + canvas.measure_text(&label);
        let max_width = width - TEXT_MARGIN - start_x;
        let lines = wrap_text(canvas, &self.revealed_text(), max_width);
        for (i, line) in lines.iter().enumerate() {
            canvas.fill_text(
                line,
                start_x,
                TEXT_BASELINE + i as f32 * LINE_SPACING,
                colors::WHITE,
            );
        }
    }
}

impl Event for Dialogue {
    fn tag(&self) -> EventTag {
        self.tag
    }

    fn check(&mut self, ctx: &TriggerContext) -> bool {
        let was_occurring = self.core.is_occurring();
        let occurring = self.core.update(ctx);
        if occurring && !was_occurring {
            info!("Dialogue {:?} started ({} lines)", self.tag, self.script.len());
        }
        occurring
    }

    fn update(&mut self, input: &mut InputState) -> bool {
        if self.line_finished && input.consume(Action::Confirm) {
            self.reset_line();
            self.line_index += 1;
            if self.line_index >= self.script.len() {
                self.line_index = 0;
                self.core.end();
                info!("Dialogue {:?} finished", self.tag);
                return false;
            }
        }
        true
    }

    fn render(&mut self, canvas: &mut dyn Canvas, delta_ms: f32) {
        self.reveal(delta_ms);
        self.draw(canvas);
    }

    fn is_occurring(&self) -> bool {
        self.core.is_occurring()
    }

    fn occurred(&self) -> bool {
        self.core.occurred()
    }
}
