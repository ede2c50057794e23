// Events: one-shot modal sequences that pause gameplay while they run

mod dialogue;
mod event;
mod list;
mod script;
mod wrap;

pub use dialogue::{Dialogue, DEFAULT_REVEAL_INTERVAL_MS};
pub use event::{Event, EventCore, EventTag, Trigger, TriggerContext};
pub use list::{EventList, EventProgress};
pub use script::{DialogueLine, Script, ScriptError};
pub use wrap::wrap_text;
