// Dialogue scripts

use serde::{Deserialize, Serialize};

/// Dialogue script errors
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Malformed dialogue script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dialogue script has no lines")]
    Empty,
}

/// One line of dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: &str, text: &str) -> Self {
        Self {
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }
}

/// A non-empty, read-only sequence of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<DialogueLine>,
}

impl Script {
    pub fn new(lines: Vec<DialogueLine>) -> Result<Self, ScriptError> {
        if lines.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { lines })
    }

    /// Parse a JSON array of `{ "speaker": ..., "text": ... }` objects
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let lines: Vec<DialogueLine> = serde_json::from_str(json)?;
        Self::new(lines)
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Opening conversation and controls help
    pub fn intro() -> Self {
        Self {
            lines: vec![
                DialogueLine::new("Monkey", "Guys?.. Where are we? (Hit [Enter] to continue)"),
                DialogueLine::new("Cat", "I have absolutely no idea. (Hit [Enter] to continue)"),
                DialogueLine::new("Dog", "Doesn't something strike you as strange?"),
                DialogueLine::new("Monkey", "What?"),
                DialogueLine::new("Dog", "Since when are we capable of speaking?"),
                DialogueLine::new(
                    "Game",
                    "Use [LeftArrow] and [RightArrow] to move, Press [Space] to Jump",
                ),
                DialogueLine::new(
                    "Game",
                    "Press [1] or [2] or [3] to switch between the characters (Hit [Enter] to close dialogue)",
                ),
            ],
        }
    }

    /// Played when a character reaches the exit
    pub fn level_complete() -> Self {
        Self {
            lines: vec![
                DialogueLine::new("Cat", "A door! Is this the way out?"),
                DialogueLine::new("Game", "Level complete! (Hit [Enter] to play again)"),
            ],
        }
    }
}
