pub mod generator;
pub mod templates;

pub use generator::{
    DialogueGenerator, GenerationError, GenerationRequest, ModelOptions, ReasoningEffort,
};
pub use templates::InstructionSet;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two speaker tags the text model may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "speaker-1")]
    Speaker1,
    #[serde(rename = "speaker-2")]
    Speaker2,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Speaker1 => write!(f, "speaker-1"),
            Speaker::Speaker2 => write!(f, "speaker-2"),
        }
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speaker-1" => Ok(Speaker::Speaker1),
            "speaker-2" => Ok(Speaker::Speaker2),
            other => Err(format!(
                "unknown speaker tag '{}', expected 'speaker-1' or 'speaker-2'",
                other
            )),
        }
    }
}

/// One speaker-tagged utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub text: String,
}

/// The structured script produced by the text model: a hidden scratchpad
/// followed by the ordered speaker lines. Line order defines the final
/// audio and transcript order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub scratchpad: String,
    #[serde(rename = "dialogue")]
    pub lines: Vec<DialogueLine>,
}

impl Dialogue {
    /// Plain-text transcript, one `speaker: text` line per dialogue entry
    /// separated by blank lines. This is also the exact shape fed back to
    /// the model as the prior transcript on regeneration.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&format!("{}: {}\n\n", line.speaker, line.text));
        }
        out
    }

    /// Export the lines as editor rows. The scratchpad is not part of the
    /// table; it is reasoning-only and not user-facing.
    pub fn to_rows(&self) -> Vec<DialogueRow> {
        self.lines
            .iter()
            .map(|line| DialogueRow {
                speaker: line.speaker.to_string(),
                line: line.text.clone(),
            })
            .collect()
    }

    /// Rebuild a dialogue from editor rows. The scratchpad is not
    /// recoverable from the table and resets to empty.
    pub fn from_rows(rows: &[DialogueRow]) -> Result<Self, String> {
        let lines = rows
            .iter()
            .map(|row| {
                Ok(DialogueLine {
                    speaker: row.speaker.parse()?,
                    text: row.line.clone(),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Dialogue {
            scratchpad: String::new(),
            lines,
        })
    }

    /// Deterministic Markdown export: title, transcript heading, one
    /// bolded-speaker line per entry.
    pub fn to_markdown(&self) -> String {
        let mut parts = vec![
            "# Papercast Transcript\n".to_string(),
            "## Transcript\n".to_string(),
        ];
        for line in &self.lines {
            parts.push(format!("**{}:** {}\n", line.speaker, line.text.trim()));
        }
        parts.join("\n")
    }
}

/// Row-oriented representation for the line editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRow {
    #[serde(rename = "Speaker")]
    pub speaker: String,
    #[serde(rename = "Line")]
    pub line: String,
}
