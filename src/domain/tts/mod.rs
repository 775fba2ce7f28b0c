pub mod chunk;

pub use chunk::chunk_text;

use crate::domain::dialogue::Speaker;
use serde::{Deserialize, Serialize};

fn default_audio_model() -> String {
    "tts-1".to_string()
}

fn default_voice_1() -> String {
    "alloy".to_string()
}

fn default_voice_2() -> String {
    "echo".to_string()
}

/// Per-render voice settings. Supplied fresh on every render call and never
/// persisted; changing voices does not require regenerating the dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    #[serde(default = "default_audio_model")]
    pub audio_model: String,
    #[serde(default = "default_voice_1")]
    pub speaker_1_voice: String,
    #[serde(default = "default_voice_2")]
    pub speaker_2_voice: String,
    /// Style instructions, honored by style-capable models (gpt-4o-mini-tts)
    /// and ignored by the rest.
    #[serde(default)]
    pub speaker_1_instructions: String,
    #[serde(default)]
    pub speaker_2_instructions: String,
    /// Overrides the server-configured OpenAI key for this render only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            audio_model: default_audio_model(),
            speaker_1_voice: default_voice_1(),
            speaker_2_voice: default_voice_2(),
            speaker_1_instructions: String::new(),
            speaker_2_instructions: String::new(),
            api_key: None,
        }
    }
}

impl VoiceConfig {
    /// Voice and style instructions for one speaker.
    pub fn for_speaker(&self, speaker: Speaker) -> (&str, &str) {
        match speaker {
            Speaker::Speaker1 => (&self.speaker_1_voice, &self.speaker_1_instructions),
            Speaker::Speaker2 => (&self.speaker_2_voice, &self.speaker_2_instructions),
        }
    }
}
