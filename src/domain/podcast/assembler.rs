use crate::domain::dialogue::Dialogue;
use crate::domain::tts::VoiceConfig;
use crate::infrastructure::repositories::{SpeechRepository, SpeechRequest};
use std::sync::Arc;

/// The output of one render: concatenated audio, the transcript, and the
/// total character count (observability only). Derived, never stored.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub audio: Vec<u8>,
    pub transcript: String,
    pub character_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("dialogue has no lines to render")]
    EmptyDialogue,
    #[error(transparent)]
    Synthesis(#[from] crate::infrastructure::repositories::SpeechError),
    #[error("synthesis task failed: {0}")]
    TaskJoin(String),
}

/// Voice every dialogue line concurrently, then reassemble audio and
/// transcript in the original line order.
///
/// One task per line is spawned up front; results are then awaited by line
/// index, so completion order never affects output order. The first failed
/// line aborts the whole render.
pub async fn render(
    speech_repo: Arc<dyn SpeechRepository>,
    dialogue: &Dialogue,
    config: &VoiceConfig,
) -> Result<RenderResult, RenderError> {
    if dialogue.lines.is_empty() {
        return Err(RenderError::EmptyDialogue);
    }

    let mut tasks = Vec::with_capacity(dialogue.lines.len());
    for line in &dialogue.lines {
        let (voice, instructions) = config.for_speaker(line.speaker);
        let request = SpeechRequest {
            text: line.text.clone(),
            voice: voice.to_string(),
            model: config.audio_model.clone(),
            instructions: instructions.to_string(),
            api_key: config.api_key.clone(),
        };
        let repo = speech_repo.clone();
        tasks.push(tokio::spawn(async move { repo.synthesize(&request).await }));
    }

    let mut audio = Vec::new();
    let mut transcript = String::new();
    let mut character_count = 0;

    for (line, task) in dialogue.lines.iter().zip(tasks) {
        let line_audio = task
            .await
            .map_err(|e| RenderError::TaskJoin(e.to_string()))??;

        audio.extend(line_audio);
        transcript.push_str(&format!("{}: {}\n\n", line.speaker, line.text));
        character_count += line.text.chars().count();
    }

    tracing::info!(
        line_count = dialogue.lines.len(),
        character_count,
        audio_size_bytes = audio.len(),
        "Render assembled"
    );

    Ok(RenderResult {
        audio,
        transcript,
        character_count,
    })
}
