use super::speech_repository::{SpeechError, SpeechRepository, SpeechRequest};
use crate::domain::tts::chunk_text;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequestArgs, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;

/// OpenAI limits speech input to 4096 characters; stay under it.
const MAX_CHUNK_CHARS: usize = 4000;

/// OpenAI implementation of the speech repository.
pub struct OpenAiSpeechRepository {
    default_config: OpenAIConfig,
}

impl OpenAiSpeechRepository {
    pub fn new(default_config: OpenAIConfig) -> Self {
        Self { default_config }
    }

    fn client_for(&self, api_key: Option<&str>) -> Client<OpenAIConfig> {
        match api_key {
            Some(key) => Client::with_config(self.default_config.clone().with_api_key(key)),
            None => Client::with_config(self.default_config.clone()),
        }
    }

    fn parse_model(model: &str) -> SpeechModel {
        match model {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    fn parse_voice(voice: &str) -> Voice {
        match voice.to_lowercase().as_str() {
            "alloy" => Voice::Alloy,
            "ash" => Voice::Ash,
            "ballad" => Voice::Ballad,
            "coral" => Voice::Coral,
            "echo" => Voice::Echo,
            "fable" => Voice::Fable,
            "onyx" => Voice::Onyx,
            "nova" => Voice::Nova,
            "sage" => Voice::Sage,
            "shimmer" => Voice::Shimmer,
            _ => Voice::Alloy, // Default fallback
        }
    }

    async fn call_openai(
        &self,
        client: &Client<OpenAIConfig>,
        chunk: &str,
        request: &SpeechRequest,
    ) -> Result<Vec<u8>, SpeechError> {
        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            chunk_chars = chunk.chars().count(),
            "Calling OpenAI speech API"
        );

        let mut args = CreateSpeechRequestArgs::default();
        args.model(Self::parse_model(&request.model))
            .voice(Self::parse_voice(&request.voice))
            .input(chunk);
        if !request.instructions.is_empty() {
            args.instructions(&request.instructions);
        }
        let speech_request = args
            .build()
            .map_err(|e| SpeechError(format!("invalid speech request: {e}")))?;

        let response = client.audio().speech(speech_request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %request.model,
                voice = %request.voice,
                "OpenAI speech API call failed"
            );
            SpeechError(format!("OpenAI TTS error: {e}"))
        })?;

        Ok(response.bytes.to_vec())
    }
}

#[async_trait]
impl SpeechRepository for OpenAiSpeechRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let start_time = std::time::Instant::now();
        let client = self.client_for(request.api_key.as_deref());

        let chunks = chunk_text(&request.text, MAX_CHUNK_CHARS);

        let mut merged_audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let audio = self.call_openai(&client, chunk, request).await?;
            merged_audio.extend(audio);

            tracing::debug!(
                chunk_index = index,
                total_audio_size = merged_audio.len(),
                "Chunk synthesized and merged"
            );
        }

        tracing::info!(
            provider = "openai",
            model = %request.model,
            voice = %request.voice,
            latency_ms = start_time.elapsed().as_millis(),
            chunk_count = chunks.len(),
            text_chars = request.text.chars().count(),
            audio_size_bytes = merged_audio.len(),
            "Line synthesis completed"
        );

        Ok(merged_audio)
    }
}
