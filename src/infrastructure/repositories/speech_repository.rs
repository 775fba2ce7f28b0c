use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
#[error("speech synthesis failed: {0}")]
pub struct SpeechError(pub String);

/// One dialogue line to voice. Owned so it can cross task boundaries when
/// the assembler fans out.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: String,
    pub model: String,
    /// Style instructions; only honored by style-capable models.
    pub instructions: String,
    /// Per-request credential override.
    pub api_key: Option<String>,
}

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider.
///
/// Implementations are responsible for:
/// - Splitting text that exceeds the provider's input limit
/// - Merging per-chunk audio into one stream, in chunk order
/// - Provider-specific voice mapping
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize one line of text into audio bytes (MP3).
    ///
    /// Failures propagate as-is; a failed chunk fails the whole line.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}
