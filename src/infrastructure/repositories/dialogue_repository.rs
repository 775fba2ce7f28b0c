use crate::domain::dialogue::{Dialogue, ModelOptions};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum DialogueModelError {
    /// The model responded, but the payload did not parse into the dialogue
    /// schema. The generator retries these.
    #[error("schema validation failed: {0}")]
    SchemaValidation(String),
    /// Transport or provider failure. Not retried.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Repository for structured dialogue generation.
/// Abstracts the underlying text-model provider.
///
/// Implementations are responsible for:
/// - Constraining the model to the dialogue JSON schema
/// - Parsing the response into a `Dialogue`
/// - Distinguishing schema-invalid output from provider failures
#[async_trait]
pub trait DialogueModelRepository: Send + Sync {
    /// Run one generation call against the model. One call, no retries;
    /// retry policy belongs to the caller.
    async fn generate(
        &self,
        prompt: &str,
        options: &ModelOptions,
    ) -> Result<Dialogue, DialogueModelError>;
}
