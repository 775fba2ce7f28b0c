use super::templates::InstructionSet;
use super::Dialogue;
use crate::infrastructure::repositories::{DialogueModelError, DialogueModelRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Attempts made against the text model before giving up on schema-invalid
/// output. Validation failures are transient model misbehavior, so a small
/// bounded retry with backoff is enough; anything persistent surfaces as a
/// typed error instead of looping.
const MAX_ATTEMPTS: u32 = 3;

const RETRY_BASE_DELAY_MS: u64 = 500;

const IMPROVE_INSTRUCTION: &str = "Based on the original text, please generate an improved version of the dialogue by incorporating the edits, comments and feedback.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("model returned schema-invalid output after {attempts} attempts: {last_error}")]
    SchemaInvalid { attempts: u32, last_error: String },
    #[error("text model error: {0}")]
    Model(String),
}

/// Effort hint for reasoning-capable models. Absent means the parameter is
/// not forwarded at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

fn default_text_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Text model selection and credentials for one generation call.
///
/// When `api_base` is set the backend is assumed to be self-hosted with its
/// own contract, so `api_key` and `reasoning_effort` are not forwarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOptions {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            model: default_text_model(),
            api_base: None,
            api_key: None,
            reasoning_effort: None,
        }
    }
}

/// Everything needed to build one generation prompt.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source_text: String,
    pub instructions: InstructionSet,
    /// Previously generated transcript, possibly hand-edited, fed back to
    /// the model as revision context.
    pub prior_transcript: Option<String>,
    /// Free-form user feedback on the previous dialogue.
    pub user_feedback: Option<String>,
    pub options: ModelOptions,
}

/// Drives the structured-output text model: builds the prompt, invokes the
/// model repository, and retries schema-invalid output a bounded number of
/// times with exponential backoff.
pub struct DialogueGenerator {
    repo: Arc<dyn DialogueModelRepository>,
}

impl DialogueGenerator {
    pub fn new(repo: Arc<dyn DialogueModelRepository>) -> Self {
        Self { repo }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Dialogue, GenerationError> {
        let prompt = build_prompt(request);

        let mut last_error = String::new();
        for attempt in 1..=MAX_ATTEMPTS {
            match self.repo.generate(&prompt, &request.options).await {
                Ok(dialogue) => {
                    if dialogue.lines.is_empty() {
                        last_error = "model returned an empty dialogue".to_string();
                    } else {
                        tracing::info!(
                            attempt,
                            line_count = dialogue.lines.len(),
                            model = %request.options.model,
                            "Dialogue generated"
                        );
                        return Ok(dialogue);
                    }
                }
                Err(DialogueModelError::SchemaValidation(msg)) => {
                    last_error = msg;
                }
                Err(DialogueModelError::Provider(msg)) => {
                    return Err(GenerationError::Model(msg));
                }
            }

            tracing::warn!(
                attempt,
                max_attempts = MAX_ATTEMPTS,
                error = %last_error,
                "Schema-invalid dialogue output, retrying"
            );

            if attempt < MAX_ATTEMPTS {
                let delay = RETRY_BASE_DELAY_MS * 2u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }

        Err(GenerationError::SchemaInvalid {
            attempts: MAX_ATTEMPTS,
            last_error,
        })
    }
}

/// Substitute the instruction fields and source text into the fixed prompt
/// skeleton. When a prior transcript or feedback is present, both are
/// appended as an explicit requested-improvements block so the model revises
/// the earlier dialogue instead of starting over.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let fields = &request.instructions;

    let mut prompt = format!(
        "{intro}\n\nHere is the original input text:\n\n<input_text>\n{text}\n</input_text>\n\n{text_instructions}\n\n<scratchpad>\n{scratch_pad}\n</scratchpad>\n\n{prelude}\n\n<podcast_dialogue>\n{dialog}\n</podcast_dialogue>\n",
        intro = fields.intro,
        text = request.source_text,
        text_instructions = fields.text_instructions,
        scratch_pad = fields.scratch_pad,
        prelude = fields.prelude,
        dialog = fields.dialog,
    );

    let transcript = request
        .prior_transcript
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let feedback = request
        .user_feedback
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());

    if transcript.is_some() || feedback.is_some() {
        if let Some(transcript) = transcript {
            prompt.push_str(&format!(
                "\nPreviously generated transcript, with specific edits and comments that I want you to carefully address:\n<edited_transcript>\n{}\n</edited_transcript>\n",
                transcript
            ));
        }

        prompt.push_str("<requested_improvements>");
        if let Some(feedback) = feedback {
            prompt.push_str(&format!("\nOverall user feedback:\n\n{}\n", feedback));
        }
        prompt.push_str(&format!("\n{}</requested_improvements>\n", IMPROVE_INSTRUCTION));
    }

    prompt
}
