use super::dialogue_repository::{DialogueModelError, DialogueModelRepository};
use crate::domain::dialogue::{Dialogue, ModelOptions, ReasoningEffort};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
        ReasoningEffort as OpenAiReasoningEffort, ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;
use serde_json::json;

/// OpenAI implementation of the dialogue model repository, using chat
/// completions with strict JSON-schema structured outputs.
pub struct OpenAiDialogueRepository {
    default_config: OpenAIConfig,
}

impl OpenAiDialogueRepository {
    pub fn new(default_config: OpenAIConfig) -> Self {
        Self { default_config }
    }

    /// A custom api_base implies a self-hosted backend with its own
    /// contract: the per-request key and reasoning effort are not forwarded.
    fn client_for(&self, options: &ModelOptions) -> Client<OpenAIConfig> {
        let config = match (&options.api_base, &options.api_key) {
            (Some(base), _) => OpenAIConfig::new().with_api_base(base),
            (None, Some(key)) => self.default_config.clone().with_api_key(key),
            (None, None) => self.default_config.clone(),
        };
        Client::with_config(config)
    }

    fn response_format() -> ResponseFormat {
        ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: "dialogue".to_string(),
                description: Some(
                    "A two-speaker dialogue script with a hidden scratchpad".to_string(),
                ),
                schema: Some(dialogue_schema()),
                strict: Some(true),
            },
        }
    }
}

/// JSON schema the model output is constrained to: a scratchpad plus an
/// ordered list of speaker-tagged lines.
fn dialogue_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "scratchpad": { "type": "string" },
            "dialogue": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "speaker": {
                            "type": "string",
                            "enum": ["speaker-1", "speaker-2"]
                        },
                        "text": { "type": "string" }
                    },
                    "required": ["speaker", "text"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["scratchpad", "dialogue"],
        "additionalProperties": false
    })
}

#[async_trait]
impl DialogueModelRepository for OpenAiDialogueRepository {
    async fn generate(
        &self,
        prompt: &str,
        options: &ModelOptions,
    ) -> Result<Dialogue, DialogueModelError> {
        let client = self.client_for(options);

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| DialogueModelError::Provider(e.to_string()))?;

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&options.model)
            .messages([message.into()])
            .response_format(Self::response_format());

        if options.api_base.is_none() {
            if let Some(effort) = options.reasoning_effort {
                args.reasoning_effort(match effort {
                    ReasoningEffort::Low => OpenAiReasoningEffort::Low,
                    ReasoningEffort::Medium => OpenAiReasoningEffort::Medium,
                    ReasoningEffort::High => OpenAiReasoningEffort::High,
                });
            }
        }

        let request = args
            .build()
            .map_err(|e| DialogueModelError::Provider(e.to_string()))?;

        tracing::info!(
            model = %options.model,
            custom_api_base = options.api_base.is_some(),
            prompt_chars = prompt.chars().count(),
            "Calling text model for dialogue generation"
        );

        let response = client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %options.model, "Text model call failed");
            DialogueModelError::Provider(e.to_string())
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                DialogueModelError::SchemaValidation("model returned no content".to_string())
            })?;

        serde_json::from_str::<Dialogue>(content).map_err(|e| {
            DialogueModelError::SchemaValidation(format!("output did not match schema: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_restricts_speaker_tags() {
        let schema = dialogue_schema();
        let tags = &schema["properties"]["dialogue"]["items"]["properties"]["speaker"]["enum"];
        assert_eq!(*tags, json!(["speaker-1", "speaker-2"]));
    }

    #[test]
    fn schema_output_parses_into_dialogue() {
        let payload = r#"{
            "scratchpad": "outline",
            "dialogue": [
                {"speaker": "speaker-1", "text": "Hello"},
                {"speaker": "speaker-2", "text": "Hi there"}
            ]
        }"#;
        let dialogue: Dialogue = serde_json::from_str(payload).unwrap();
        assert_eq!(dialogue.lines.len(), 2);
        assert_eq!(dialogue.scratchpad, "outline");
    }

    #[test]
    fn invalid_speaker_tag_fails_to_parse() {
        let payload = r#"{
            "scratchpad": "",
            "dialogue": [{"speaker": "host", "text": "Hello"}]
        }"#;
        assert!(serde_json::from_str::<Dialogue>(payload).is_err());
    }
}
