use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        dialogue::{templates, DialogueRow, InstructionSet, ModelOptions},
        podcast::{GenerateParams, PodcastService, RenderOutcome},
        tts::VoiceConfig,
    },
    error::{AppError, AppResult},
    infrastructure::config::Config,
};

/// Request for POST /api/podcast/generate
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub source_text: String,
    /// Instruction preset name; ignored when `instructions` is given.
    #[serde(default)]
    pub template: Option<String>,
    /// Fully custom instruction fields.
    #[serde(default)]
    pub instructions: Option<InstructionSet>,
    #[serde(default)]
    pub model: ModelOptions,
    #[serde(default)]
    pub voices: VoiceConfig,
    /// Hand-edited transcript the model should revise.
    #[serde(default)]
    pub edited_transcript: Option<String>,
    #[serde(default)]
    pub user_feedback: Option<String>,
    /// Reuse an existing session instead of opening a new one.
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// Request for POST /api/podcast/:session_id/regenerate
#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub instructions: Option<InstructionSet>,
    #[serde(default)]
    pub model: ModelOptions,
    #[serde(default)]
    pub voices: VoiceConfig,
    #[serde(default)]
    pub user_feedback: Option<String>,
}

/// Request for POST /api/podcast/:session_id/rerender
#[derive(Debug, Deserialize)]
pub struct RerenderRequest {
    #[serde(default)]
    pub voices: VoiceConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub session_id: Uuid,
    pub transcript: String,
    pub character_count: usize,
    pub audio_path: String,
}

impl From<RenderOutcome> for RenderResponse {
    fn from(outcome: RenderOutcome) -> Self {
        Self {
            session_id: outcome.session_id,
            transcript: outcome.transcript,
            character_count: outcome.character_count,
            audio_path: outcome.audio_path.display().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveLinesResponse {
    pub transcript: String,
}

pub struct PodcastController {
    podcast_service: Arc<PodcastService>,
    config: Arc<Config>,
}

impl PodcastController {
    pub fn new(podcast_service: Arc<PodcastService>, config: Arc<Config>) -> Self {
        Self {
            podcast_service,
            config,
        }
    }

    /// POST /api/podcast/generate - Generate a dialogue and render audio
    pub async fn generate(
        State(controller): State<Arc<PodcastController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<Json<RenderResponse>> {
        if request.source_text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Provide source text before generating audio".to_string(),
            ));
        }

        let instructions =
            controller.resolve_instructions(request.instructions, request.template.as_deref())?;
        let (model, voices) = controller.resolve_credentials(request.model, request.voices)?;

        let outcome = controller
            .podcast_service
            .generate(
                request.session_id,
                GenerateParams {
                    source_text: request.source_text,
                    instructions,
                    options: model,
                    voices,
                    edited_transcript: request.edited_transcript,
                    user_feedback: request.user_feedback,
                },
            )
            .await?;

        Ok(Json(outcome.into()))
    }

    /// POST /api/podcast/:session_id/regenerate - Revise the dialogue with
    /// the prior transcript and feedback, then render
    pub async fn regenerate(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<RegenerateRequest>,
    ) -> AppResult<Json<RenderResponse>> {
        let instructions =
            controller.resolve_instructions(request.instructions, request.template.as_deref())?;
        let (model, voices) = controller.resolve_credentials(request.model, request.voices)?;

        let outcome = controller
            .podcast_service
            .regenerate(session_id, instructions, model, voices, request.user_feedback)
            .await?;

        Ok(Json(outcome.into()))
    }

    /// POST /api/podcast/:session_id/rerender - Re-render audio with new
    /// voice settings, without calling the text model
    pub async fn rerender(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<RerenderRequest>,
    ) -> AppResult<Json<RenderResponse>> {
        let (_, voices) =
            controller.resolve_credentials(ModelOptions::default(), request.voices)?;

        let outcome = controller.podcast_service.rerender(session_id, voices).await?;

        Ok(Json(outcome.into()))
    }

    /// GET /api/podcast/:session_id/lines - Export the dialogue as rows
    pub async fn get_lines(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<Vec<DialogueRow>>> {
        let rows = controller.podcast_service.export_rows(session_id).await?;
        Ok(Json(rows))
    }

    /// PUT /api/podcast/:session_id/lines - Replace the dialogue with
    /// edited rows
    pub async fn put_lines(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
        Json(rows): Json<Vec<DialogueRow>>,
    ) -> AppResult<Json<SaveLinesResponse>> {
        let transcript = controller
            .podcast_service
            .save_lines(session_id, &rows)
            .await?;
        Ok(Json(SaveLinesResponse { transcript }))
    }

    /// GET /api/podcast/:session_id/markdown - Markdown export
    pub async fn get_markdown(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<([(header::HeaderName, &'static str); 1], String)> {
        let markdown = controller.podcast_service.export_markdown(session_id).await?;
        Ok((
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            markdown,
        ))
    }

    /// GET /api/podcast/:session_id/audio - Latest rendered audio
    pub async fn get_audio(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.podcast_service.audio(session_id).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        if let Ok(value) = audio.character_count.to_string().parse() {
            headers.insert("X-Character-Count", value);
        }

        Ok((StatusCode::OK, headers, Body::from(audio.bytes)))
    }

    fn resolve_instructions(
        &self,
        custom: Option<InstructionSet>,
        template: Option<&str>,
    ) -> AppResult<InstructionSet> {
        if let Some(custom) = custom {
            return Ok(custom);
        }

        let name = template.unwrap_or("podcast");
        templates::get(name)
            .cloned()
            .ok_or_else(|| AppError::BadRequest(format!("no instruction template named '{name}'")))
    }

    /// Fill credentials in from server config and make a single request key
    /// apply to both the text and speech calls. A custom API base needs no
    /// key; otherwise one must exist somewhere.
    fn resolve_credentials(
        &self,
        mut model: ModelOptions,
        mut voices: VoiceConfig,
    ) -> AppResult<(ModelOptions, VoiceConfig)> {
        if model.api_base.is_none() {
            model.api_base = self.config.openai_api_base.clone();
        }

        if voices.api_key.is_none() {
            voices.api_key = model.api_key.clone();
        }

        let has_key = model.api_key.is_some()
            || voices.api_key.is_some()
            || self.config.openai_api_key.is_some();
        if model.api_base.is_none() && !has_key {
            return Err(AppError::BadRequest(
                "An OpenAI API key is required: set OPENAI_API_KEY or pass one in the request"
                    .to_string(),
            ));
        }

        Ok((model, voices))
    }
}
