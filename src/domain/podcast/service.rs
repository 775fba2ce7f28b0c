use super::assembler;
use super::error::PodcastServiceError;
use crate::domain::dialogue::{
    Dialogue, DialogueGenerator, DialogueRow, GenerationRequest, InstructionSet, ModelOptions,
};
use crate::domain::tts::VoiceConfig;
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::repositories::{DialogueModelRepository, SpeechRepository};
use crate::infrastructure::session::{Session, SessionStore};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Inputs for one generation call. Voice settings and credentials are
/// supplied fresh every time; nothing here is persisted beyond the session
/// dialogue itself.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub source_text: String,
    pub instructions: InstructionSet,
    pub options: ModelOptions,
    pub voices: VoiceConfig,
    /// Hand-edited transcript to revise, if the caller is iterating.
    pub edited_transcript: Option<String>,
    pub user_feedback: Option<String>,
}

/// What a render call hands back to the HTTP layer.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub session_id: Uuid,
    pub transcript: String,
    pub character_count: usize,
    pub audio_path: PathBuf,
}

/// The latest rendered audio for a session, with the character count it
/// was billed at.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub character_count: usize,
}

/// Orchestrates the whole pipeline: dialogue generation, parallel audio
/// assembly, artifact persistence, and the session-scoped edit/regenerate
/// loop.
pub struct PodcastService {
    generator: DialogueGenerator,
    speech_repo: Arc<dyn SpeechRepository>,
    sessions: SessionStore,
    artifacts: ArtifactStore,
}

impl PodcastService {
    pub fn new(
        dialogue_repo: Arc<dyn DialogueModelRepository>,
        speech_repo: Arc<dyn SpeechRepository>,
        sessions: SessionStore,
        artifacts: ArtifactStore,
    ) -> Self {
        Self {
            generator: DialogueGenerator::new(dialogue_repo),
            speech_repo,
            sessions,
            artifacts,
        }
    }

    /// Generate a dialogue from source text and render it. An existing
    /// session id replaces that session's dialogue; otherwise a new session
    /// is created.
    pub async fn generate(
        &self,
        session_id: Option<Uuid>,
        params: GenerateParams,
    ) -> Result<RenderOutcome, PodcastServiceError> {
        let source_text = params.source_text.trim().to_string();
        if source_text.is_empty() {
            return Err(PodcastServiceError::Invalid(
                "source text cannot be empty".to_string(),
            ));
        }

        let session_id = session_id.unwrap_or_else(Uuid::new_v4);

        tracing::info!(
            session_id = %session_id,
            source_chars = source_text.chars().count(),
            model = %params.options.model,
            "Generation request"
        );

        let dialogue = self
            .generator
            .generate(&GenerationRequest {
                source_text: source_text.clone(),
                instructions: params.instructions,
                prior_transcript: params.edited_transcript,
                user_feedback: params.user_feedback,
                options: params.options,
            })
            .await?;

        self.render_and_store(session_id, dialogue, source_text, &params.voices)
            .await
    }

    /// Re-invoke the text model for an existing session, feeding back the
    /// current transcript and the user's feedback. The new dialogue replaces
    /// the session state.
    pub async fn regenerate(
        &self,
        session_id: Uuid,
        instructions: InstructionSet,
        options: ModelOptions,
        voices: VoiceConfig,
        user_feedback: Option<String>,
    ) -> Result<RenderOutcome, PodcastServiceError> {
        let session = self.require_session(session_id).await?;

        let dialogue = self
            .generator
            .generate(&GenerationRequest {
                source_text: session.source_text.clone(),
                instructions,
                prior_transcript: Some(session.dialogue.transcript()),
                user_feedback,
                options,
            })
            .await?;

        self.render_and_store(session_id, dialogue, session.source_text, &voices)
            .await
    }

    /// Re-render the current session dialogue with new voice settings,
    /// without touching the text model.
    pub async fn rerender(
        &self,
        session_id: Uuid,
        voices: VoiceConfig,
    ) -> Result<RenderOutcome, PodcastServiceError> {
        let session = self.require_session(session_id).await?;

        self.render_and_store(session_id, session.dialogue, session.source_text, &voices)
            .await
    }

    /// Replace the session dialogue with edited rows. The scratchpad resets
    /// to empty; audio is untouched until the next re-render. Returns the
    /// refreshed transcript.
    pub async fn save_lines(
        &self,
        session_id: Uuid,
        rows: &[DialogueRow],
    ) -> Result<String, PodcastServiceError> {
        let mut session = self.require_session(session_id).await?;

        let dialogue = Dialogue::from_rows(rows).map_err(PodcastServiceError::Invalid)?;
        if dialogue.lines.is_empty() {
            return Err(PodcastServiceError::Invalid(
                "edited dialogue must have at least one line".to_string(),
            ));
        }

        let transcript = dialogue.transcript();
        session.dialogue = dialogue;
        self.sessions.put(session_id, session).await;

        tracing::info!(session_id = %session_id, "Dialogue edits saved");
        Ok(transcript)
    }

    /// Export the session dialogue as editor rows.
    pub async fn export_rows(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<DialogueRow>, PodcastServiceError> {
        let session = self.require_session(session_id).await?;
        Ok(session.dialogue.to_rows())
    }

    /// Export the session dialogue as a Markdown document.
    pub async fn export_markdown(&self, session_id: Uuid) -> Result<String, PodcastServiceError> {
        let session = self.require_session(session_id).await?;
        Ok(session.dialogue.to_markdown())
    }

    /// The latest rendered audio for a session.
    pub async fn audio(&self, session_id: Uuid) -> Result<AudioArtifact, PodcastServiceError> {
        let session = self.require_session(session_id).await?;
        let path = session.artifact.ok_or(PodcastServiceError::NoAudio)?;
        let bytes = self
            .artifacts
            .read(&path)
            .await
            .map_err(|e| PodcastServiceError::Dependency(e.to_string()))?;

        Ok(AudioArtifact {
            bytes,
            character_count: session.character_count,
        })
    }

    async fn require_session(&self, session_id: Uuid) -> Result<Session, PodcastServiceError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or(PodcastServiceError::NoDialogue)
    }

    async fn render_and_store(
        &self,
        session_id: Uuid,
        dialogue: Dialogue,
        source_text: String,
        voices: &VoiceConfig,
    ) -> Result<RenderOutcome, PodcastServiceError> {
        let rendered = assembler::render(self.speech_repo.clone(), &dialogue, voices).await?;

        let audio_path = self
            .artifacts
            .store(&rendered.audio)
            .await
            .map_err(|e| PodcastServiceError::Dependency(e.to_string()))?;

        self.sessions
            .put(
                session_id,
                Session {
                    dialogue,
                    source_text,
                    artifact: Some(audio_path.clone()),
                    character_count: rendered.character_count,
                },
            )
            .await;

        tracing::info!(
            session_id = %session_id,
            character_count = rendered.character_count,
            audio_path = %audio_path.display(),
            "Render stored"
        );

        Ok(RenderOutcome {
            session_id,
            transcript: rendered.transcript,
            character_count: rendered.character_count,
            audio_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::templates;
    use crate::domain::dialogue::{DialogueLine, Speaker};
    use crate::infrastructure::repositories::{
        DialogueModelError, SpeechError, SpeechRequest,
    };
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    struct FixedModel {
        calls: AtomicU32,
    }

    #[async_trait]
    impl DialogueModelRepository for FixedModel {
        async fn generate(
            &self,
            _prompt: &str,
            _options: &ModelOptions,
        ) -> Result<Dialogue, DialogueModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Dialogue {
                scratchpad: "plan".to_string(),
                lines: vec![
                    DialogueLine {
                        speaker: Speaker::Speaker1,
                        text: "Hello".to_string(),
                    },
                    DialogueLine {
                        speaker: Speaker::Speaker2,
                        text: "Hi there".to_string(),
                    },
                ],
            })
        }
    }

    /// Marks each line with the first byte of its voice name.
    struct VoiceMarkerStub;

    #[async_trait]
    impl SpeechRepository for VoiceMarkerStub {
        async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
            Ok(vec![request.voice.as_bytes()[0]])
        }
    }

    fn service(model: Arc<FixedModel>, dir: &std::path::Path) -> PodcastService {
        PodcastService::new(
            model,
            Arc::new(VoiceMarkerStub),
            SessionStore::new(Duration::from_secs(60)),
            ArtifactStore::new(dir),
        )
    }

    fn params() -> GenerateParams {
        GenerateParams {
            source_text: "A paper about mitochondria.".to_string(),
            instructions: templates::get("podcast").unwrap().clone(),
            options: ModelOptions::default(),
            voices: VoiceConfig::default(),
            edited_transcript: None,
            user_feedback: None,
        }
    }

    #[tokio::test]
    async fn generate_renders_and_caches_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model.clone(), dir.path());

        let outcome = service.generate(None, params()).await.unwrap();

        assert_eq!(
            outcome.transcript,
            "speaker-1: Hello\n\nspeaker-2: Hi there\n\n"
        );
        assert_eq!(outcome.character_count, 13);
        assert!(outcome.audio_path.exists());

        // Default voices: alloy for speaker-1, echo for speaker-2.
        let audio = service.audio(outcome.session_id).await.unwrap();
        assert_eq!(audio.bytes, b"ae".to_vec());
        assert_eq!(audio.character_count, 13);
    }

    #[tokio::test]
    async fn empty_source_text_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model.clone(), dir.path());

        let mut p = params();
        p.source_text = "   \n".to_string();
        let err = service.generate(None, p).await.unwrap_err();

        assert!(matches!(err, PodcastServiceError::Invalid(_)));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rerender_skips_the_text_model() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model.clone(), dir.path());

        let outcome = service.generate(None, params()).await.unwrap();
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);

        let mut voices = VoiceConfig::default();
        voices.speaker_1_voice = "nova".to_string();
        voices.speaker_2_voice = "onyx".to_string();
        let rerendered = service.rerender(outcome.session_id, voices).await.unwrap();

        assert_eq!(model.calls.load(Ordering::SeqCst), 1, "no extra model call");
        let audio = service.audio(outcome.session_id).await.unwrap();
        assert_eq!(audio.bytes, b"no".to_vec());
        assert_eq!(rerendered.transcript, outcome.transcript);
    }

    #[tokio::test]
    async fn regenerate_feeds_prior_transcript_back() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model.clone(), dir.path());

        let outcome = service.generate(None, params()).await.unwrap();
        let regenerated = service
            .regenerate(
                outcome.session_id,
                templates::get("podcast").unwrap().clone(),
                ModelOptions::default(),
                VoiceConfig::default(),
                Some("Make it funnier.".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(regenerated.session_id, outcome.session_id);
        assert_eq!(model.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn edit_before_generate_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model, dir.path());

        let rows = vec![DialogueRow {
            speaker: "speaker-1".to_string(),
            line: "Hello".to_string(),
        }];
        let err = service.save_lines(Uuid::new_v4(), &rows).await.unwrap_err();
        assert!(matches!(err, PodcastServiceError::NoDialogue));

        let err = service
            .rerender(Uuid::new_v4(), VoiceConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PodcastServiceError::NoDialogue));
    }

    #[tokio::test]
    async fn saved_edits_survive_the_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model, dir.path());

        let outcome = service.generate(None, params()).await.unwrap();

        let mut rows = service.export_rows(outcome.session_id).await.unwrap();
        rows[0].line = "Hello, and welcome back".to_string();
        let transcript = service
            .save_lines(outcome.session_id, &rows)
            .await
            .unwrap();

        assert!(transcript.starts_with("speaker-1: Hello, and welcome back\n\n"));
        let exported = service.export_rows(outcome.session_id).await.unwrap();
        assert_eq!(exported, rows);
    }

    #[tokio::test]
    async fn markdown_export_reflects_current_lines() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(FixedModel {
            calls: AtomicU32::new(0),
        });
        let service = service(model, dir.path());

        let outcome = service.generate(None, params()).await.unwrap();
        let md = service.export_markdown(outcome.session_id).await.unwrap();

        assert!(md.starts_with("# Papercast Transcript"));
        assert!(md.contains("**speaker-2:** Hi there"));
    }
}
