use crate::domain::dialogue::GenerationError;
use crate::domain::podcast::assembler::RenderError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    #[error("nothing to edit or re-render yet, run generate first")]
    NoDialogue,
    #[error("no audio has been rendered for this session yet")]
    NoAudio,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<PodcastServiceError> for AppError {
    fn from(err: PodcastServiceError) -> Self {
        match err {
            PodcastServiceError::NoDialogue | PodcastServiceError::NoAudio => {
                AppError::Conflict(err.to_string())
            }
            PodcastServiceError::Invalid(msg) => AppError::BadRequest(msg),
            PodcastServiceError::Generation(GenerationError::SchemaInvalid { .. }) => {
                AppError::GenerationFailed(err.to_string())
            }
            PodcastServiceError::Generation(GenerationError::Model(msg)) => {
                AppError::ExternalService(msg)
            }
            PodcastServiceError::Render(RenderError::EmptyDialogue) => {
                AppError::BadRequest(err.to_string())
            }
            PodcastServiceError::Render(e) => AppError::ExternalService(e.to_string()),
            PodcastServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
