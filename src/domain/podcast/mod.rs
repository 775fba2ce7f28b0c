pub mod assembler;
pub mod error;
pub mod service;

pub use assembler::{RenderError, RenderResult};
pub use error::PodcastServiceError;
pub use service::{AudioArtifact, GenerateParams, PodcastService, RenderOutcome};
