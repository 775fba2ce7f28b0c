use std::sync::Arc;
use std::time::Duration;

use async_openai::config::OpenAIConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use papercast_backend::controllers::podcast::PodcastController;
use papercast_backend::domain::podcast::PodcastService;
use papercast_backend::infrastructure::artifacts::ArtifactStore;
use papercast_backend::infrastructure::config::{Config, LogFormat};
use papercast_backend::infrastructure::http::start_http_server;
use papercast_backend::infrastructure::repositories::{
    OpenAiDialogueRepository, OpenAiSpeechRepository,
};
use papercast_backend::infrastructure::session::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Papercast Backend on {}:{}",
        config.host,
        config.port
    );

    if config.openai_api_key.is_none() && config.openai_api_base.is_none() {
        tracing::warn!(
            "No OPENAI_API_KEY or OPENAI_API_BASE configured. Requests must supply credentials."
        );
    }

    // Base OpenAI client configuration; requests may override key and base
    // per call.
    let mut openai_config = OpenAIConfig::new();
    if let Some(key) = &config.openai_api_key {
        openai_config = openai_config.with_api_key(key.clone());
    }
    if let Some(base) = &config.openai_api_base {
        openai_config = openai_config.with_api_base(base.clone());
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject OpenAI configuration)
    tracing::info!("Instantiating repositories...");
    let dialogue_repo = Arc::new(OpenAiDialogueRepository::new(openai_config.clone()));
    let speech_repo = Arc::new(OpenAiSpeechRepository::new(openai_config));

    // 2. Instantiate stores
    let sessions = SessionStore::new(Duration::from_secs(config.session_ttl_minutes * 60));
    let artifacts = ArtifactStore::new(&config.artifact_dir);

    // 3. Instantiate services (inject repositories and stores)
    tracing::info!("Instantiating services...");
    let podcast_service = Arc::new(PodcastService::new(
        dialogue_repo,
        speech_repo,
        sessions,
        artifacts,
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let podcast_controller = Arc::new(PodcastController::new(podcast_service, config.clone()));

    // Start HTTP server with all routes
    start_http_server(config, podcast_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    // Pretty output is for local development; production logs JSON even
    // when LOG_FORMAT is left at its default.
    if config.log_format == LogFormat::Json || !config.is_development() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "papercast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "papercast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
