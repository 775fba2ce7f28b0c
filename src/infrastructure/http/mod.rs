pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, podcast::PodcastController, templates};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router. Split from server startup so integration
/// tests can drive the routes directly.
pub fn build_router(podcast_controller: Arc<PodcastController>) -> Router {
    let podcast_routes = Router::new()
        .route("/api/podcast/generate", post(PodcastController::generate))
        .route(
            "/api/podcast/:session_id/regenerate",
            post(PodcastController::regenerate),
        )
        .route(
            "/api/podcast/:session_id/rerender",
            post(PodcastController::rerender),
        )
        .route(
            "/api/podcast/:session_id/lines",
            get(PodcastController::get_lines).put(PodcastController::put_lines),
        )
        .route(
            "/api/podcast/:session_id/markdown",
            get(PodcastController::get_markdown),
        )
        .route(
            "/api/podcast/:session_id/audio",
            get(PodcastController::get_audio),
        )
        .with_state(podcast_controller);

    let template_routes = Router::new()
        .route("/api/templates", get(templates::list_templates))
        .route("/api/templates/:name", get(templates::get_template));

    Router::new()
        .route("/health", get(health::health))
        .merge(podcast_routes)
        .merge(template_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    podcast_controller: Arc<PodcastController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(podcast_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
