// Integration tests for the Papercast HTTP API.
//
// The router is driven directly with `tower::ServiceExt::oneshot`, with the
// OpenAI-backed repositories replaced by in-memory stubs. Audio bytes are
// faked per voice so assertions can see which voice rendered which line.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use papercast_backend::controllers::podcast::PodcastController;
use papercast_backend::domain::dialogue::{Dialogue, DialogueLine, ModelOptions, Speaker};
use papercast_backend::domain::podcast::PodcastService;
use papercast_backend::infrastructure::artifacts::ArtifactStore;
use papercast_backend::infrastructure::config::{Config, Environment, LogFormat};
use papercast_backend::infrastructure::http::build_router;
use papercast_backend::infrastructure::repositories::{
    DialogueModelError, DialogueModelRepository, SpeechError, SpeechRepository, SpeechRequest,
};
use papercast_backend::infrastructure::session::SessionStore;

struct FixedModel;

#[async_trait]
impl DialogueModelRepository for FixedModel {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &ModelOptions,
    ) -> Result<Dialogue, DialogueModelError> {
        Ok(Dialogue {
            scratchpad: "outline".to_string(),
            lines: vec![
                DialogueLine {
                    speaker: Speaker::Speaker1,
                    text: "Welcome to the show".to_string(),
                },
                DialogueLine {
                    speaker: Speaker::Speaker2,
                    text: "Glad to be here".to_string(),
                },
            ],
        })
    }
}

/// Emits the first byte of the voice name as the "audio" for each line.
struct VoiceMarkerSpeech;

#[async_trait]
impl SpeechRepository for VoiceMarkerSpeech {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        Ok(vec![request.voice.as_bytes()[0]])
    }
}

struct TestApp {
    router: Router,
    // Keeps the artifact directory alive for the test's lifetime.
    _artifact_dir: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let artifact_dir = tempfile::tempdir().unwrap();

    let config = Arc::new(Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        openai_api_key: Some("test-key".to_string()),
        openai_api_base: None,
        artifact_dir: artifact_dir.path().display().to_string(),
        session_ttl_minutes: 5,
    });

    let service = Arc::new(PodcastService::new(
        Arc::new(FixedModel),
        Arc::new(VoiceMarkerSpeech),
        SessionStore::new(Duration::from_secs(300)),
        ArtifactStore::new(artifact_dir.path()),
    ));

    let controller = Arc::new(PodcastController::new(service, config));

    TestApp {
        router: build_router(controller),
        _artifact_dir: artifact_dir,
    }
}

async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec(), headers)
}

async fn generate_session(router: &Router) -> Value {
    let (status, body) = send_json(
        router,
        "POST",
        "/api/podcast/generate",
        json!({ "source_text": "A short paper about tardigrades." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn it_should_report_healthy() {
    let app = test_app();
    let (status, body, _) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn it_should_generate_a_podcast_and_serve_the_audio() {
    let app = test_app();
    let body = generate_session(&app.router).await;

    let session_id = body["session_id"].as_str().expect("Missing session_id");
    assert_eq!(
        body["transcript"],
        "speaker-1: Welcome to the show\n\nspeaker-2: Glad to be here\n\n"
    );
    assert_eq!(body["character_count"], 34);

    let (status, audio, headers) =
        get(&app.router, &format!("/api/podcast/{session_id}/audio")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "audio/mpeg");
    assert_eq!(headers["x-character-count"], "34");
    assert!(headers.contains_key("x-request-id"));
    // Default voices: alloy then echo.
    assert_eq!(audio, b"ae");
}

#[tokio::test]
async fn it_should_reject_empty_source_text() {
    let app = test_app();
    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/podcast/generate",
        json!({ "source_text": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("source text"));
}

#[tokio::test]
async fn it_should_reject_an_unknown_template() {
    let app = test_app();
    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/podcast/generate",
        json!({ "source_text": "Some text.", "template": "opera" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("opera"));
}

#[tokio::test]
async fn it_should_round_trip_line_edits() {
    let app = test_app();
    let body = generate_session(&app.router).await;
    let session_id = body["session_id"].as_str().unwrap();

    let uri = format!("/api/podcast/{session_id}/lines");
    let (status, lines, _) = get(&app.router, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let mut rows: Value = serde_json::from_slice(&lines).unwrap();
    assert_eq!(rows[0]["Speaker"], "speaker-1");
    assert_eq!(rows[1]["Line"], "Glad to be here");

    rows[0]["Line"] = json!("Welcome back, everyone");
    let (status, saved) = send_json(&app.router, "PUT", &uri, rows.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(saved["transcript"]
        .as_str()
        .unwrap()
        .starts_with("speaker-1: Welcome back, everyone\n\n"));

    let (_, exported, _) = get(&app.router, &uri).await;
    let exported: Value = serde_json::from_slice(&exported).unwrap();
    assert_eq!(exported, rows);
}

#[tokio::test]
async fn it_should_reject_edits_with_an_unknown_speaker() {
    let app = test_app();
    let body = generate_session(&app.router).await;
    let session_id = body["session_id"].as_str().unwrap();

    let (status, body) = send_json(
        &app.router,
        "PUT",
        &format!("/api/podcast/{session_id}/lines"),
        json!([{ "Speaker": "narrator", "Line": "Hello" }]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("narrator"));
}

#[tokio::test]
async fn it_should_rerender_with_new_voices() {
    let app = test_app();
    let body = generate_session(&app.router).await;
    let session_id = body["session_id"].as_str().unwrap();

    let (status, rerendered) = send_json(
        &app.router,
        "POST",
        &format!("/api/podcast/{session_id}/rerender"),
        json!({ "voices": { "speaker_1_voice": "nova", "speaker_2_voice": "onyx" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rerendered["transcript"], body["transcript"]);

    let (_, audio, _) = get(&app.router, &format!("/api/podcast/{session_id}/audio")).await;
    assert_eq!(audio, b"no");
}

#[tokio::test]
async fn it_should_regenerate_in_the_same_session() {
    let app = test_app();
    let body = generate_session(&app.router).await;
    let session_id = body["session_id"].as_str().unwrap();

    let (status, regenerated) = send_json(
        &app.router,
        "POST",
        &format!("/api/podcast/{session_id}/regenerate"),
        json!({ "user_feedback": "Make it shorter." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(regenerated["session_id"].as_str().unwrap(), session_id);
}

#[tokio::test]
async fn it_should_conflict_when_no_dialogue_exists_yet() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send_json(
        &app.router,
        "POST",
        &format!("/api/podcast/{missing}/rerender"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _, _) = get(&app.router, &format!("/api/podcast/{missing}/audio")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn it_should_export_markdown() {
    let app = test_app();
    let body = generate_session(&app.router).await;
    let session_id = body["session_id"].as_str().unwrap();

    let (status, md, headers) =
        get(&app.router, &format!("/api/podcast/{session_id}/markdown")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/markdown; charset=utf-8");
    let md = String::from_utf8(md).unwrap();
    assert!(md.starts_with("# Papercast Transcript"));
    assert!(md.contains("**speaker-2:** Glad to be here"));
}

#[tokio::test]
async fn it_should_list_and_fetch_templates() {
    let app = test_app();

    let (status, body, _) = get(&app.router, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert!(names.contains(&"podcast".to_string()));
    assert!(names.contains(&"lecture".to_string()));

    let (status, body, _) = get(&app.router, "/api/templates/lecture").await;
    assert_eq!(status, StatusCode::OK);
    let preset: Value = serde_json::from_slice(&body).unwrap();
    assert!(preset["intro"].as_str().unwrap().contains("lecture"));

    let (status, _, _) = get(&app.router, "/api/templates/opera").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
