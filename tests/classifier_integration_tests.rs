//! Integration Tests for the HTTP classifier and the caching service
//!
//! Runs a mock classification backend on a local port and drives it through
//! the public client API.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use classifier_cache::models::ClassificationStatus;
use classifier_cache::{ClassificationService, Classifier, ClassifyError, HttpClassifier};
use serde_json::json;
use tempfile::NamedTempFile;

// == Mock Backend ==

#[derive(Clone, Default)]
struct Backend {
    calls: Arc<AtomicUsize>,
    status: Option<StatusCode>,
    model_unloaded: bool,
}

impl Backend {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn classify_handler(
    State(backend): State<Backend>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);

    if let Some(status) = backend.status {
        return (status, "model failure").into_response();
    }
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some("application/octet-stream") {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }
    if body.as_ref() == b"garbage" {
        return (StatusCode::OK, "this is not json").into_response();
    }

    let label = String::from_utf8_lossy(&body).into_owned();
    Json(json!({
        "predictions": [
            {"className": label, "confidence": 0.8, "classId": 1},
            {"className": "other", "confidence": 0.2, "classId": 2}
        ]
    }))
    .into_response()
}

async fn health_handler(State(backend): State<Backend>) -> Response {
    if let Some(status) = backend.status {
        return status.into_response();
    }
    Json(json!({"status": "healthy", "modelLoaded": !backend.model_unloaded})).into_response()
}

// == Helper Functions ==

async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/classify", post(classify_handler))
        .route("/health", get(health_handler))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client(url: &str) -> HttpClassifier {
    HttpClassifier::new(url, Duration::from_secs(5)).unwrap()
}

fn image_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

// == HTTP Classifier Tests ==

#[tokio::test]
async fn test_health_check_success() {
    let url = spawn_backend(Backend::default()).await;
    assert!(client(&url).check_health().await);
}

#[tokio::test]
async fn test_health_check_without_model_is_not_ready() {
    let backend = Backend {
        model_unloaded: true,
        ..Backend::default()
    };
    let url = spawn_backend(backend).await;
    assert!(!client(&url).check_health().await);
}

#[tokio::test]
async fn test_health_check_rejects_error_status() {
    let backend = Backend {
        status: Some(StatusCode::SERVICE_UNAVAILABLE),
        ..Backend::default()
    };
    let url = spawn_backend(backend).await;
    assert!(!client(&url).check_health().await);
}

#[tokio::test]
async fn test_classify_parses_predictions() {
    let backend = Backend::default();
    let url = spawn_backend(backend.clone()).await;

    let result = client(&url).classify(b"cat".to_vec()).await.unwrap();

    assert_eq!(result.status, ClassificationStatus::Success);
    assert_eq!(result.predictions.len(), 2);
    assert_eq!(result.predictions[0].class_name, "cat");
    assert_eq!(result.predictions[0].class_id, 1);
    assert_eq!(result.top_prediction().unwrap().class_name, "cat");
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_classify_server_error_status() {
    let backend = Backend {
        status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Backend::default()
    };
    let url = spawn_backend(backend).await;

    let result = client(&url).classify(b"cat".to_vec()).await;
    assert!(matches!(result, Err(ClassifyError::Status(500))));
}

#[tokio::test]
async fn test_classify_invalid_body_is_parse_error() {
    let url = spawn_backend(Backend::default()).await;

    let result = client(&url).classify(b"garbage".to_vec()).await;
    assert!(matches!(result, Err(ClassifyError::Parse(_))));
}

// == Service Tests ==

#[tokio::test]
async fn test_repeated_file_served_from_cache() {
    let backend = Backend::default();
    let url = spawn_backend(backend.clone()).await;
    let service = ClassificationService::new(client(&url), 50, 4).unwrap();
    let file = image_file(b"dog");

    let first = service.classify_file(file.path()).await.unwrap();
    let second = service.classify_file(file.path()).await.unwrap();

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(second.result.predictions[0].class_name, "dog");
    assert_eq!(backend.calls(), 1);

    let stats = service.cache().stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total_entries, 1);
}

#[tokio::test]
async fn test_backend_failure_is_not_cached() {
    let backend = Backend {
        status: Some(StatusCode::SERVICE_UNAVAILABLE),
        ..Backend::default()
    };
    let url = spawn_backend(backend.clone()).await;
    let service = ClassificationService::new(client(&url), 50, 4).unwrap();

    for _ in 0..2 {
        let result = service.classify_bytes("img", b"cat".to_vec()).await;
        assert!(matches!(result, Err(ClassifyError::Status(503))));
    }

    assert!(service.cache().is_empty());
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_batch_through_small_cache() {
    let backend = Backend::default();
    let url = spawn_backend(backend.clone()).await;
    let service = ClassificationService::new(client(&url), 2, 3).unwrap();
    let files: Vec<NamedTempFile> = (0..5)
        .map(|i| image_file(format!("image{}", i).as_bytes()))
        .collect();

    let results = service
        .classify_all(files.iter().map(|f| f.path().to_path_buf()))
        .await;

    for (i, (_, outcome)) in results.iter().enumerate() {
        let classification = outcome.as_ref().unwrap();
        assert_eq!(
            classification.result.predictions[0].class_name,
            format!("image{}", i)
        );
    }
    assert_eq!(backend.calls(), 5);
    assert_eq!(service.cache().len(), 2);
    assert_eq!(service.cache().stats().evictions, 3);

    // Cached values are whole results
    for value in service.cache().values() {
        assert_eq!(value.predictions.len(), 2);
    }
}
