//! Integration tests for the scan service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration, Utc};
use scan_service::{create_router, AppState, Config};
use std::path::PathBuf;
use tower::ServiceExt; // for `oneshot`

const BOUNDARY: &str = "ScanServiceTestBoundary";

/// Helper to create a test app with a temporary upload directory
fn create_test_app() -> (axum::Router, tempfile::TempDir) {
    let upload_dir = tempfile::tempdir().unwrap();

    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        upload_dir: upload_dir.path().to_path_buf(),
        ping_message: "ping".to_string(),
    };

    let app = create_router(AppState::new(config));

    (app, upload_dir)
}

fn file_part(filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "--{}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
        BOUNDARY, filename, content_type
    )
    .into_bytes();
    part.extend_from_slice(bytes);
    part.extend_from_slice(b"\r\n");
    part
}

fn text_part(name: &str, value: &str) -> Vec<u8> {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        BOUNDARY, name, value
    )
    .into_bytes()
}

fn multipart_body(parts: Vec<Vec<u8>>) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(&part);
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .uri("/api/scan/upload")
        .method("POST")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _upload_dir) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "scan-service");
}

#[tokio::test]
async fn test_ping_returns_configured_message() {
    let (app, _upload_dir) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["message"], "ping");
}

#[tokio::test]
async fn test_upload_without_images_is_rejected() {
    let (app, _upload_dir) = create_test_app();

    let body = multipart_body(vec![text_part("language", "en-IN")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("No images"));
}

#[tokio::test]
async fn test_upload_single_jpeg_returns_analysis() {
    let (app, upload_dir) = create_test_app();

    let body = multipart_body(vec![
        file_part("mouth.jpg", "image/jpeg", b"fake jpeg bytes"),
        text_part("language", "hi-IN"),
    ]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["language"], "hi-IN");
    assert_eq!(data["labels"].as_array().unwrap().len(), 2);
    assert_eq!(data["labels"][0]["class"], "cavity");
    assert_eq!(data["labels"][0]["confidence"], 0.85);
    assert_eq!(data["labels"][0]["toothRegion"], "Molar-L2");
    // 0.85 > 0.8 threshold
    assert_eq!(data["severity"], "moderate");
    assert_eq!(data["summary"], "Likely cavity and plaque detected.");
    assert_eq!(data["recommendations"].as_array().unwrap().len(), 5);

    // The stored file exists and the URL points into /uploads
    let image_url = data["imageUrl"].as_str().unwrap();
    let filename = image_url.strip_prefix("/uploads/").unwrap();
    let stored: PathBuf = upload_dir.path().join(filename);
    assert_eq!(std::fs::read(stored).unwrap(), b"fake jpeg bytes");
}

#[tokio::test]
async fn test_upload_defaults_language() {
    let (app, _upload_dir) = create_test_app();

    let body = multipart_body(vec![file_part("mouth.png", "image/png", b"png")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["language"], "en-IN");
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let (app, upload_dir) = create_test_app();

    // Declared MIME type is an image but the extension is not
    let body = multipart_body(vec![file_part("x.txt", "image/jpeg", b"bytes")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Only image files are allowed"));

    // Nothing was written
    assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_mime_type() {
    let (app, _upload_dir) = create_test_app();

    // Extension passes but the declared MIME type does not
    let body = multipart_body(vec![file_part("x.jpg", "text/plain", b"bytes")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_more_than_five_images() {
    let (app, upload_dir) = create_test_app();

    let parts: Vec<Vec<u8>> = (0..6)
        .map(|i| file_part(&format!("m{}.jpg", i), "image/jpeg", b"bytes"))
        .collect();
    let response = app
        .oneshot(upload_request(multipart_body(parts)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Too many images"));

    // Hard reject: none of the six parts was stored
    assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_accepts_exactly_five_images() {
    let (app, upload_dir) = create_test_app();

    let parts: Vec<Vec<u8>> = (0..5)
        .map(|i| file_part(&format!("m{}.jpg", i), "image/jpeg", b"bytes"))
        .collect();
    let response = app
        .oneshot(upload_request(multipart_body(parts)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // All accepted images are stored, though only the first is analyzed
    assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 5);
}

#[tokio::test]
async fn test_upload_rejects_oversize_image() {
    let (app, upload_dir) = create_test_app();

    let oversize = vec![0u8; 10 * 1024 * 1024 + 1];
    let body = multipart_body(vec![file_part("big.jpg", "image/jpeg", &oversize)]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Image too large"));
    assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_uploaded_file_is_served_back() {
    let (app, _upload_dir) = create_test_app();

    let body = multipart_body(vec![file_part("mouth.gif", "image/gif", b"gif bytes")]);
    let response = app
        .clone()
        .oneshot(upload_request(body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let image_url = json["data"]["imageUrl"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(&image_url)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"gif bytes");
}

#[tokio::test]
async fn test_history_contract() {
    let (app, _upload_dir) = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/scan/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["scanId"], "scan_1");
    assert_eq!(data[0]["severity"], "mild");
    assert_eq!(data[0]["summary"], "Plaque detected");
    assert_eq!(data[1]["scanId"], "scan_2");
    assert_eq!(data[1]["severity"], "normal");
    assert_eq!(data[1]["summary"], "No issues detected");

    // Timestamps are 7 and 14 days before call time, within drift tolerance
    let now = Utc::now();
    for (entry, days) in data.iter().zip([7i64, 14]) {
        let timestamp: DateTime<Utc> = entry["timestamp"]
            .as_str()
            .unwrap()
            .parse()
            .expect("history timestamp must be ISO-8601");
        let offset = now - timestamp;
        assert!((offset - Duration::days(days)).num_seconds().abs() < 60);
    }

    // A second call returns the same payload apart from timestamp drift
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scan/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second = response_json(response).await;
    assert_eq!(second["data"][0]["scanId"], json["data"][0]["scanId"]);
    assert_eq!(second["data"][1]["summary"], json["data"][1]["summary"]);
}
