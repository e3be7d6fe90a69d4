//! API routes

use axum::{routing::get, Router};

pub mod health;
pub mod version;

/// Build the API router
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/version", get(version::get))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, Bytes};
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Utc};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Bytes) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    async fn get_uri(uri: &str) -> (StatusCode, Bytes) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_get_version_returns_current_release() {
        let (status, body) = get_uri("/version").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["version"], "1.0.24");
        assert_eq!(json["buildNumber"], "25");
        assert_eq!(json["isRequired"], false);
    }

    #[tokio::test]
    async fn test_version_payload_schema() {
        let (status, body) = get_uri("/version").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json["version"].is_string());
        assert!(json["buildNumber"].is_string());
        assert!(json["releaseNotes"].is_string());
        assert!(json["isRequired"].is_boolean());

        // releaseDate must be a valid RFC 3339 timestamp
        json["releaseDate"]
            .as_str()
            .unwrap()
            .parse::<DateTime<Utc>>()
            .unwrap();

        let platforms = json["platforms"].as_object().unwrap();
        assert_eq!(platforms.len(), 2);
        for channel in ["windows", "android"] {
            let artifact = platforms[channel].as_object().unwrap();
            let url = artifact["downloadUrl"].as_str().unwrap();
            assert!(url.starts_with("https://"), "bad url for {}", channel);
            assert!(artifact["isRequired"].is_boolean());
        }
    }

    #[tokio::test]
    async fn test_query_string_and_body_are_ignored() {
        let (_, plain) = get_uri("/version").await;

        let (status, with_query) = get_uri("/version?platform=windows&force=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain, with_query);

        let request = Request::builder()
            .uri("/version")
            .body(Body::from("ignored"))
            .unwrap();
        let (status, with_body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain, with_body);
    }

    #[tokio::test]
    async fn test_version_responses_are_byte_identical() {
        let (_, first) = get_uri("/version").await;
        let (_, second) = get_uri("/version").await;
        let (_, third) = get_uri("/version").await;
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[tokio::test]
    async fn test_post_version_is_method_not_allowed() {
        let request = Request::builder()
            .method("POST")
            .uri("/version")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _) = get_uri("/versions").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_uri("/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
