use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

async fn health() -> &'static str {
    "OK"
}

async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Health check under `/api`, everything else served from the static dir.
/// Paths that are not files get `index.html` so client-side routes load the app.
pub fn app(config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .fallback(api_not_found);

    let static_files =
        ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;
    use uuid::Uuid;

    const INDEX: &str = "<!DOCTYPE html><html><body>fynally</body></html>";
    const STYLES: &str = "body { margin: 0; }";

    struct Site {
        dir: PathBuf,
    }

    impl Site {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("fynally-site-{}", Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), INDEX).unwrap();
            std::fs::write(dir.join("styles.css"), STYLES).unwrap();
            Self { dir }
        }

        fn config(&self) -> ServerConfig {
            let dir = self.dir.to_string_lossy().to_string();
            ServerConfig::from_lookup(move |key| (key == "STATIC_DIR").then(|| dir.clone())).unwrap()
        }
    }

    impl Drop for Site {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, Option<HeaderValue>, String) {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let nosniff = response.headers().get(header::X_CONTENT_TYPE_OPTIONS).cloned();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, nosniff, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check_says_ok() {
        let site = Site::new();
        let (status, _, body) = get_path(app(&site.config()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn serves_existing_files() {
        let site = Site::new();
        let (status, nosniff, body) = get_path(app(&site.config()), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, STYLES);
        assert_eq!(nosniff, Some(HeaderValue::from_static("nosniff")));
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let site = Site::new();
        for path in ["/", "/internships", "/employment", "/no-such-page"] {
            let (status, _, body) = get_path(app(&site.config()), path).await;
            assert_eq!(status, StatusCode::OK, "status for {path}");
            assert_eq!(body, INDEX, "body for {path}");
        }
    }

    #[tokio::test]
    async fn unknown_api_paths_are_not_found() {
        let site = Site::new();
        let (status, nosniff, _) = get_path(app(&site.config()), "/api/listings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(nosniff, Some(HeaderValue::from_static("nosniff")));
    }
}
