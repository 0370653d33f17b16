use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Built assets are content-hashed by Trunk.
pub const CACHE_FOREVER: &str = "public, max-age=31536000";

async fn health_check() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], "OK")
}

/// Serves `dist` with client-side routes falling back to `index.html`.
pub fn router(dist: &Path) -> Router {
    let site = ServeDir::new(dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_FOREVER),
        ))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn serve(dist: &Path, addr: SocketAddr) -> anyhow::Result<()> {
    if !dist.join("index.html").is_file() {
        tracing::warn!("{} has no index.html, run `trunk build` in frontend/ first", dist.display());
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Serving {} at http://{}", dist.display(), addr);

    axum::serve(listener, router(dist)).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn dist() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>supplier</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).header(header::ORIGIN, "http://example.uz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok_and_never_cached() {
        let dir = dist();
        let (status, headers, body) = get(router(dir.path()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn assets_are_served_with_long_cache_and_cors() {
        let dir = dist();
        let (status, headers, body) = get(router(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
        assert_eq!(headers[header::CACHE_CONTROL], CACHE_FOREVER);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_app_shell() {
        let dir = dist();
        let (status, _, body) = get(router(dir.path()), "/blog/some-post").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>supplier</html>");

        let (_, _, root) = get(router(dir.path()), "/").await;
        assert_eq!(root, "<html>supplier</html>");
    }
}
