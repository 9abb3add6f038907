//! Static file serving.
//!
//! Delegates to `tower-http`'s `ServeDir` for everything the HTML and
//! update-check handlers don't claim: MIME inference, range requests,
//! and not-found responses all follow standard static-file semantics.

use std::path::Path;

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

/// Serve a request from the root directory with standard static-file
/// semantics.
pub(crate) async fn serve_static(root_dir: &Path, req: Request) -> Response {
    match ServeDir::new(root_dir).oneshot(req).await {
        Ok(response) => response.map(Body::new),
        Err(infallible) => match infallible {},
    }
}
