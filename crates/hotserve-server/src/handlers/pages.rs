//! HTML page handler.
//!
//! Serves HTML documents with the polling client injected, and delegates
//! everything else (and any HTML file that can't be read) to the static
//! file handler. Every response for a `.html` request path carries
//! cache-disabling headers so the browser always revalidates, whether the
//! document came from the injector or from the fallback.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::Response;

use crate::inject;
use crate::state::AppState;
use crate::static_files;

/// Fallback handler for all non-API routes.
pub(crate) async fn serve_page(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let path = req.uri().path().to_owned();
    let is_html = path == "/" || path.ends_with(".html");

    if let Some(target) = html_target(&path, &state.index_file) {
        let file_path = state.root_dir.join(target);
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => return html_response(inject::inject(&content)),
            Err(err) => {
                tracing::debug!(
                    path = %file_path.display(),
                    error = %err,
                    "HTML read failed, falling back to static handler"
                );
            }
        }
    }

    let mut response = static_files::serve_static(&state.root_dir, req).await;
    if is_html {
        apply_no_cache_headers(response.headers_mut());
    }
    response
}

/// Map a request path to the HTML file it addresses, relative to the root
/// directory.
///
/// The root path maps to the configured entry document; any other path
/// ending in `.html` maps to itself. Paths with parent-directory
/// components are left to the static handler, which rejects them.
fn html_target<'a>(path: &'a str, index_file: &'a str) -> Option<&'a str> {
    if path == "/" {
        return Some(index_file);
    }
    if !path.ends_with(".html") {
        return None;
    }
    let rel = path.trim_start_matches('/');
    if rel.split('/').any(|component| component == "..") {
        return None;
    }
    Some(rel)
}

/// Build a 200 response for an injected HTML document.
fn html_response(html: String) -> Response {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html")
        .body(Body::from(html))
        .unwrap();
    apply_no_cache_headers(response.headers_mut());
    response
}

/// Force cache revalidation on every request.
fn apply_no_cache_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_target_maps_root_to_index() {
        assert_eq!(html_target("/", "src/index.html"), Some("src/index.html"));
    }

    #[test]
    fn test_html_target_strips_leading_slash() {
        assert_eq!(
            html_target("/pages/about.html", "src/index.html"),
            Some("pages/about.html")
        );
    }

    #[test]
    fn test_html_target_ignores_non_html() {
        assert_eq!(html_target("/styles/main.css", "src/index.html"), None);
        assert_eq!(html_target("/api/check-updates", "src/index.html"), None);
    }

    #[test]
    fn test_html_target_rejects_parent_components() {
        assert_eq!(html_target("/../secret.html", "src/index.html"), None);
        assert_eq!(html_target("/a/../../b.html", "src/index.html"), None);
    }

    #[test]
    fn test_html_response_headers() {
        let response = html_response("<html></html>".to_string());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(response.headers()[header::PRAGMA], "no-cache");
        assert_eq!(response.headers()[header::EXPIRES], "0");
    }
}
