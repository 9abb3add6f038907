//! Router construction.
//!
//! Builds the axum router: the update-check endpoint, with everything
//! else handled by the page/static fallback.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/check-updates", get(handlers::updates::check_updates))
        .fallback(handlers::pages::serve_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
