//! Update-check API endpoint.
//!
//! Returns the current modification times of the watched files as a JSON
//! object. The snapshot is recomputed from the file system on every
//! request; there is no server-side state between polls.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::state::AppState;
use crate::tracker::{self, Snapshot};

/// Handle GET /api/check-updates.
///
/// Watched files that don't currently exist are simply absent from the
/// response; an all-missing watch list yields `{}` with status 200.
pub(crate) async fn check_updates(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(tracker::snapshot(&state.root_dir, &state.watch_files))
}
