//! Application state.
//!
//! Shared state for all request handlers. Everything here is immutable
//! for the lifetime of the process; handlers re-read the file system on
//! every request instead of sharing derived state.

use std::path::PathBuf;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Directory static files are served from.
    pub(crate) root_dir: PathBuf,
    /// Files polled for modification-time changes, relative to `root_dir`.
    pub(crate) watch_files: Vec<String>,
    /// Entry document served for the root path.
    pub(crate) index_file: String,
}
