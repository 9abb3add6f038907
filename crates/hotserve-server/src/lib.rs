//! HTTP server with poll-based live reload for static sites.
//!
//! This crate provides a native Rust development server using axum, serving:
//! - Static files from a configured root directory
//! - HTML documents with an injected polling client for automatic reloads
//! - A JSON endpoint reporting modification times of watched files
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use hotserve_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8000,
//!         root_dir: PathBuf::from("."),
//!         watch_files: vec!["src/index.html".to_string()],
//!         index_file: "src/index.html".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (hotserve-server)
//!                        │
//!                        ├─► GET /api/check-updates ──► mtime snapshot (JSON)
//!                        │
//!                        ├─► GET /, *.html ──► read + inject polling script
//!                        │
//!                        └─► everything else ──► static files (tower-http)
//! ```
//!
//! There is no server-side change detection: the injected script polls the
//! snapshot endpoint and reloads the page when a watched file's timestamp
//! differs from the one it last recorded.

mod app;
mod handlers;
mod inject;
mod state;
mod static_files;
mod tracker;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory static files are served from.
    pub root_dir: PathBuf,
    /// Files polled for modification-time changes, relative to `root_dir`.
    pub watch_files: Vec<String>,
    /// Entry document served for the root path.
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            root_dir: PathBuf::from("."),
            watch_files: Vec::new(),
            index_file: "src/index.html".to_string(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        root_dir: config.root_dir,
        watch_files: config.watch_files,
        index_file: config.index_file,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from hotserve config.
#[must_use]
pub fn server_config_from_config(config: &hotserve_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root_dir: config.site_resolved.root_dir.clone(),
        watch_files: config.watch.files.clone(),
        index_file: config.watch.index_file.clone(),
    }
}
