//! hotserve CLI - development server with poll-based live reload.
//!
//! Serves a static site from a root directory, injecting a polling
//! client into HTML documents so the browser reloads automatically when
//! any watched file's modification time changes.

mod error;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotserve_config::{CliSettings, Config};
use hotserve_server::{run_server, server_config_from_config};

use error::CliError;
use output::Output;

/// hotserve - development server with live reload.
#[derive(Parser)]
#[command(name = "hotserve", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover hotserve.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to serve static files from (overrides config).
    #[arg(short, long)]
    root_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// File to watch for changes, relative to the root directory
    /// (repeatable; overrides the config watch list).
    #[arg(short, long = "watch", value_name = "FILE")]
    watch_files: Vec<String>,

    /// Entry document served for the root path (overrides config).
    #[arg(long)]
    index: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(err) = rt.block_on(run(cli, &output)) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Load configuration and run the server until interrupted.
async fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let cli_settings = CliSettings {
        host: cli.host,
        port: cli.port,
        root_dir: cli.root_dir,
        watch_files: (!cli.watch_files.is_empty()).then_some(cli.watch_files),
        index_file: cli.index,
    };

    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    if let Some(path) = &config.config_path {
        tracing::info!(config = %path.display(), "Loaded configuration");
    }

    output.highlight(&format!(
        "Development server running at http://{}:{}",
        config.server.host, config.server.port
    ));
    output.info(&format!(
        "Serving directory: {}",
        config.site_resolved.root_dir.display()
    ));
    output.info(&format!("Watching: {}", config.watch.files.join(", ")));
    output.info("Press Ctrl+C to stop the server");

    let server_config = server_config_from_config(&config);
    run_server(server_config)
        .await
        .map_err(|e| CliError::Server(e.to_string()))?;

    output.info("Server stopped");
    Ok(())
}
