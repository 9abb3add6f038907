//! Configuration management for hotserve.
//!
//! Parses `hotserve.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the directory static files are served from.
    pub root_dir: Option<PathBuf>,
    /// Override the watched file list.
    pub watch_files: Option<Vec<String>>,
    /// Override the default entry document for the root path.
    pub index_file: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hotserve.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    #[serde(default)]
    site: SiteConfigRaw,
    /// Watched file configuration.
    pub watch: WatchConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory static files are served from. Watched paths are
    /// resolved against this directory as well.
    pub root_dir: PathBuf,
}

/// Watched file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Files polled for modification-time changes, relative to the
    /// root directory. Fixed for the lifetime of the process.
    pub files: Vec<String>,
    /// Entry document served for the root path.
    pub index_file: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            files: vec![
                "src/index.html".to_owned(),
                "src/styles/main.css".to_owned(),
                "src/scripts/main.js".to_owned(),
            ],
            index_file: "src/index.html".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hotserve.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(root_dir) = &settings.root_dir {
            self.site_resolved.root_dir.clone_from(root_dir);
        }
        if let Some(watch_files) = &settings.watch_files {
            self.watch.files.clone_from(watch_files);
        }
        if let Some(index_file) = &settings.index_file {
            self.watch.index_file.clone_from(index_file);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            watch: WatchConfig::default(),
            site_resolved: SiteConfig {
                root_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        if self.watch.files.is_empty() {
            return Err(ConfigError::Validation(
                "watch.files must list at least one file".to_owned(),
            ));
        }
        for file in &self.watch.files {
            require_non_empty(file, "watch.files entry")?;
            if Path::new(file).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "watch.files entry must be relative to the root directory: {file}"
                )));
            }
        }

        require_non_empty(&self.watch.index_file, "watch.index_file")?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            root_dir: self
                .site
                .root_dir
                .as_deref()
                .map_or_else(|| config_dir.to_path_buf(), |dir| config_dir.join(dir)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.site_resolved.root_dir, PathBuf::from("/test"));
        assert_eq!(
            config.watch.files,
            vec![
                "src/index.html".to_owned(),
                "src/styles/main.css".to_owned(),
                "src/scripts/main.js".to_owned(),
            ]
        );
        assert_eq!(config.watch.index_file, "src/index.html");
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_watch_config() {
        let toml = r#"
[watch]
files = ["index.html", "app.css"]
index_file = "index.html"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.watch.files,
            vec!["index.html".to_owned(), "app.css".to_owned()]
        );
        assert_eq!(config.watch.index_file, "index.html");
    }

    #[test]
    fn test_validate_rejects_empty_watch_list() {
        let mut config = Config::default();
        config.watch.files.clear();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_absolute_watch_path() {
        let mut config = Config::default();
        config.watch.files = vec!["/etc/passwd".to_owned()];

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/hotserve.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_root_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hotserve.toml");
        std::fs::write(
            &config_path,
            r#"
[site]
root_dir = "public"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        assert_eq!(config.site_resolved.root_dir, dir.path().join("public"));
        assert_eq!(config.config_path, Some(config_path));
    }

    #[test]
    fn test_cli_settings_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hotserve.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
port = 9000
"#,
        )
        .unwrap();

        let settings = CliSettings {
            port: Some(3000),
            watch_files: Some(vec!["main.html".to_owned()]),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&config_path), Some(&settings)).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.watch.files, vec!["main.html".to_owned()]);
    }
}
