//! Configuration for librarian
//!
//! Centralized configuration with defaults matching the fixed file names the
//! catalog manager has always used.

use std::path::PathBuf;

/// Default catalog file, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "library.log";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Main configuration for a catalog manager session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the catalog (overwritten wholesale on every save)
    pub catalog_path: PathBuf,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// File receiving a copy of every log line; `None` logs to console only
    pub log_file: Option<PathBuf>,

    /// Filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = path.into();
        self
    }

    /// Set the log file path
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_file = Some(path.into());
        self
    }

    /// Log to the console only
    pub fn no_log_file(mut self) -> Self {
        self.config.log_file = None;
        self
    }

    /// Set the fallback log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
