//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `MAILVARIANT_WORKER__<SECTION>__<KEY>` pattern

mod generation;
mod server;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generation::GenerationConfig;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Variant generation configuration.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{MAILVARIANT_PROFILE}.toml` (if `MAILVARIANT_PROFILE` is set)
    /// 3. Environment variables with `MAILVARIANT_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration with TOML files taken from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let profile =
            std::env::var("MAILVARIANT_PROFILE").unwrap_or_else(|_| "development".to_string());

        let default_file = dir.join("default");
        let profile_file = dir.join(&profile);

        let config = Config::builder()
            // Load default configuration
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            // Load profile-specific configuration
            .add_source(File::with_name(&profile_file.to_string_lossy()).required(false))
            // MAILVARIANT_WORKER__GENERATION__MAX_RESULTS=200 -> generation.max_results = 200
            .add_source(
                Environment::with_prefix("MAILVARIANT_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.generation.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        if !self.observability.metrics_path.starts_with('/') {
            return Err(ConfigError::Message(
                "observability.metrics_path must start with '/'".to_string(),
            ));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,

    /// Metrics endpoint path.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: true,
            metrics_path: default_metrics_path(),
        }
    }
}
