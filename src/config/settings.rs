//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// AI gateway backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Chat-completions endpoint of the image generation gateway
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Multimodal model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token for the gateway; generation fails fast when absent
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
    /// Upper bound on concurrent per-style dispatches
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_backend_url() -> String {
    "https://ai.gateway.lovable.dev/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "google/gemini-2.5-flash-image".to_string()
}

fn default_timeout() -> u64 {
    60000
}

fn default_max_concurrent() -> usize {
    4
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("backend.url", default_backend_url())?
            .set_default("backend.model", default_model())?
            .set_default("backend.timeout_ms", default_timeout() as i64)?
            .set_default("backend.max_concurrent", default_max_concurrent() as i64)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            // Load from configuration file
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with OUTFIT_GATEWAY_)
            .add_source(
                Environment::with_prefix("OUTFIT_GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.backend.url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Backend URL cannot be empty".to_string(),
            )));
        }

        if self.backend.max_concurrent == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "backend.max_concurrent must be at least 1".to_string(),
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            backend: BackendConfig {
                url: default_backend_url(),
                model: default_model(),
                api_key: None,
                timeout_ms: default_timeout(),
                max_concurrent: default_max_concurrent(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
