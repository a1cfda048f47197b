//! Configuration module

pub mod settings;

pub use settings::{BackendConfig, LoggingConfig, ServerConfig, Settings};
