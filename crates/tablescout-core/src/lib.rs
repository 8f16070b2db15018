//! Shared domain types and configuration for tablescout.
//!
//! Defines the `Query` → `NormalizedQuery` boundary (all defaulting happens
//! here, once, so downstream pipeline stages operate on fully specified
//! values), the `Venue` output shape, and env-based application config.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{Budget, Location, NormalizedQuery, Query, Venue};

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
