//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the served root is an existing directory
//! - Check URLs and paths used by the startup banner are well formed
//!
//! Every failing field is reported, not just the first.

use std::path::PathBuf;

use url::Url;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("root {0:?} does not exist")]
    RootMissing(PathBuf),
    #[error("root {0:?} is not a directory")]
    RootNotDirectory(PathBuf),
    #[error("listener.host must not be empty")]
    EmptyHost,
    #[error("playground.base_url {0:?} is not an absolute http(s) URL")]
    InvalidPlaygroundUrl(String),
    #[error("playground.asset_path {0:?} must start with '/'")]
    RelativeAssetPath(String),
    #[error("playground.query_param must not be empty")]
    EmptyQueryParam,
    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.root.metadata() {
        Ok(meta) if !meta.is_dir() => {
            errors.push(ValidationError::RootNotDirectory(config.root.clone()))
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::RootMissing(config.root.clone())),
    }

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    let playground = &config.playground;
    match Url::parse(&playground.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidPlaygroundUrl(
            playground.base_url.clone(),
        )),
    }
    if !playground.asset_path.starts_with('/') {
        errors.push(ValidationError::RelativeAssetPath(
            playground.asset_path.clone(),
        ));
    }
    if playground.query_param.is_empty() {
        errors.push(ValidationError::EmptyQueryParam);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
