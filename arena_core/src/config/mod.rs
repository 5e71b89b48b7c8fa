//! Configuration loading from TOML files

mod content;

pub use content::{default_content, load_content, parse_content, ContentConfig, EncounterConfig};

use crate::error::ValidationError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Invalid item '{id}': {source}")]
    InvalidItem {
        id: String,
        #[source]
        source: ValidationError,
    },
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Unknown {kind} id: {id}")]
    UnknownId { kind: &'static str, id: String },
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
