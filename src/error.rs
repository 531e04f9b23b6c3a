//! Error types for chronoscope.
//!
//! The query engine itself is infallible. Errors only come from parsing
//! labels, loading configuration, and validating externally supplied catalogs.

use crate::types::Character;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChronoscopeError>;

#[derive(Debug, Error)]
pub enum ChronoscopeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown arc: '{0}'")]
    UnknownArc(String),

    #[error("Unknown character: '{0}'")]
    UnknownCharacter(String),

    #[error("Duplicate scene id '{id}' in the {character} catalog")]
    DuplicateSceneId { character: Character, id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for ChronoscopeError {
    fn from(err: toml::de::Error) -> Self {
        ChronoscopeError::Toml(err.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for ChronoscopeError {
    fn from(err: toml::ser::Error) -> Self {
        ChronoscopeError::Toml(err.to_string())
    }
}
