//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Per-field validation error produced by the identifier normalizer
///
/// These are shown next to the offending input and never block other fields.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum IdentifierError {
    /// Text looks like a link but not to this platform's profile pages
    #[error("Not a valid {platform} URL")]
    NotAPlatformUrl { platform: &'static str },

    /// Text looks like a platform link but the username could not be cut out
    #[error("Invalid URL format")]
    InvalidUrlFormat,

    /// Username contains characters the platform does not allow
    #[error("Invalid username format")]
    InvalidIdentifierFormat,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Persisted history could not be read or parsed
    #[error("Failed to load history: {0}")]
    HistoryLoadFailure(String),

    /// History could not be written back to storage
    #[error("Failed to persist history: {0}")]
    HistoryPersistFailure(String),
}

impl CoreError {
    /// Whether it is expected behavior (first run, user-edited files, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SerializationError(_) | Self::HistoryLoadFailure(_) => true,
            Self::StorageError(_) | Self::HistoryPersistFailure(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
