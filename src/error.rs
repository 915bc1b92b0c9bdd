//! Error types for the selection store.
//!
//! The scheduling engine itself never fails; only persistence does.

use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while loading or saving persisted selections.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key cannot be used as a storage name.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    /// Backend I/O failed.
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    /// Stored value could not be parsed.
    #[error("corrupt value for key '{key}': {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    /// Value could not be encoded.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            StoreError::InvalidKey(key) => key,
            StoreError::Io { key, .. }
            | StoreError::Corrupt { key, .. }
            | StoreError::Serialize { key, .. } => key,
        }
    }

    /// Whether the stored data itself is unreadable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
