//! Error types for the store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with this id exists under the kind.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// An entity with this id already exists under the kind.
    #[error("{kind} already exists: {id}")]
    DuplicateId { kind: String, id: String },

    /// The id is blank or otherwise unusable.
    #[error("invalid entity id: {0:?}")]
    InvalidId(String),

    /// The kind name is not registered.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// A second Rust type tried to claim an already registered kind name.
    #[error("entity kind {kind:?} is registered as {existing}, not {requested}")]
    KindConflict {
        kind: String,
        existing: String,
        requested: String,
    },

    /// JSON given to a string-keyed operation does not match the kind's shape.
    #[error("invalid {kind} data: {reason}")]
    InvalidData { kind: String, reason: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// An internal unspecified error, e.g. a poisoned lock.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<kindstore_types::Error> for StoreError {
    fn from(err: kindstore_types::Error) -> Self {
        match err {
            kindstore_types::Error::InvalidId(id) => StoreError::InvalidId(id),
            // Store paths never interpret ids as UUIDs.
            kindstore_types::Error::InvalidUuid(err) => StoreError::Internal(err.to_string()),
        }
    }
}

impl StoreError {
    pub(crate) fn not_found(kind: &str, id: &str) -> Self {
        StoreError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn poisoned(err: impl std::fmt::Display) -> Self {
        StoreError::Internal(err.to_string())
    }
}
