//! Core type definitions for kindstore.
//!
//! This crate defines the kind-agnostic types shared by the model and the
//! store:
//! - [`EntityId`], the opaque string key of a stored entity
//! - [`HybridTimestamp`], used for record creation/modification metadata
//!
//! Entity shapes themselves belong to whoever declares the kinds, not here.

mod ids;
mod timestamp;

pub use ids::EntityId;
pub use timestamp::HybridTimestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid entity id: {0:?}")]
    InvalidId(String),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
