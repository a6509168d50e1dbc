//! Kind-keyed entity store for kindstore.
//!
//! [`Store`] keeps one table per entity kind. The typed API takes a kind
//! marker (see [`entity_kinds!`]) as its first argument, so the compiler
//! checks that every value, patch and result matches the kind. The
//! string-keyed `*_dyn` API reaches the same tables by kind name and checks
//! JSON payloads against the registered entity type at runtime.
//!
//! # Architecture
//!
//! - Each kind maps to a `Table`: an ordered map from id to [`Record`] behind an `RwLock`
//! - Tables are registered by kind name, explicitly or on first write
//! - Nothing is persisted; a store lives as long as its owner keeps it

mod config;
mod error;
mod store;
mod table;

pub use config::{IdStrategy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use store::Store;

pub use kindstore_model::{
    Entity, EntityKind, EntityPatch, EntitySchema, FieldSpec, FieldType, Patch, Record,
    SchemaField, entity, entity_kinds,
};
pub use kindstore_types::{EntityId, HybridTimestamp};
