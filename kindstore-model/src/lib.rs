//! Core entity model for kindstore.
//!
//! Defines the open mapping from entity-kind names to entity types:
//! - [`Entity`]: a value type that can be stored, with a generated patch type
//! - [`EntityKind`]: a marker type pairing a kind name with its [`Entity`] type
//! - [`EntitySchema`]: the runtime description of a kind's fields
//! - [`Record`]: a stored entity together with its id and write metadata
//!
//! The mapping is open: any crate can declare new kinds with [`entity!`] and
//! [`entity_kinds!`] without touching this one. The store only ever sees kinds
//! through these traits.
//!
//! ```
//! use kindstore_model::{entity, entity_kinds, Entity, EntityKind};
//!
//! entity! {
//!     pub struct Song / SongPatch {
//!         pub musician: String,
//!         pub year: u16,
//!     }
//! }
//!
//! entity_kinds! {
//!     pub Songs: "song" => Song;
//! }
//!
//! assert_eq!(Songs::NAME, "song");
//! let mut song = Song { musician: "John Doe".into(), year: 2021 };
//! song.apply(SongPatch { year: Some(2022), ..Default::default() });
//! assert_eq!(song.year, 2022);
//! ```

mod entity;
mod kind;
mod record;
mod schema;

pub use entity::{Entity, EntityPatch};
pub use kind::{EntityKind, Patch};
pub use record::Record;
pub use schema::{EntitySchema, FieldSpec, FieldType, SchemaField};
