use kindstore_model::{EntityKind, EntitySchema, Patch, Record};
use kindstore_types::EntityId;
use serde_json::Value;
use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::table::{ErasedTable, Table};
use crate::{StoreConfig, StoreError, StoreResult};

/// One registered kind: the same table seen typed and type-erased.
struct Slot {
    type_name: &'static str,
    table: Arc<dyn Any + Send + Sync>,
    erased: Arc<dyn ErasedTable>,
}

/// An in-memory entity store keyed by entity kind.
///
/// Every typed operation takes a kind marker as its first argument. The
/// marker fixes, at compile time, which entity and patch types the call
/// accepts and returns:
///
/// ```
/// use kindstore_store::{Store, entity, entity_kinds};
///
/// entity! {
///     pub struct Book / BookPatch {
///         pub author: String,
///         pub title: String,
///     }
/// }
///
/// entity_kinds! {
///     pub Books: "book" => Book;
/// }
///
/// let store = Store::new();
/// store.insert(Books, "123", Book { author: "A. Author".into(), title: "Draft".into() })?;
/// store.update(Books, "123", BookPatch { title: Some("Foo Bar".into()), ..Default::default() })?;
/// assert_eq!(store.get(Books, "123")?.title, "Foo Bar");
/// # Ok::<(), kindstore_store::StoreError>(())
/// ```
///
/// Handing a kind the wrong entity type does not compile:
///
/// ```compile_fail
/// use kindstore_store::{Store, entity, entity_kinds};
///
/// entity! { pub struct Book / BookPatch { pub title: String } }
/// entity! { pub struct Song / SongPatch { pub year: u16 } }
/// entity_kinds! { pub Books: "book" => Book; }
///
/// let store = Store::new();
/// store.create(Books, Song { year: 2022 }).unwrap();
/// ```
///
/// Neither does a patch that belongs to another kind:
///
/// ```compile_fail
/// use kindstore_store::{Store, entity, entity_kinds};
///
/// entity! { pub struct Book / BookPatch { pub title: String } }
/// entity! { pub struct Movie / MoviePatch { pub director: String } }
/// entity_kinds! { pub Books: "book" => Book; }
///
/// let store = Store::new();
/// store.update(Books, "123", MoviePatch::default()).unwrap();
/// ```
pub struct Store {
    config: StoreConfig,
    slots: RwLock<HashMap<&'static str, Slot>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: impl AsRef<str>) -> StoreResult<EntityId> {
    Ok(EntityId::parse(id.as_ref())?)
}

fn downcast<K: EntityKind>(slot: &Slot) -> StoreResult<Arc<Table<K>>> {
    Arc::clone(&slot.table)
        .downcast::<Table<K>>()
        .map_err(|_| StoreError::KindConflict {
            kind: K::NAME.to_string(),
            existing: slot.type_name.to_string(),
            requested: type_name::<K>().to_string(),
        })
}

impl Store {
    /// Creates an empty store with the default config.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ── Registry ────────────────────────────────────────────────

    /// Registers kind `K` under its name.
    ///
    /// Registering the same marker again is a no-op. Fails with
    /// [`StoreError::KindConflict`] when a different marker type already
    /// holds the name.
    pub fn register<K: EntityKind>(&self) -> StoreResult<()> {
        self.register_table::<K>().map(|_| ())
    }

    fn register_table<K: EntityKind>(&self) -> StoreResult<Arc<Table<K>>> {
        let mut slots = self.slots.write().map_err(StoreError::poisoned)?;
        if let Some(slot) = slots.get(K::NAME) {
            return downcast::<K>(slot).inspect_err(|_| {
                warn!(
                    kind = K::NAME,
                    existing = slot.type_name,
                    requested = type_name::<K>(),
                    "Entity kind name already taken"
                );
            });
        }

        let table = Arc::new(Table::<K>::new());
        slots.insert(
            K::NAME,
            Slot {
                type_name: type_name::<K>(),
                table: Arc::clone(&table) as Arc<dyn Any + Send + Sync>,
                erased: Arc::clone(&table) as Arc<dyn ErasedTable>,
            },
        );
        info!(
            kind = K::NAME,
            entity = type_name::<K::Entity>(),
            "Registered entity kind"
        );
        Ok(table)
    }

    /// Table for a read. `None` means the kind has never been written.
    fn existing<K: EntityKind>(&self) -> StoreResult<Option<Arc<Table<K>>>> {
        let slots = self.slots.read().map_err(StoreError::poisoned)?;
        match slots.get(K::NAME) {
            Some(slot) => downcast::<K>(slot).map(Some),
            None if self.config.strict_kinds => {
                warn!(kind = K::NAME, "Rejected operation on unregistered kind");
                Err(StoreError::UnknownKind(K::NAME.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Table for a write, registering the kind on first use unless strict.
    fn writable<K: EntityKind>(&self) -> StoreResult<Arc<Table<K>>> {
        match self.existing::<K>()? {
            Some(table) => Ok(table),
            None => self.register_table::<K>(),
        }
    }

    /// Names of all registered kinds, sorted.
    pub fn kinds(&self) -> StoreResult<Vec<&'static str>> {
        let slots = self.slots.read().map_err(StoreError::poisoned)?;
        let mut names: Vec<&'static str> = slots.keys().copied().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Schema of a registered kind.
    pub fn schema(&self, kind: &str) -> StoreResult<EntitySchema> {
        Ok(self.erased(kind)?.schema())
    }

    // ── Typed operations ────────────────────────────────────────

    /// Fetches a single entity.
    pub fn get<K: EntityKind>(&self, kind: K, id: impl AsRef<str>) -> StoreResult<K::Entity> {
        self.get_record(kind, id).map(Record::into_value)
    }

    /// Fetches a single entity together with its metadata.
    pub fn get_record<K: EntityKind>(
        &self,
        _kind: K,
        id: impl AsRef<str>,
    ) -> StoreResult<Record<K::Entity>> {
        let id = parse_id(id)?;
        debug!(kind = K::NAME, id = %id, "get");
        match self.existing::<K>()? {
            Some(table) => table.get(&id),
            None => Err(StoreError::not_found(K::NAME, id.as_str())),
        }
    }

    /// Fetches every entity of the kind, ordered by id.
    pub fn get_all<K: EntityKind>(&self, _kind: K) -> StoreResult<Vec<K::Entity>> {
        let records = match self.existing::<K>()? {
            Some(table) => table.list()?,
            None => Vec::new(),
        };
        debug!(kind = K::NAME, count = records.len(), "get_all");
        Ok(records.into_iter().map(Record::into_value).collect())
    }

    /// Stores a new entity under a generated id and returns the id.
    pub fn create<K: EntityKind>(&self, kind: K, value: K::Entity) -> StoreResult<EntityId> {
        let id = self.config.id_strategy.generate();
        self.insert(kind, &id, value)?;
        Ok(id)
    }

    /// Stores a new entity under a caller-chosen id.
    pub fn insert<K: EntityKind>(
        &self,
        _kind: K,
        id: impl AsRef<str>,
        value: K::Entity,
    ) -> StoreResult<()> {
        let id = parse_id(id)?;
        self.writable::<K>()?
            .insert(Record::new(K::NAME, id.clone(), value))?;
        debug!(kind = K::NAME, id = %id, "created");
        Ok(())
    }

    /// Applies a partial update and returns the updated entity.
    ///
    /// An empty patch changes nothing, not even the record's revision.
    pub fn update<K: EntityKind>(
        &self,
        _kind: K,
        id: impl AsRef<str>,
        patch: Patch<K>,
    ) -> StoreResult<K::Entity> {
        let id = parse_id(id)?;
        let table = self
            .existing::<K>()?
            .ok_or_else(|| StoreError::not_found(K::NAME, id.as_str()))?;
        let record = table.update(&id, patch)?;
        debug!(kind = K::NAME, id = %id, revision = record.revision, "updated");
        Ok(record.value)
    }

    /// Deletes an entity and returns it.
    pub fn remove<K: EntityKind>(&self, _kind: K, id: impl AsRef<str>) -> StoreResult<K::Entity> {
        let id = parse_id(id)?;
        let table = self
            .existing::<K>()?
            .ok_or_else(|| StoreError::not_found(K::NAME, id.as_str()))?;
        let record = table.remove(&id)?;
        debug!(kind = K::NAME, id = %id, "removed");
        Ok(record.value)
    }

    pub fn contains<K: EntityKind>(&self, _kind: K, id: impl AsRef<str>) -> StoreResult<bool> {
        let id = parse_id(id)?;
        match self.existing::<K>()? {
            Some(table) => table.contains(&id),
            None => Ok(false),
        }
    }

    /// Number of entities stored under the kind.
    pub fn len<K: EntityKind>(&self, _kind: K) -> StoreResult<usize> {
        match self.existing::<K>()? {
            Some(table) => table.len(),
            None => Ok(0),
        }
    }

    // ── String-keyed operations ─────────────────────────────────
    //
    // Only registered kinds are reachable here. Values are checked against
    // the kind's entity type at runtime.

    fn erased(&self, kind: &str) -> StoreResult<Arc<dyn ErasedTable>> {
        let slots = self.slots.read().map_err(StoreError::poisoned)?;
        slots
            .get(kind)
            .map(|slot| Arc::clone(&slot.erased))
            .ok_or_else(|| StoreError::UnknownKind(kind.to_string()))
    }

    /// [`Store::get`] by kind name, returning the entity as JSON.
    pub fn get_dyn(&self, kind: &str, id: impl AsRef<str>) -> StoreResult<Value> {
        let id = parse_id(id)?;
        debug!(kind, id = %id, "get_dyn");
        self.erased(kind)?.get_json(&id)
    }

    /// [`Store::get_all`] by kind name.
    pub fn get_all_dyn(&self, kind: &str) -> StoreResult<Vec<Value>> {
        let values = self.erased(kind)?.list_json()?;
        debug!(kind, count = values.len(), "get_all_dyn");
        Ok(values)
    }

    /// [`Store::create`] by kind name. `value` must match the kind's entity shape exactly.
    pub fn create_dyn(&self, kind: &str, value: Value) -> StoreResult<EntityId> {
        let table = self.erased(kind)?;
        let id = self.config.id_strategy.generate();
        table.insert_json(id.clone(), value)?;
        debug!(kind, id = %id, "created_dyn");
        Ok(id)
    }

    /// [`Store::update`] by kind name. `patch` may carry any subset of the kind's fields.
    pub fn update_dyn(&self, kind: &str, id: impl AsRef<str>, patch: Value) -> StoreResult<Value> {
        let id = parse_id(id)?;
        let updated = self.erased(kind)?.update_json(&id, patch)?;
        debug!(kind, id = %id, "updated_dyn");
        Ok(updated)
    }

    /// Number of entities stored under a kind name.
    pub fn len_dyn(&self, kind: &str) -> StoreResult<usize> {
        self.erased(kind)?.len()
    }
}
