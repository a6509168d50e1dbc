//! Per-kind storage.
//!
//! A [`Table`] holds every record of one kind, keyed and ordered by id. The
//! store reaches it either typed (downcast by kind marker) or through the
//! object-safe [`ErasedTable`] when all it has is a kind name.

use kindstore_model::{EntityKind, EntitySchema, Patch, Record};
use kindstore_types::EntityId;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{StoreError, StoreResult};

type Rows<K> = BTreeMap<EntityId, Record<<K as EntityKind>::Entity>>;

pub(crate) struct Table<K: EntityKind> {
    rows: RwLock<Rows<K>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EntityKind> Table<K> {
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            _kind: PhantomData,
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Rows<K>>> {
        self.rows.read().map_err(StoreError::poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Rows<K>>> {
        self.rows.write().map_err(StoreError::poisoned)
    }

    pub(crate) fn get(&self, id: &EntityId) -> StoreResult<Record<K::Entity>> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(K::NAME, id.as_str()))
    }

    pub(crate) fn list(&self) -> StoreResult<Vec<Record<K::Entity>>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub(crate) fn contains(&self, id: &EntityId) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    pub(crate) fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub(crate) fn insert(&self, record: Record<K::Entity>) -> StoreResult<()> {
        let mut rows = self.write()?;
        if rows.contains_key(&record.id) {
            return Err(StoreError::DuplicateId {
                kind: K::NAME.to_string(),
                id: record.id.to_string(),
            });
        }
        rows.insert(record.id.clone(), record);
        Ok(())
    }

    /// Applies `patch` in place and returns the resulting record.
    pub(crate) fn update(&self, id: &EntityId, patch: Patch<K>) -> StoreResult<Record<K::Entity>> {
        let mut rows = self.write()?;
        let record = rows
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(K::NAME, id.as_str()))?;
        record.apply(patch);
        Ok(record.clone())
    }

    pub(crate) fn remove(&self, id: &EntityId) -> StoreResult<Record<K::Entity>> {
        self.write()?
            .remove(id)
            .ok_or_else(|| StoreError::not_found(K::NAME, id.as_str()))
    }
}

/// Kind-agnostic view of a [`Table`], speaking JSON.
pub(crate) trait ErasedTable: Send + Sync {
    fn schema(&self) -> EntitySchema;
    fn len(&self) -> StoreResult<usize>;
    fn get_json(&self, id: &EntityId) -> StoreResult<Value>;
    fn list_json(&self) -> StoreResult<Vec<Value>>;
    fn insert_json(&self, id: EntityId, value: Value) -> StoreResult<()>;
    fn update_json(&self, id: &EntityId, patch: Value) -> StoreResult<Value>;
}

fn invalid_data<K: EntityKind>(err: serde_json::Error) -> StoreError {
    StoreError::InvalidData {
        kind: K::NAME.to_string(),
        reason: err.to_string(),
    }
}

impl<K: EntityKind> ErasedTable for Table<K> {
    fn schema(&self) -> EntitySchema {
        K::schema()
    }

    fn len(&self) -> StoreResult<usize> {
        Table::len(self)
    }

    fn get_json(&self, id: &EntityId) -> StoreResult<Value> {
        Ok(serde_json::to_value(self.get(id)?.value)?)
    }

    fn list_json(&self) -> StoreResult<Vec<Value>> {
        self.read()?
            .values()
            .map(|record| serde_json::to_value(&record.value).map_err(StoreError::from))
            .collect()
    }

    fn insert_json(&self, id: EntityId, value: Value) -> StoreResult<()> {
        let value: K::Entity = serde_json::from_value(value).map_err(invalid_data::<K>)?;
        self.insert(Record::new(K::NAME, id, value))
    }

    fn update_json(&self, id: &EntityId, patch: Value) -> StoreResult<Value> {
        let patch: Patch<K> = serde_json::from_value(patch).map_err(invalid_data::<K>)?;
        Ok(serde_json::to_value(self.update(id, patch)?.value)?)
    }
}
