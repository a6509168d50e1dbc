use kindstore_types::{EntityId, HybridTimestamp};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityPatch};

/// A stored entity together with its key and write metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<E> {
    pub id: EntityId,
    pub kind: String,
    pub value: E,
    pub created_at: HybridTimestamp,
    pub modified_at: HybridTimestamp,
    /// Starts at 1 and grows by one for every non-empty patch, even one that
    /// rewrites a field with its current value.
    pub revision: u64,
}

impl<E: Entity> Record<E> {
    /// Creates a first-revision record stamped with the current time.
    pub fn new(kind: impl Into<String>, id: EntityId, value: E) -> Self {
        Self::with_timestamp(kind, id, value, HybridTimestamp::now())
    }

    /// Creates a first-revision record with an explicit timestamp (for testing or replay).
    pub fn with_timestamp(
        kind: impl Into<String>,
        id: EntityId,
        value: E,
        timestamp: HybridTimestamp,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            value,
            created_at: timestamp,
            modified_at: timestamp,
            revision: 1,
        }
    }

    /// Applies a partial update.
    ///
    /// Returns false, leaving metadata untouched, when the patch is empty.
    pub fn apply(&mut self, patch: E::Patch) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.value.apply(patch);
        self.modified_at = self.modified_at.tick();
        self.revision += 1;
        true
    }

    pub fn into_value(self) -> E {
        self.value
    }
}
