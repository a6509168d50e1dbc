//! Store configuration, optionally loaded from a TOML file.

use kindstore_types::EntityId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::{StoreError, StoreResult};

/// How [`Store::create`](crate::Store::create) generates ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Time-ordered UUID v7; `get_all` then returns creation order.
    #[default]
    UuidV7,
    /// Random UUID v4.
    UuidV4,
}

impl IdStrategy {
    pub fn generate(self) -> EntityId {
        match self {
            IdStrategy::UuidV7 => EntityId::new(),
            IdStrategy::UuidV4 => EntityId::random(),
        }
    }
}

/// Store configuration.
///
/// ```toml
/// strict_kinds = true
/// id_strategy = "uuid_v4"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Reject typed operations on kinds that were not registered up front,
    /// instead of registering them on first write.
    pub strict_kinds: bool,
    pub id_strategy: IdStrategy,
}

impl StoreConfig {
    /// Parses a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> StoreResult<Self> {
        toml::from_str(contents).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Loads a config file, falling back to defaults when it is missing or broken.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No store config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded store config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse store config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read store config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
