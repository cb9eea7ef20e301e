//! Configuration store: in-memory state persisted through a [`KeyValueStorage`].

use super::mask::mask_api_key;
use super::model::{AgentConfig, ConfigPatch};
use super::sanitize::sanitize_api_key;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key the configuration lives under unless overridden.
pub const STORAGE_KEY: &str = "agentSearchConfig";

/// Error returned when the store cannot persist its state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Agent-search configuration bound to a storage medium.
///
/// Construction never touches storage; call [`load`](Self::load) or use
/// [`open`](Self::open) to pick up a persisted record. Every
/// [`update`](Self::update) rewrites the full record.
///
/// # Example
///
/// ```rust
/// use agent_config::{ConfigPatch, ConfigStore, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// let mut store = ConfigStore::open(storage.clone());
/// store.update(ConfigPatch::api_key("  sk-test1  ")).unwrap();
///
/// let reopened = ConfigStore::open(storage);
/// assert_eq!(reopened.current().api_key, "sk-test1");
/// assert_eq!(reopened.current().model, "gpt-4o");
/// ```
#[derive(Debug)]
pub struct ConfigStore<S> {
    storage: S,
    key: String,
    config: AgentConfig,
}

impl<S: KeyValueStorage> ConfigStore<S> {
    /// Create a store on `storage` under [`STORAGE_KEY`], holding defaults.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Create a store on `storage` under a custom key, holding defaults.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            config: AgentConfig::default(),
        }
    }

    /// Create a store and load any persisted record.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Create a store under a custom key and load any persisted record.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::with_key(storage, key);
        store.load();
        store
    }

    /// Read the persisted record and replace the current state with it.
    ///
    /// Fields missing from the record take their defaults. Absent,
    /// unreadable, or malformed data leaves the current state untouched, so
    /// a store that was already updated keeps its values rather than
    /// reverting to defaults. Problems are logged and never returned.
    pub fn load(&mut self) -> &AgentConfig {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored configuration, using defaults");
                return &self.config;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read stored configuration");
                return &self.config;
            }
        };

        match serde_json::from_str::<AgentConfig>(&raw) {
            Ok(mut stored) => {
                if !stored.api_key.is_empty() {
                    stored.api_key = sanitize_api_key(&stored.api_key);
                }
                tracing::debug!(
                    key = %self.key,
                    api_key = %mask_api_key(&stored.api_key),
                    model = %stored.model,
                    "loaded configuration"
                );
                self.config = stored;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored configuration is malformed, keeping current configuration");
            }
        }
        &self.config
    }

    /// Merge `patch` into the current state and persist the full record.
    ///
    /// The in-memory state is updated even when the write fails.
    pub fn update(&mut self, patch: ConfigPatch) -> Result<&AgentConfig, StoreError> {
        self.config.merge(patch);
        self.persist()?;
        Ok(&self.config)
    }

    /// Apply a caller-driven change. Same as [`update`](Self::update).
    pub fn apply(&mut self, patch: ConfigPatch) -> Result<&AgentConfig, StoreError> {
        self.update(patch)
    }

    /// Remove the persisted record and return to defaults.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.config = AgentConfig::default();
        self.storage.remove(&self.key)?;
        tracing::info!(key = %self.key, "configuration reset");
        Ok(())
    }

    pub fn current(&self) -> &AgentConfig {
        &self.config
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.config)?;
        self.storage.set(&self.key, &serialized)?;
        tracing::debug!(
            key = %self.key,
            api_key = %mask_api_key(&self.config.api_key),
            model = %self.config.model,
            "saved configuration"
        );
        Ok(())
    }
}
