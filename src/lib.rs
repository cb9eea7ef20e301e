//! Agent Config - persisted configuration for the agent-search client.
//!
//! This crate provides the building blocks behind the agent-search settings:
//!
//! - **config**: API key sanitizing, the configuration record, and the store
//! - **storage**: Key-value storage backends (in-memory and file-backed)
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `file-storage` - Directory-backed storage and env settings (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_config::{init_tracing, ConfigPatch, StoreSettings};
//!
//! fn main() -> Result<(), agent_config::StoreError> {
//!     init_tracing("agent_config=debug");
//!     let mut store = StoreSettings::from_env().open_store();
//!
//!     // User pasted a key from their shell profile
//!     store.apply(ConfigPatch::api_key("export OPENAI_API_KEY=sk-abc123"))?;
//!     assert_eq!(store.current().api_key, "sk-abc123");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod storage;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use config::{
    is_canonical_api_key, mask_api_key, sanitize_api_key, AgentConfig, ConfigPatch, ConfigStore,
    StoreError, DEFAULT_MODEL, STORAGE_KEY,
};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};

#[cfg(feature = "file-storage")]
pub use config::StoreSettings;

#[cfg(feature = "file-storage")]
pub use storage::FileStorage;

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
