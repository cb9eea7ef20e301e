//! Agent-search configuration: key sanitizing, the persisted record, and the store.

mod mask;
mod model;
mod sanitize;
mod store;

#[cfg(feature = "file-storage")]
mod settings;

pub use mask::mask_api_key;
pub use model::{AgentConfig, ConfigPatch, DEFAULT_MODEL};
pub use sanitize::{is_canonical_api_key, sanitize_api_key, API_KEY_PREFIX};
pub use store::{ConfigStore, StoreError, STORAGE_KEY};

#[cfg(feature = "file-storage")]
pub use settings::StoreSettings;
