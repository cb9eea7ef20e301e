//! Environment-driven settings for the file-backed store.

use super::store::{ConfigStore, STORAGE_KEY};
use crate::storage::FileStorage;
use std::path::PathBuf;

/// Settings locating the persisted configuration.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `AGENT_CONFIG_DIR` | `./data` | Directory holding stored records |
/// | `AGENT_CONFIG_KEY` | `agentSearchConfig` | Storage key for the configuration |
///
/// # Example
///
/// ```rust,no_run
/// use agent_config::StoreSettings;
///
/// let settings = StoreSettings::from_env();
/// let store = settings.open_store();
/// println!("model: {}", store.current().model);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSettings {
    /// Directory holding stored records (default: ./data)
    pub data_path: PathBuf,
    /// Storage key (default: agentSearchConfig)
    pub storage_key: String,
}

impl StoreSettings {
    /// Create settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("AGENT_CONFIG_DIR")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            storage_key: std::env::var("AGENT_CONFIG_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| STORAGE_KEY.to_string()),
        }
    }

    /// Build the file storage these settings point at.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_path)
    }

    /// Open a configuration store on the file storage, loading any stored record.
    pub fn open_store(&self) -> ConfigStore<FileStorage> {
        ConfigStore::open_with_key(self.storage(), self.storage_key.clone())
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigPatch;

    #[test]
    fn test_default_values() {
        // Clear env vars to test defaults
        std::env::remove_var("AGENT_CONFIG_DIR");
        std::env::remove_var("AGENT_CONFIG_KEY");

        let settings = StoreSettings::from_env();
        assert_eq!(settings.data_path, PathBuf::from("./data"));
        assert_eq!(settings.storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_open_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StoreSettings {
            data_path: dir.path().join("config"),
            storage_key: "agent".to_string(),
        };

        let mut store = settings.open_store();
        store
            .update(ConfigPatch::api_key("Bearer sk-file1").with_model("gpt-4o-mini"))
            .unwrap();
        assert!(dir.path().join("config/agent.json").is_file());

        let reopened = settings.open_store();
        assert_eq!(reopened.current().api_key, "sk-file1");
        assert_eq!(reopened.current().model, "gpt-4o-mini");
        assert_eq!(reopened.storage_key(), "agent");
    }

    #[test]
    fn test_invalid_key_fails_update_but_not_open() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StoreSettings {
            data_path: dir.path().to_path_buf(),
            storage_key: "../escape".to_string(),
        };

        let mut store = settings.open_store();
        assert_eq!(store.current().model, "gpt-4o");
        assert!(store.update(ConfigPatch::model("o1")).is_err());
    }
}
