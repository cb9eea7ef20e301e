//! The persisted configuration record and its partial-update form.

use super::sanitize::sanitize_api_key;
use serde::{Deserialize, Serialize};

/// Model selected when nothing else has been stored.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Agent-search configuration.
///
/// Serialized as `{"apiKey": "...", "model": "..."}`. Missing fields fall back
/// to their defaults, unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    /// Credential token, stored in sanitized form.
    pub api_key: String,
    /// Selected processing model (default: `gpt-4o`).
    pub model: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AgentConfig {
    /// Check if an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Merge `patch` into this record. A patched `api_key` is sanitized first.
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(api_key) = patch.api_key {
            self.api_key = sanitize_api_key(&api_key);
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
    }
}

/// A partial update: any subset of [`AgentConfig`]'s fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ConfigPatch {
    /// Patch that only sets the API key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Patch that only sets the model.
    pub fn model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }

    /// Add a model change to this patch.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.model.is_none()
    }
}
