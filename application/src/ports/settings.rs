//! Settings port
//!
//! Credential and model-preference resolution. The store is consulted
//! fresh on every operation; implementations must not cache snapshots
//! across calls.

use eduquiz_domain::Model;

/// A point-in-time view of the persisted settings
#[derive(Debug, Clone, Default)]
pub struct SettingsSnapshot {
    /// API key; absence is a precondition failure for quiz generation
    pub api_key: Option<String>,
    /// Preferred model; falls back to [`Model::default`] when unset
    pub preferred_model: Option<Model>,
}

impl SettingsSnapshot {
    /// True when a usable (non-blank) API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// The preferred model, or the fixed default
    pub fn preferred_or_default(&self) -> Model {
        self.preferred_model.clone().unwrap_or_default()
    }
}

/// Store resolving credentials and preferences
pub trait SettingsStore: Send + Sync {
    /// Take a fresh snapshot of the persisted settings
    fn resolve(&self) -> SettingsSnapshot;
}

/// Fixed-snapshot store for tests and embedding hosts that manage
/// settings themselves
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    snapshot: SettingsSnapshot,
}

impl StaticSettings {
    pub fn new(snapshot: SettingsSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            snapshot: SettingsSnapshot {
                api_key: Some(key.into()),
                preferred_model: None,
            },
        }
    }
}

impl SettingsStore for StaticSettings {
    fn resolve(&self) -> SettingsSnapshot {
        self.snapshot.clone()
    }
}
