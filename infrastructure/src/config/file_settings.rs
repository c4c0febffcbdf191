//! Raw TOML settings data types
//!
//! This struct represents the exact structure of the settings file. Blank
//! values are treated as absent so a half-filled file behaves like an
//! empty one.

use eduquiz_application::SettingsSnapshot;
use serde::{Deserialize, Serialize};

/// Persisted settings (raw TOML structure)
///
/// ```toml
/// api_key = "AIza..."
/// model = "gemini-3-pro-preview"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// API key for the generative-language backend
    pub api_key: Option<String>,
    /// Preferred model heading the fallback chain
    pub model: Option<String>,
}

impl FileSettings {
    /// Convert into an application-layer snapshot, dropping blank values.
    pub fn into_snapshot(self) -> SettingsSnapshot {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty());
        let preferred_model = self
            .model
            .filter(|model| !model.trim().is_empty())
            // Model parsing is infallible; unknown names become Custom
            .map(|model| model.parse().unwrap());

        SettingsSnapshot {
            api_key,
            preferred_model,
        }
    }
}
