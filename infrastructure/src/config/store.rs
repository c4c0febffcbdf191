//! Settings store adapter

use super::loader::SettingsLoader;
use eduquiz_application::{SettingsSnapshot, SettingsStore};
use std::path::PathBuf;
use tracing::warn;

/// [`SettingsStore`] backed by the figment merge chain.
///
/// Every `resolve()` re-reads the sources; credentials are never cached
/// across calls, so a key added in settings takes effect on the next
/// request without a restart.
#[derive(Debug, Default)]
pub struct FigmentSettingsStore {
    settings_path: Option<PathBuf>,
}

impl FigmentSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin an explicit settings file (highest-priority file source)
    pub fn with_settings_path(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: Some(path.into()),
        }
    }
}

impl SettingsStore for FigmentSettingsStore {
    fn resolve(&self) -> SettingsSnapshot {
        match SettingsLoader::load(self.settings_path.as_ref()) {
            Ok(settings) => settings.into_snapshot(),
            Err(error) => {
                warn!("Failed to load settings: {}", error);
                SettingsSnapshot::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduquiz_domain::Model;

    #[test]
    fn test_resolve_reads_fresh_every_call() {
        figment::Jail::expect_with(|jail| {
            let store = FigmentSettingsStore::new();
            assert!(store.resolve().api_key.is_none());

            // A settings file appearing between calls is picked up
            // without rebuilding the store.
            jail.create_file("eduquiz.toml", r#"api_key = "AIza-late""#)?;
            assert_eq!(store.resolve().api_key.as_deref(), Some("AIza-late"));
            Ok(())
        });
    }

    #[test]
    fn test_resolve_with_explicit_path() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"model = "gemini-2.5-pro""#)?;
            let store = FigmentSettingsStore::with_settings_path("custom.toml");
            assert_eq!(
                store.resolve().preferred_model,
                Some(Model::Gemini25Pro)
            );
            Ok(())
        });
    }

    #[test]
    fn test_unreadable_settings_degrade_to_empty() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("eduquiz.toml", "api_key = [not, a, string]")?;
            let store = FigmentSettingsStore::new();
            let snapshot = store.resolve();
            assert!(snapshot.api_key.is_none());
            assert!(snapshot.preferred_model.is_none());
            Ok(())
        });
    }
}
