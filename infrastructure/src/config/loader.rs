//! Settings loader with multi-source merging

use super::file_settings::FileSettings;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Settings loader that handles file discovery and merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `EDUQUIZ_API_KEY`, `EDUQUIZ_MODEL`
    /// 2. Explicit settings path (if provided)
    /// 3. Project root: `./eduquiz.toml` or `./.eduquiz.toml`
    /// 4. XDG config: `~/.config/eduquiz/settings.toml`
    /// 5. Default values
    pub fn load(settings_path: Option<&PathBuf>) -> Result<FileSettings, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileSettings::default()));

        if let Some(global_path) = Self::global_settings_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["eduquiz.toml", ".eduquiz.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = settings_path {
            figment = figment.merge(Toml::file(path));
        }

        // Process-level fallback wins over files so a deployment can pin
        // the key without touching user settings.
        figment = figment.merge(Env::prefixed("EDUQUIZ_"));

        figment.extract().map_err(Box::new)
    }

    /// Get the global settings file path
    pub fn global_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("eduquiz").join("settings.toml"))
    }
}
