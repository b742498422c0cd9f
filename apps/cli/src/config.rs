//! Persisted front-end configuration and application constants.

use std::path::PathBuf;

use model3batch_generator::BatchConfig;
use serde::{Deserialize, Serialize};

/// Application name used in bug reports and the config path.
pub const APPLICATION_NAME: &str = "model3batch";

/// Bug report API endpoint.
pub const BUG_REPORT_API_URL: &str =
    "https://www.purelogiccode.com/bugreport/api/send-bug-report";

/// Bug report API key. Shared across the desktop tools; not a secret.
pub const BUG_REPORT_API_KEY: &str =
    "c41b7a95d2e86f30a9c7d514b2e6f8a07d3c9b16e4a28f50c7d1b3e9a6f42d08";

/// Last-used paths, reloaded on the next start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub last_run: BatchConfig,
}

impl AppConfig {
    /// Loads the saved configuration, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Saves the configuration, creating the directory when needed.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, json)
    }
}

fn config_path() -> Option<PathBuf> {
    Some(config_base_dir()?.join(APPLICATION_NAME).join("config.json"))
}

fn config_base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"))
    }
}
