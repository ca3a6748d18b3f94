use crate::{PacerError, PacerResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEBUG_LOG_ENV: &str = "PACER_DEBUG_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacerConfig {
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub debug_log: Option<PathBuf>,
}

impl PacerConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/pacer/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("pacer/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("pacer\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable. `PACER_DEBUG_LOG` overrides `debug_log`.
    pub fn load() -> Self {
        Self::load_or_default(Self::config_path(), std::env::var_os(DEBUG_LOG_ENV))
    }

    /// Lenient load from an explicit location, then apply a debug log
    /// override (the value of `PACER_DEBUG_LOG` in [`PacerConfig::load`]).
    pub fn load_or_default(path: Option<PathBuf>, debug_log_override: Option<OsString>) -> Self {
        let mut config = path
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();
        config.apply_debug_log_override(debug_log_override);
        config
    }

    pub fn load_from(path: &Path) -> PacerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PacerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn apply_debug_log_override(&mut self, value: Option<OsString>) {
        if let Some(path) = value.filter(|v| !v.is_empty()) {
            self.debug_log = Some(PathBuf::from(path));
        }
    }

    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
