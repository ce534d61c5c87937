//! Theme configuration file handling
//!
//! ```toml
//! [theme]
//! primary_color = "emerald"
//! border_radius = "lg"
//! density = "compact"
//! shadow_mode = "hard"
//! ```
//!
//! Missing keys take their defaults; unknown values are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::state::ThemeSettings;

/// File name looked up by [`ThemeConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "vigil.toml";

/// Top-level theme configuration (vigil.toml)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl ThemeConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), settings = ?config.theme, "loaded theme config");
        Ok(config)
    }

    /// Load configuration from a directory (looks for vigil.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self, ThemeError> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            return Err(ThemeError::NotFound(path.to_path_buf()));
        }

        Self::load(&config_path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
