//! CLI settings with optional TOML file overrides

use likegraph_common::{LikeGraphError, Result};
use likegraph_core::resolve_zone;
use serde::Deserialize;
use std::path::Path;

/// Timezone used when neither a flag nor a settings file supplies one
pub const DEFAULT_TIMEZONE: &str = "US/Pacific";

/// Settings for the LikeGraph CLI
///
/// Precedence is flag over settings file over built-in default; the file
/// only needs the keys it wants to override.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// IANA timezone the output is displayed in
    pub timezone: String,
    /// Print the row-per-post table in text output
    pub show_table: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            show_table: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LikeGraphError::config_with_source(
                format!("failed to read settings file {}", path.display()),
                e,
            )
        })?;
        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LikeGraphError::config_with_source(
                format!("failed to parse settings file {}", path.display()),
                e,
            )
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the configured timezone resolves
    pub fn validate(&self) -> Result<()> {
        resolve_zone(&self.timezone)?;
        Ok(())
    }
}
