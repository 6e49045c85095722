use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::locale::Language;
use crate::sidebar::DEFAULT_BREAKPOINT_PX;

fn default_breakpoint() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

/// Defaults applied when a dashboard shell mounts.
///
/// Every field is optional in `config.toml`; a missing file or section
/// yields Arabic, light theme, the `lg` breakpoint and no persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub default_dark: bool,
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: u32,
    /// Remember language and theme across reloads in a cookie.
    #[serde(default)]
    pub persist_preferences: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            default_dark: false,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            persist_preferences: false,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| AppError::invalid_config(e.to_string()))?;
        if config.shell.breakpoint_px == 0 {
            return Err(AppError::invalid_config("breakpoint_px must be greater than zero"));
        }
        Ok(config)
    }
}
