use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::locale::Language;

/// Cookie holding persisted preferences.
pub const PREFERENCES_COOKIE: &str = "abnaouna_prefs";

/// The subset of shell state that may outlive a page load.
///
/// Only written when `persist_preferences` is enabled. Section and sidebar
/// state are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub is_dark: bool,
}

impl Preferences {
    /// Encode as `<lang>.<theme>`, e.g. `ar.light`.
    pub fn to_cookie_value(&self) -> String {
        let theme = if self.is_dark { "dark" } else { "light" };
        format!("{}.{}", self.language.as_str(), theme)
    }

    pub fn parse_cookie_value(value: &str) -> Result<Self, AppError> {
        let (lang, theme) = value
            .trim()
            .split_once('.')
            .ok_or_else(|| AppError::invalid_config(format!("malformed preferences '{value}'")))?;
        let is_dark = match theme {
            "dark" => true,
            "light" => false,
            other => {
                return Err(AppError::invalid_config(format!("unknown theme '{other}'")));
            }
        };
        Ok(Self {
            language: Language::parse(lang)?,
            is_dark,
        })
    }
}
