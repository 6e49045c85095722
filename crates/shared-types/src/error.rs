use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of shell errors.
///
/// None of these reach the user: they surface at parsing boundaries
/// (route query strings, cookies, `config.toml`) and are resolved to
/// defaults by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    UnknownRole,
    UnknownLanguage,
    UnknownSection,
    InvalidConfig,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::UnknownRole => write!(f, "UnknownRole"),
            AppErrorKind::UnknownLanguage => write!(f, "UnknownLanguage"),
            AppErrorKind::UnknownSection => write!(f, "UnknownSection"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error returned by the parsing helpers in this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn unknown_role(value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownRole,
            message: format!("unknown role '{value}'"),
        }
    }

    pub fn unknown_language(value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownLanguage,
            message: format!("unknown language code '{value}'"),
        }
    }

    /// `role` is the lowercase role key the section was looked up under.
    pub fn unknown_section(role: &str, value: &str) -> Self {
        Self {
            kind: AppErrorKind::UnknownSection,
            message: format!("'{value}' is not a section of the {role} dashboard"),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
