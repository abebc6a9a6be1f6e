//! Structured error types for configuration resolution and key access.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Registry errors
    AlreadyExists,

    // Resolution errors
    NoFilesLoaded,
    FileNotFound,
    LoadFailed,
    NotAMapping,

    // Validation errors
    PathKeyNull,
    PathKeyNotObject,

    // Key errors
    UnknownKey,
    InvalidKey,
    InvalidKeyLength,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NoFilesLoaded => "NO_FILES_LOADED",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::LoadFailed => "LOAD_FAILED",
            ErrorCode::NotAMapping => "NOT_A_MAPPING",
            ErrorCode::PathKeyNull => "PATH_KEY_NULL",
            ErrorCode::PathKeyNotObject => "PATH_KEY_NOT_OBJECT",
            ErrorCode::UnknownKey => "UNKNOWN_KEY",
            ErrorCode::InvalidKey => "INVALID_KEY",
            ErrorCode::InvalidKeyLength => "INVALID_KEY_LENGTH",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status reported for every configuration failure.
pub const CONFIG_ERROR_STATUS: u16 = 500;

/// Errors from looking up or naming keys in the configuration tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigKeyError {
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid config key: {0}")]
    InvalidKey(String),

    #[error("Invalid config key length")]
    InvalidKeyLength,
}

impl ConfigKeyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigKeyError::UnknownKey(_) => ErrorCode::UnknownKey,
            ConfigKeyError::InvalidKey(_) => ErrorCode::InvalidKey,
            ConfigKeyError::InvalidKeyLength => ErrorCode::InvalidKeyLength,
        }
    }

    pub fn status(&self) -> u16 {
        CONFIG_ERROR_STATUS
    }
}

/// Errors that can occur while building or registering a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config already exists: {0}")]
    AlreadyExists(String),

    #[error("No files were loaded from {}", config_path.display())]
    NoFilesLoaded { config_path: PathBuf },

    #[error("Config load failed - file doesn't exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Can't load config [{label}] - {}: {reason}", path.display())]
    LoadFailed {
        label: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Config file must contain a mapping at the top level: {}", path.display())]
    NotAMapping { path: PathBuf },

    #[error("Config key `path` must not be null: {}", path.display())]
    PathKeyNull { path: PathBuf },

    #[error("Config key `path` must be a plain object, found {found}: {}", path.display())]
    PathKeyNotObject { path: PathBuf, found: &'static str },

    #[error(transparent)]
    Key(#[from] ConfigKeyError),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            ConfigError::NoFilesLoaded { .. } => ErrorCode::NoFilesLoaded,
            ConfigError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ConfigError::LoadFailed { .. } => ErrorCode::LoadFailed,
            ConfigError::NotAMapping { .. } => ErrorCode::NotAMapping,
            ConfigError::PathKeyNull { .. } => ErrorCode::PathKeyNull,
            ConfigError::PathKeyNotObject { .. } => ErrorCode::PathKeyNotObject,
            ConfigError::Key(err) => err.code(),
        }
    }

    pub fn status(&self) -> u16 {
        CONFIG_ERROR_STATUS
    }

    // Convenience constructors

    pub fn load_failed(
        label: &str,
        path: impl Into<PathBuf>,
        reason: impl std::fmt::Display,
    ) -> Self {
        ConfigError::LoadFailed {
            label: label.to_string(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
