use std::io;

use thiserror::Error;

/// Application-wide error type for the cnfmt CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid size '{0}'")]
    InvalidSize(String),

    #[error("Invalid class value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}

/// Failures reported by the strict byte formatter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("{bytes} bytes exceeds the largest unit (YB)")]
    OutOfRange { bytes: f64 },

    #[error("byte count must be finite, got {0}")]
    NonFinite(f64),
}
