use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Corrupt journal {path}: {source}")]
    StartupLoad {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to persist journal {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown {field} value '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GardenError>;
