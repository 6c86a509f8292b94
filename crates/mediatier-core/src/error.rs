//! Errors from loading records and settings.
//!
//! Classification itself is total and never fails; only the input side
//! (files, JSON, configuration) produces these.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("unknown media tier: {0}")]
    UnknownTier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
