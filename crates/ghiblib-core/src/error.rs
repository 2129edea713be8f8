use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: no film titled {title:?}")]
    NotFound { title: String },

    #[error("invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("unknown field {0:?} (expected one of: title, director, release_year, genre, plot_summary, rating)")]
    UnknownField(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed document {}: {source}", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` when the error means a lookup by title missed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
