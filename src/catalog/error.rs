use std::path::PathBuf;

use thiserror::Error;

/// Problems with the catalog file. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog contains no tracks")]
    Empty,

    #[error("track #{index} has an empty reference")]
    MissingReference { index: usize },

    #[error("track #{index} has an empty answer")]
    MissingAnswer { index: usize },

    #[error("track #{index} has invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { index: usize, value: String },
}
