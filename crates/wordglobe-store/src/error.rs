use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error at {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("refusing to store feedback with rating {0}; ratings run from 1 to 5")]
    InvalidRating(u8),

    #[error("{0}")]
    Other(String),
}
