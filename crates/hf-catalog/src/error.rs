//! Error types for catalog loading and validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog entry {entry}: {reason}")]
    InvalidEntry { entry: String, reason: String },

    #[error("Duplicate catalog key: {key} in {context}")]
    DuplicateKey { key: String, context: String },

    #[error("Unsupported catalog format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
