//! Error types for the hf-app service layer.

/// Unified error for CLI and other front-ends. Backend errors are flattened
/// to their messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<hf_project::ProjectError> for AppError {
    fn from(err: hf_project::ProjectError) -> Self {
        match err {
            hf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<hf_project::ValidationError> for AppError {
    fn from(err: hf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hf_catalog::CatalogError> for AppError {
    fn from(err: hf_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<hf_results::ResultsError> for AppError {
    fn from(err: hf_results::ResultsError) -> Self {
        match err {
            hf_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}
