//! Shared application service layer for hvacflow.
//!
//! Front-ends go through this crate for project management, cache-aware
//! dimensioning runs, the report method and result queries.

pub mod catalog_service;
pub mod error;
pub mod project_service;
pub mod query;
pub mod report_service;
pub mod run_service;

pub use catalog_service::load_catalog;
pub use error::{AppError, AppResult};
pub use project_service::{
    OutlineRow, ProjectSummary, load_project, project_warnings, save_project, segment_outline,
    summarize, validate_project,
};
pub use query::{RecordSummary, failed_records, find_record, summarize_records};
pub use report_service::{report_options, run_report};
pub use run_service::{
    ENGINE_VERSION, RunOptions, RunRequest, RunResponse, RunTimingSummary, dimension_project,
    ensure_run, list_runs, load_run,
};
