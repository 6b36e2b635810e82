//! Report method over a whole project.

use hf_catalog::Catalog;
use hf_project::{Project, ReportSettings};
use hf_report::{ReportOptions, ReportSummary, ScopeFilter, evaluate_report};

/// Report options from the project's stored settings and a scope.
pub fn report_options(settings: &ReportSettings, scope: ScopeFilter) -> ReportOptions {
    ReportOptions {
        scope,
        kv_pipe_type: settings.kv_pipe_type.clone(),
        vv_pipe_type: settings.vv_pipe_type.clone(),
        kv_velocity_mps: settings.kv_velocity_mps,
        vv_velocity_mps: settings.vv_velocity_mps,
        drainage_slope: settings.drainage_slope.clone(),
        drainage_curve: settings.drainage_curve,
    }
}

pub fn run_report(project: &Project, catalog: &Catalog, scope: ScopeFilter) -> ReportSummary {
    let options = report_options(&project.report, scope);
    evaluate_report(&project.fixtures, catalog, &options)
}
