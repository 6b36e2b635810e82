//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use hf_catalog::Catalog;
use hf_project::Project;
use hf_results::{
    RunManifest, RunStore, SegmentRecord, UnknownFixtureRecord, compute_run_id,
};
use hf_sizing::{SizingContext, dimension_all};

use crate::catalog_service;
use crate::error::AppResult;
use crate::project_service;

/// Version stamped into run ids; a new engine invalidates cached runs.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Request to dimension a project file.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    /// `None` selects the built-in catalog.
    pub catalog_path: Option<&'a Path>,
    pub options: RunOptions,
}

/// Wall-clock split of one request, in seconds.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub dimension_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub records: Vec<SegmentRecord>,
    pub unknown_fixtures: Vec<UnknownFixtureRecord>,
    pub loaded_from_cache: bool,
    pub timing: RunTimingSummary,
}

/// Load the project and catalog, then dimension or fetch the cached run.
///
/// A cyclic segment graph is not an error: the run is stored with
/// `has_cycle` set and no segment records.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();
    let project = project_service::load_project(request.project_path)?;
    let catalog = catalog_service::load_catalog(request.catalog_path)?;
    let load_time_s = started.elapsed().as_secs_f64();

    let mut response =
        dimension_project(request.project_path, &project, &catalog, &request.options)?;
    response.timing.load_time_s = load_time_s;
    response.timing.total_time_s = started.elapsed().as_secs_f64();
    Ok(response)
}

/// Dimension an in-memory project, caching next to `project_path`.
pub fn dimension_project(
    project_path: &Path,
    project: &Project,
    catalog: &Catalog,
    options: &RunOptions,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    let run_id = compute_run_id(project, catalog, &options.engine_version);
    let store = RunStore::for_project(project_path)?;

    if options.use_cache && store.has_run(&run_id) {
        let cache_started = Instant::now();
        match load_cached(&store, &run_id) {
            Ok((manifest, records)) => {
                timing.load_cache_time_s = cache_started.elapsed().as_secs_f64();
                timing.total_time_s = started.elapsed().as_secs_f64();
                tracing::debug!(%run_id, "loaded run from cache");
                return Ok(RunResponse {
                    run_id,
                    unknown_fixtures: manifest.unknown_fixtures.clone(),
                    manifest,
                    records,
                    loaded_from_cache: true,
                    timing,
                });
            }
            Err(err) => {
                tracing::warn!(%run_id, error = %err, "cached run unreadable, recomputing");
            }
        }
    }

    let dimension_started = Instant::now();
    let ctx = SizingContext::new(
        &project.fixtures,
        &catalog.norms,
        &catalog.pipes,
        project.simultaneity_factor,
    );
    let outcome = dimension_all(&project.segments, &ctx);
    timing.dimension_time_s = dimension_started.elapsed().as_secs_f64();

    let records: Vec<SegmentRecord> = outcome.results.iter().map(SegmentRecord::from).collect();
    let unknown_fixtures: Vec<UnknownFixtureRecord> = outcome
        .unknown_fixtures
        .iter()
        .map(UnknownFixtureRecord::from)
        .collect();

    let manifest = RunManifest {
        run_id: run_id.clone(),
        project_name: project.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        engine_version: options.engine_version.clone(),
        has_cycle: outcome.has_cycle,
        segment_count: project.segments.len(),
        failed_count: outcome.failed_count(),
        unknown_fixtures: unknown_fixtures.clone(),
    };

    let save_started = Instant::now();
    store.save_run(&manifest, &records)?;
    timing.save_time_s = save_started.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    tracing::debug!(
        %run_id,
        segments = records.len(),
        failed = manifest.failed_count,
        has_cycle = manifest.has_cycle,
        "dimensioning run complete"
    );

    Ok(RunResponse {
        run_id,
        manifest,
        records,
        unknown_fixtures,
        loaded_from_cache: false,
        timing,
    })
}

fn load_cached(
    store: &RunStore,
    run_id: &str,
) -> hf_results::ResultsResult<(RunManifest, Vec<SegmentRecord>)> {
    Ok((store.load_manifest(run_id)?, store.load_segments(run_id)?))
}

/// Runs stored for the project at `project_path`, most recent first.
pub fn list_runs(project_path: &Path, project_name: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(project_name)?)
}

pub fn load_run(
    project_path: &Path,
    run_id: &str,
) -> AppResult<(RunManifest, Vec<SegmentRecord>)> {
    let store = RunStore::for_project(project_path)?;
    let manifest = store.load_manifest(run_id)?;
    let records = store.load_segments(run_id)?;
    Ok((manifest, records))
}
