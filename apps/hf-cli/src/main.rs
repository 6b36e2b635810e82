use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hf_app::{
    AppError, AppResult, RunOptions, RunRequest, RunTimingSummary, catalog_service,
    project_service, query, report_service, run_service,
};
use hf_core::MediaType;
use hf_report::{ReportSummary, ScopeFilter, WaterReport, available_slopes};
use hf_results::SegmentRecord;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HvacFlow CLI - sanitary pipe dimensioning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (.yaml, .yml or .json)
        project_path: PathBuf,
    },
    /// Show the segment tree of a project
    Segments {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Dimension every segment of a project
    Dimension {
        /// Path to the project file
        project_path: PathBuf,
        /// Catalog file to use instead of the built-in data
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Print the run as JSON
        #[arg(long)]
        json: bool,
    },
    /// List cached runs for a project
    Runs {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Whole-building flows and dimensions by the report method
    Report {
        /// Path to the project file
        project_path: PathBuf,
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Only fixtures on this floor. 0 selects the ground floor, not all
        /// floors; omit the flag for the whole building.
        #[arg(long, allow_negative_numbers = true)]
        floor: Option<i32>,
        /// Only fixtures in this zone
        #[arg(long)]
        zone: Option<String>,
    },
    /// Show catalog contents
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Segments { project_path } => cmd_segments(&project_path),
        Commands::Dimension {
            project_path,
            catalog,
            no_cache,
            json,
        } => cmd_dimension(&project_path, catalog.as_deref(), !no_cache, json),
        Commands::Runs { project_path } => cmd_runs(&project_path),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::Report {
            project_path,
            catalog,
            floor,
            zone,
        } => {
            let mut scope = ScopeFilter::all();
            scope.floor = floor;
            scope.zone = zone;
            cmd_report(&project_path, catalog.as_deref(), scope)
        }
        Commands::Catalog { catalog } => cmd_catalog(catalog.as_deref()),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InvalidInput(format!("cannot serialize output: {e}")))?;
    println!("{text}");
    Ok(())
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;

    let summary = project_service::summarize(&project);
    println!("✓ Project is valid");
    for warning in project_service::project_warnings(&project) {
        println!("  ! {warning}");
    }
    println!(
        "  {} fixtures ({} units, {} unconnected), {} segments",
        summary.fixture_count,
        summary.fixture_units,
        summary.unconnected_fixtures,
        summary.segment_count
    );
    for (media, count) in &summary.segments_by_media {
        println!("  {}: {} segments", media.code(), count);
    }
    Ok(())
}

fn cmd_segments(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let rows = project_service::segment_outline(&project);

    if rows.is_empty() {
        println!("No segments in project");
        return Ok(());
    }

    println!("Segments in {}:", project.name);
    for row in rows {
        let marker = if row.detached { "  (detached)" } else { "" };
        println!(
            "  {}{} [{} {}] {:.1} m, {} fixtures{}",
            "  ".repeat(row.depth),
            row.segment_id,
            row.media_type.code(),
            row.pipe_type,
            row.length_m,
            row.fixture_count,
            marker
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct RunOutput<'a> {
    manifest: &'a hf_results::RunManifest,
    summary: query::RecordSummary,
    segments: &'a [SegmentRecord],
}

fn cmd_dimension(
    project_path: &Path,
    catalog_path: Option<&Path>,
    use_cache: bool,
    json: bool,
) -> AppResult<()> {
    let request = RunRequest {
        project_path,
        catalog_path,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if json {
        return print_json(&RunOutput {
            manifest: &response.manifest,
            summary: query::summarize_records(&response.records),
            segments: &response.records,
        });
    }

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Dimensioning completed: {}", response.run_id);
    }

    if response.manifest.has_cycle {
        println!("✗ Segment graph contains a cycle; no segments were dimensioned");
        return Ok(());
    }

    print_records(&response.records);
    for unknown in &response.unknown_fixtures {
        println!(
            "  ! fixture {} has unknown type '{}' (counted as 0 load units)",
            unknown.fixture_id, unknown.fixture_type
        );
    }
    print_timing_summary(&response.timing);
    Ok(())
}

fn print_records(records: &[SegmentRecord]) {
    println!(
        "  {:<16} {:>8} {:>8} {:>10} {:>7} {:>9}",
        "segment", "LU", "q l/s", "dimension", "v m/s", "dp kPa"
    );
    for r in records {
        match &r.error_code {
            None => println!(
                "  {:<16} {:>8.2} {:>8.3} {:>10} {:>7.2} {:>9.3}",
                r.segment_id,
                r.total_load_units,
                r.design_flow_lps,
                r.dimension.as_deref().unwrap_or("-"),
                r.velocity_mps.unwrap_or(0.0),
                r.pressure_drop_kpa.unwrap_or(0.0)
            ),
            Some(code) => println!(
                "  {:<16} {:>8.2} {:>8.3} ✗ {}: {}",
                r.segment_id,
                r.total_load_units,
                r.design_flow_lps,
                code,
                r.error_message.as_deref().unwrap_or("")
            ),
        }
    }

    let summary = query::summarize_records(records);
    println!(
        "  {} segments, {} failed",
        summary.segment_count, summary.failed_count
    );
    if let Some(v) = summary.max_velocity_mps {
        println!("  Max velocity: {:.2} m/s", v);
    }
}

fn print_timing_summary(timing: &RunTimingSummary) {
    println!("\nTiming summary:");
    println!("  Load:      {:.3}s", timing.load_time_s);
    if timing.load_cache_time_s > 0.0 {
        println!("  Cache:     {:.3}s", timing.load_cache_time_s);
    } else {
        println!("  Dimension: {:.3}s", timing.dimension_time_s);
        println!("  Save:      {:.3}s", timing.save_time_s);
    }
    println!("  Total:     {:.3}s", timing.total_time_s);
}

fn cmd_runs(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let runs = run_service::list_runs(project_path, &project.name)?;

    if runs.is_empty() {
        println!("No cached runs found for project: {}", project.name);
    } else {
        println!("Cached runs for project {}:", project.name);
        for run in runs {
            let status = if run.has_cycle {
                "cycle".to_string()
            } else {
                format!("{} segments, {} failed", run.segment_count, run.failed_count)
            };
            println!("  {} - {} ({})", run.run_id, run.timestamp, status);
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let (manifest, records) = run_service::load_run(project_path, run_id)?;

    println!("Run ID: {}", manifest.run_id);
    println!("Project: {}", manifest.project_name);
    println!("Timestamp: {}", manifest.timestamp);
    println!("Engine version: {}", manifest.engine_version);
    if manifest.has_cycle {
        println!("Segment graph contains a cycle");
    }
    print_records(&records);
    let failed: Vec<&str> = query::failed_records(&records)
        .iter()
        .map(|r| r.segment_id.as_str())
        .collect();
    if !failed.is_empty() {
        println!("Failed segments: {}", failed.join(", "));
    }
    Ok(())
}

fn print_water(title: &str, report: &WaterReport) {
    println!("{title}:");
    println!("  Sum normal flow Q: {:.3} l/s", report.sum_normal_lps);
    println!("  Largest tap q1:    {:.3} l/s", report.largest_tap_lps);
    println!("  Probable flow q:   {:.3} l/s", report.probable_flow_lps);
    println!(
        "  Required Di:       {:.1} mm at {:.1} m/s",
        report.required_inner_diameter_mm, report.target_velocity_mps
    );
    match (&report.selected_dimension, report.actual_velocity_mps) {
        (Some(dim), Some(v)) => println!(
            "  Dimension:         {} (Di {:.1} mm, {:.2} m/s)",
            dim.label, dim.inner_diameter_mm, v
        ),
        _ => println!("  Dimension:         none"),
    }
    println!(
        "  Advice: max {:.1} m/s, recommended {:.1} m/s. {}",
        report.advice.max_mps, report.advice.recommended_mps, report.advice.description
    );
}

fn print_report(summary: &ReportSummary) {
    println!("Fixtures in scope: {}", summary.fixtures_in_scope);
    print_water("Cold water (KV)", &summary.cold_water);
    print_water("Hot water (VV)", &summary.hot_water);

    let drainage = &summary.drainage;
    println!("Drainage (AV):");
    println!("  Sum normal flow:   {:.3} l/s", drainage.sum_normal_lps);
    println!(
        "  Curve {:?} q_max:    {:.3} l/s",
        drainage.curve, drainage.q_max_lps
    );
    match &drainage.selected_drain {
        Some(drain) => println!(
            "  Drain at {}:      Ø{} (capacity {:.1} l/s)",
            drainage.slope, drain.nominal_diameter_mm, drain.q_max_lps
        ),
        None => println!("  Drain at {}:      none", drainage.slope),
    }
}

fn cmd_report(
    project_path: &Path,
    catalog_path: Option<&Path>,
    scope: ScopeFilter,
) -> AppResult<()> {
    tracing::debug!(floor = ?scope.floor, zone = ?scope.zone, "report scope");
    let project = project_service::load_project(project_path)?;
    let catalog = catalog_service::load_catalog(catalog_path)?;
    let summary = report_service::run_report(&project, &catalog, scope);
    print_report(&summary);
    Ok(())
}

fn cmd_catalog(catalog_path: Option<&Path>) -> AppResult<()> {
    let catalog = catalog_service::load_catalog(catalog_path)?;

    println!("Fixture norms ({}):", catalog.norms.len());
    for norm in &catalog.norms.fixtures {
        println!(
            "  {:<16} {:>5.2} LU  {:.2} l/s",
            norm.fixture_type, norm.load_units, norm.nominal_flow_lps
        );
    }

    for media in [MediaType::ColdWater, MediaType::HotWater, MediaType::Drainage] {
        for def in catalog.pipes.pipe_types(media) {
            let labels: Vec<String> = catalog
                .pipes
                .dimensions(media, &def.pipe_type)
                .iter()
                .map(|d| d.label.clone())
                .collect();
            println!(
                "{} {} ({}): {}",
                media.code(),
                def.pipe_type,
                def.label,
                labels.join(", ")
            );
        }
    }

    println!("Drainage slopes:");
    for slope in available_slopes(&catalog.drainage) {
        println!("  {} - {}", slope.label, slope.description);
    }
    Ok(())
}
