//! Smoke tests for the hf-app service layer.

use std::path::{Path, PathBuf};

use hf_app::*;
use hf_catalog::Catalog;
use hf_core::{Fixture, MediaType, PipeSegment};
use hf_project::Project;
use hf_report::ScopeFilter;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn house() -> Project {
    let mut project = Project::new("house");
    project.segments = vec![
        PipeSegment::new("S2", 5.0, MediaType::ColdWater, "kobber"),
        PipeSegment::new("S1", 2.0, MediaType::ColdWater, "kobber").with_parent("S2"),
    ];
    project.fixtures = vec![
        Fixture::new("wc-1", "wc", 1).on_segment("S1").at(1, "Bad"),
        Fixture::new("wc-2", "wc", 1).on_segment("S1").at(2, "Bad"),
    ];
    project
}

fn request(path: &Path, use_cache: bool) -> RunRequest<'_> {
    RunRequest {
        project_path: path,
        catalog_path: None,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    }
}

#[test]
fn dimension_then_hit_cache() {
    let dir = scratch("hf_app_cache");
    let path = dir.join("house.yaml");
    save_project(&path, &house()).unwrap();

    let first = ensure_run(&request(&path, true)).unwrap();
    assert!(!first.loaded_from_cache);
    assert!(!first.manifest.has_cycle);
    assert_eq!(first.manifest.failed_count, 0);
    assert_eq!(first.records.len(), 2);
    assert_eq!(first.records[0].segment_id, "S1");
    let s2 = find_record(&first.records, "S2").unwrap();
    assert_eq!(s2.dimension.as_deref(), Some("22x1"));
    assert!((s2.design_flow_lps - 0.5).abs() < 1e-12);

    let second = ensure_run(&request(&path, true)).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(second.run_id, first.run_id);
    assert_eq!(second.records, first.records);

    let forced = ensure_run(&request(&path, false)).unwrap();
    assert!(!forced.loaded_from_cache);
    assert_eq!(forced.run_id, first.run_id);

    let runs = list_runs(&path, "house").unwrap();
    assert_eq!(runs.len(), 1);

    let (manifest, records) = load_run(&path, &first.run_id).unwrap();
    assert_eq!(manifest.project_name, "house");
    assert_eq!(records.len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn edited_project_gets_new_run() {
    let dir = scratch("hf_app_edit");
    let path = dir.join("house.json");
    let mut project = house();
    save_project(&path, &project).unwrap();
    let first = ensure_run(&request(&path, true)).unwrap();

    project
        .fixtures
        .push(Fixture::new("dusj-1", "dusj", 1).on_segment("S2"));
    save_project(&path, &project).unwrap();
    let second = ensure_run(&request(&path, true)).unwrap();

    assert_ne!(first.run_id, second.run_id);
    assert!(!second.loaded_from_cache);
    assert_eq!(list_runs(&path, "house").unwrap().len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cycle_is_a_successful_run() {
    let dir = scratch("hf_app_cycle");
    let mut project = house();
    project.segments[0].parent_id = Some("S1".into());

    let response = dimension_project(
        &dir.join("loop.yaml"),
        &project,
        &Catalog::builtin(),
        &RunOptions::default(),
    )
    .unwrap();
    assert!(response.manifest.has_cycle);
    assert!(response.records.is_empty());
    assert_eq!(response.manifest.segment_count, 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cyclic_project_file_runs() {
    let dir = scratch("hf_app_cycle_file");
    let path = dir.join("loop.yaml");
    std::fs::write(
        &path,
        r#"
version: 2
name: loop
segments:
  - { id: A, parent_id: B, length_m: 3.0, media_type: KV, pipe_type: kobber }
  - { id: B, parent_id: A, length_m: 2.0, media_type: KV, pipe_type: kobber }
fixtures:
  - { id: f1, fixture_type: wc, quantity: 1, segment_id: A }
"#,
    )
    .unwrap();

    let project = load_project(&path).unwrap();
    assert_eq!(project_warnings(&project).len(), 1);

    let response = ensure_run(&request(&path, true)).unwrap();
    assert!(response.manifest.has_cycle);
    assert!(response.records.is_empty());
    assert_eq!(list_runs(&path, "loop").unwrap().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn dangling_references_are_tolerated() {
    let dir = scratch("hf_app_dangling");
    let path = dir.join("house.yaml");
    std::fs::write(
        &path,
        r#"
version: 2
name: house
segments:
  - { id: S2, length_m: 5.0, media_type: KV, pipe_type: kobber }
  - { id: S1, parent_id: S2, length_m: 2.0, media_type: KV, pipe_type: kobber }
  - { id: S9, parent_id: removed, length_m: 1.0, media_type: KV, pipe_type: kobber }
fixtures:
  - { id: f1, fixture_type: wc, quantity: 1, segment_id: S1 }
  - { id: f2, fixture_type: wc, quantity: 1, segment_id: deleted-seg }
  - { id: f3, fixture_type: wc, quantity: 1, segment_id: S9 }
"#,
    )
    .unwrap();

    let response = ensure_run(&request(&path, true)).unwrap();
    assert!(!response.manifest.has_cycle);
    assert_eq!(response.records.len(), 3);

    // f2 is unconnected and adds nothing.
    let s2 = find_record(&response.records, "S2").unwrap();
    assert!((s2.total_load_units - 0.5).abs() < 1e-12);

    let s9 = find_record(&response.records, "S9").unwrap();
    assert!((s9.total_load_units - 0.5).abs() < 1e-12);
    assert!(s9.is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_fixture_is_reported() {
    let dir = scratch("hf_app_unknown");
    let mut project = house();
    project
        .fixtures
        .push(Fixture::new("spa-1", "boblebad", 1).on_segment("S1"));

    let response = dimension_project(
        &dir.join("house.yaml"),
        &project,
        &Catalog::builtin(),
        &RunOptions::default(),
    )
    .unwrap();
    assert_eq!(response.unknown_fixtures.len(), 1);
    assert_eq!(response.unknown_fixtures[0].fixture_type, "boblebad");
    assert_eq!(response.manifest.unknown_fixtures, response.unknown_fixtures);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_run_and_project() {
    let dir = scratch("hf_app_missing");
    let path = dir.join("house.yaml");
    assert!(load_project(&path).is_err());

    save_project(&path, &house()).unwrap();
    assert!(matches!(
        load_run(&path, "deadbeef"),
        Err(AppError::RunNotFound(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn report_scoped_to_floor() {
    let catalog = load_catalog(None).unwrap();
    let project = house();

    let whole = run_report(&project, &catalog, ScopeFilter::all());
    assert_eq!(whole.fixtures_in_scope, 2);
    assert!((whole.cold_water.sum_normal_lps - 0.2).abs() < 1e-12);

    let floor = run_report(&project, &catalog, ScopeFilter::all().with_floor(2));
    assert_eq!(floor.fixtures_in_scope, 1);
    assert!((floor.cold_water.sum_normal_lps - 0.1).abs() < 1e-12);
}

#[test]
fn demo_project_loads() {
    let mut project_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    project_path.pop();
    project_path.pop();
    project_path.push("demos");
    project_path.push("apartment.yaml");

    let project = load_project(&project_path).expect("demo project should load");
    validate_project(&project).expect("demo project should validate");

    let summary = summarize(&project);
    assert_eq!(summary.segment_count, 6);
    assert_eq!(summary.roots, ["kv-main", "vv-main", "av-main"]);

    let outline = segment_outline(&project);
    assert_eq!(outline[0].segment_id, "kv-main");
    assert_eq!(outline[2].depth, 2);
    assert!(outline.iter().all(|r| !r.detached));
}
