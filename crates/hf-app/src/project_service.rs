//! Project loading, saving, validation, and introspection.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use hf_core::MediaType;
use hf_graph::SegmentTree;
use hf_project::Project;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Counts shown when a project is opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub building_type: String,
    pub simultaneity_factor: f64,
    pub fixture_count: usize,
    /// Sum of fixture quantities.
    pub fixture_units: u32,
    pub unconnected_fixtures: usize,
    pub segment_count: usize,
    pub segments_by_media: BTreeMap<MediaType, usize>,
    pub roots: Vec<String>,
}

/// One line of the indented segment listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineRow {
    pub depth: usize,
    pub segment_id: String,
    pub media_type: MediaType,
    pub pipe_type: String,
    pub length_m: f64,
    /// Fixtures attached directly to this segment.
    pub fixture_count: usize,
    /// Not reachable from any root (dangling parent or cycle).
    pub detached: bool,
}

/// Load a project file (YAML or JSON by extension), migrated and validated.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = hf_project::load(path)?;
    tracing::debug!(
        path = %path.display(),
        fixtures = project.fixtures.len(),
        segments = project.segments.len(),
        "loaded project"
    );
    Ok(project)
}

pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    hf_project::save(path, project)?;
    Ok(())
}

/// All blocking validation issues joined into one error.
///
/// Dangling references and cycles are not blocking; see [`project_warnings`].
pub fn validate_project(project: &Project) -> AppResult<()> {
    let message = hf_project::validation_issues(project)
        .iter()
        .filter(|issue| !issue.is_structural())
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    if message.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(message))
    }
}

/// Structural issues dimensioning tolerates: unconnected fixture references,
/// missing parents and cycles.
pub fn project_warnings(project: &Project) -> Vec<String> {
    hf_project::structural_warnings(project)
        .iter()
        .map(|issue| issue.to_string())
        .collect()
}

pub fn summarize(project: &Project) -> ProjectSummary {
    let mut segments_by_media = BTreeMap::new();
    for segment in &project.segments {
        *segments_by_media.entry(segment.media_type).or_insert(0) += 1;
    }

    ProjectSummary {
        name: project.name.clone(),
        building_type: project.building_type.clone(),
        simultaneity_factor: project.simultaneity_factor,
        fixture_count: project.fixtures.len(),
        fixture_units: project.fixtures.iter().map(|f| f.quantity).sum(),
        unconnected_fixtures: project
            .fixtures
            .iter()
            .filter(|f| f.segment().is_none())
            .count(),
        segment_count: project.segments.len(),
        segments_by_media,
        roots: project
            .segments
            .iter()
            .filter(|s| s.is_root())
            .map(|s| s.id.to_string())
            .collect(),
    }
}

/// Depth-first listing of the segment forest, roots in file order.
///
/// Segments that no root reaches are appended at depth 0 and marked detached.
pub fn segment_outline(project: &Project) -> Vec<OutlineRow> {
    let tree = SegmentTree::from_segments(&project.segments);

    let mut attached: HashMap<&str, usize> = HashMap::new();
    for fixture in &project.fixtures {
        if let Some(segment_id) = fixture.segment() {
            *attached.entry(segment_id.as_str()).or_insert(0) += 1;
        }
    }

    let row = |idx, depth, detached| {
        let segment = tree.segment(idx);
        OutlineRow {
            depth,
            segment_id: segment.id.to_string(),
            media_type: segment.media_type,
            pipe_type: segment.pipe_type.clone(),
            length_m: segment.length_m,
            fixture_count: attached.get(segment.id.as_str()).copied().unwrap_or(0),
            detached,
        }
    };

    let mut rows = Vec::with_capacity(tree.len());
    let mut visited = HashSet::new();
    let mut stack: Vec<_> = tree.roots().iter().rev().map(|&r| (r, 0)).collect();
    while let Some((idx, depth)) = stack.pop() {
        if !visited.insert(idx) {
            continue;
        }
        rows.push(row(idx, depth, false));
        for &child in tree.children(idx).iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    for idx in tree.indices() {
        if !visited.contains(&idx) {
            rows.push(row(idx, 0, true));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::{Fixture, PipeSegment};

    fn project() -> Project {
        let mut project = Project::new("outline");
        project.segments = vec![
            PipeSegment::new("main", 10.0, MediaType::ColdWater, "pex"),
            PipeSegment::new("a", 4.0, MediaType::ColdWater, "pex").with_parent("main"),
            PipeSegment::new("a1", 2.0, MediaType::ColdWater, "pex").with_parent("a"),
            PipeSegment::new("b", 3.0, MediaType::ColdWater, "pex").with_parent("main"),
            PipeSegment::new("drain", 6.0, MediaType::Drainage, "plast"),
        ];
        project.fixtures = vec![
            Fixture::new("f1", "wc", 1).on_segment("a1"),
            Fixture::new("f2", "servant", 2).on_segment("a1"),
            Fixture::new("f3", "dusj", 1),
        ];
        project
    }

    #[test]
    fn outline_is_depth_first() {
        let rows = segment_outline(&project());
        let listed: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.segment_id.as_str(), r.depth))
            .collect();
        assert_eq!(
            listed,
            [("main", 0), ("a", 1), ("a1", 2), ("b", 1), ("drain", 0)]
        );
        assert_eq!(rows[2].fixture_count, 2);
        assert!(rows.iter().all(|r| !r.detached));
    }

    #[test]
    fn cycle_members_are_detached() {
        let mut project = project();
        project.segments.push(
            PipeSegment::new("x", 1.0, MediaType::HotWater, "pex").with_parent("y"),
        );
        project.segments.push(
            PipeSegment::new("y", 1.0, MediaType::HotWater, "pex").with_parent("x"),
        );
        let rows = segment_outline(&project);
        let detached: Vec<&str> = rows
            .iter()
            .filter(|r| r.detached)
            .map(|r| r.segment_id.as_str())
            .collect();
        assert_eq!(detached, ["x", "y"]);
    }

    #[test]
    fn summary_counts() {
        let summary = summarize(&project());
        assert_eq!(summary.fixture_count, 3);
        assert_eq!(summary.fixture_units, 4);
        assert_eq!(summary.unconnected_fixtures, 1);
        assert_eq!(summary.segments_by_media[&MediaType::ColdWater], 4);
        assert_eq!(summary.segments_by_media[&MediaType::Drainage], 1);
        assert_eq!(summary.roots, ["main", "drain"]);
    }

    #[test]
    fn validation_joins_issues() {
        assert!(validate_project(&project()).is_ok());

        let mut broken = project();
        broken.simultaneity_factor = 5.0;
        broken.segments[1].length_m = 0.0;
        match validate_project(&broken) {
            Err(AppError::Validation(message)) => assert!(message.contains("; ")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn structural_issues_are_warnings() {
        let mut project = project();
        project.fixtures[0].segment_id = Some("deleted-seg".into());
        project.segments[0].parent_id = Some("a1".into());

        assert!(validate_project(&project).is_ok());
        let warnings = project_warnings(&project);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("deleted-seg"));
        assert!(warnings[1].contains(" -> "));
    }
}
