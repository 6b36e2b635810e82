//! Content-based hashing for run IDs.

use hf_catalog::Catalog;
use hf_core::{Fixture, PipeSegment};
use hf_project::Project;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Everything a dimensioning result depends on.
#[derive(Serialize)]
struct RunInputs<'a> {
    fixtures: &'a [Fixture],
    segments: &'a [PipeSegment],
    simultaneity_factor: f64,
    catalog: &'a Catalog,
}

/// Hex SHA-256 of the project inputs, the catalog and the engine version.
///
/// The project name, building type and report settings do not take part.
pub fn compute_run_id(project: &Project, catalog: &Catalog, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let inputs = RunInputs {
        fixtures: &project.fixtures,
        segments: &project.segments,
        simultaneity_factor: project.simultaneity_factor,
        catalog,
    };
    let inputs_json = serde_json::to_string(&inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::MediaType;

    fn project() -> Project {
        let mut project = Project::new("hash");
        project
            .segments
            .push(PipeSegment::new("S1", 3.0, MediaType::ColdWater, "pex"));
        project
            .fixtures
            .push(Fixture::new("f1", "wc", 2).on_segment("S1"));
        project
    }

    #[test]
    fn hash_stability() {
        let catalog = Catalog::builtin();
        let a = compute_run_id(&project(), &catalog, "v1");
        let b = compute_run_id(&project(), &catalog, "v1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let catalog = Catalog::builtin();
        let base = compute_run_id(&project(), &catalog, "v1");

        let mut more = project();
        more.fixtures[0].quantity = 3;
        assert_ne!(base, compute_run_id(&more, &catalog, "v1"));

        let mut k = project();
        k.simultaneity_factor = 0.7;
        assert_ne!(base, compute_run_id(&k, &catalog, "v1"));

        assert_ne!(base, compute_run_id(&project(), &catalog, "v2"));
        assert_ne!(base, compute_run_id(&project(), &Catalog::default(), "v1"));
    }

    #[test]
    fn name_does_not_matter() {
        let catalog = Catalog::builtin();
        let mut renamed = project();
        renamed.name = "other".to_string();
        assert_eq!(
            compute_run_id(&project(), &catalog, "v1"),
            compute_run_id(&renamed, &catalog, "v1")
        );
    }
}
