//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Project;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        1 => migrate_v1_to_v2(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    project.version = 1;
    Ok(project)
}

/// Version 1 wrote `""` for unconnected fixtures and root parents.
fn migrate_v1_to_v2(mut project: Project) -> Result<Project, ProjectError> {
    let mut normalised = 0usize;
    for fixture in &mut project.fixtures {
        if fixture.segment_id.as_ref().is_some_and(|s| s.is_blank()) {
            fixture.segment_id = None;
            normalised += 1;
        }
    }
    for segment in &mut project.segments {
        if segment.parent_id.as_ref().is_some_and(|p| p.is_blank()) {
            segment.parent_id = None;
            normalised += 1;
        }
    }
    tracing::debug!(normalised, "migrated project v1 -> v2");

    project.version = 2;
    Ok(project)
}
