//! In-memory editing of a project's fixtures and segments.

use hf_core::{Fixture, FixtureId, PipeSegment, SegmentId};

use crate::schema::Project;
use crate::validate::ValidationError;

/// Fresh random id for a new fixture or segment.
pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Append a fixture, assigning a new id when its id is blank.
pub fn add_fixture(
    project: &mut Project,
    mut fixture: Fixture,
) -> Result<FixtureId, ValidationError> {
    if fixture.id.is_blank() {
        fixture.id = FixtureId::new(new_entity_id());
    }
    if project.fixtures.iter().any(|f| f.id == fixture.id) {
        return Err(ValidationError::DuplicateId {
            id: fixture.id.to_string(),
            context: "fixtures".to_string(),
        });
    }
    let id = fixture.id.clone();
    project.fixtures.push(fixture);
    Ok(id)
}

/// Append a segment, assigning a new id when its id is blank.
pub fn add_segment(
    project: &mut Project,
    mut segment: PipeSegment,
) -> Result<SegmentId, ValidationError> {
    if segment.id.is_blank() {
        segment.id = SegmentId::new(new_entity_id());
    }
    if project.segments.iter().any(|s| s.id == segment.id) {
        return Err(ValidationError::DuplicateId {
            id: segment.id.to_string(),
            context: "segments".to_string(),
        });
    }
    let id = segment.id.clone();
    project.segments.push(segment);
    Ok(id)
}

pub fn remove_fixture(project: &mut Project, id: &str) -> Option<Fixture> {
    let pos = project.fixtures.iter().position(|f| f.id.as_str() == id)?;
    Some(project.fixtures.remove(pos))
}

/// Remove a segment. Fixtures on it become unconnected; its children keep
/// their now dangling parent reference.
pub fn remove_segment(project: &mut Project, id: &str) -> Option<PipeSegment> {
    let pos = project.segments.iter().position(|s| s.id.as_str() == id)?;
    let removed = project.segments.remove(pos);

    for fixture in &mut project.fixtures {
        if fixture.segment().is_some_and(|s| s.as_str() == id) {
            fixture.segment_id = None;
        }
    }
    Some(removed)
}
