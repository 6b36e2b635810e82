//! Project validation logic.

use std::collections::HashSet;

use hf_graph::{GraphError, SegmentTree, validate_tree};

use crate::schema::Project;

pub const MIN_SIMULTANEITY_FACTOR: f64 = 0.1;
pub const MAX_SIMULTANEITY_FACTOR: f64 = 2.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Segment cycle: {path}")]
    Cycle { path: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl ValidationError {
    /// Dangling references and cycles. The sizing core treats these as data
    /// (unconnected fixtures, swept sub-forests, `has_cycle`), so they do not
    /// block loading or saving.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingReference { .. } | ValidationError::Cycle { .. }
        )
    }
}

/// First blocking problem, or `Ok`. Structural issues are not blocking.
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    match validation_issues(project)
        .into_iter()
        .find(|issue| !issue.is_structural())
    {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Issues that dimensioning tolerates but a user should see.
pub fn structural_warnings(project: &Project) -> Vec<ValidationError> {
    validation_issues(project)
        .into_iter()
        .filter(ValidationError::is_structural)
        .collect()
}

/// Every problem found, in file order (fixtures, segments, settings).
pub fn validation_issues(project: &Project) -> Vec<ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return vec![ValidationError::UnsupportedVersion {
            version: project.version,
        }];
    }

    let mut issues = Vec::new();
    let tree = SegmentTree::from_segments(&project.segments);

    let mut fixture_ids = HashSet::new();
    for fixture in &project.fixtures {
        if !fixture_ids.insert(fixture.id.as_str()) {
            issues.push(ValidationError::DuplicateId {
                id: fixture.id.to_string(),
                context: "fixtures".to_string(),
            });
        }
        if fixture.quantity < 1 {
            issues.push(ValidationError::InvalidValue {
                field: format!("fixtures[{}].quantity", fixture.id),
                value: fixture.quantity.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(segment) = fixture.segment() {
            if tree.idx(segment.as_str()).is_none() {
                issues.push(ValidationError::MissingReference {
                    id: segment.to_string(),
                    context: format!("fixture {} segment_id", fixture.id),
                });
            }
        }
    }

    issues.extend(validate_tree(&tree).into_iter().map(from_graph));

    let k = project.simultaneity_factor;
    if !k.is_finite() || !(MIN_SIMULTANEITY_FACTOR..=MAX_SIMULTANEITY_FACTOR).contains(&k) {
        issues.push(ValidationError::InvalidValue {
            field: "simultaneity_factor".to_string(),
            value: k.to_string(),
            reason: format!(
                "must be between {MIN_SIMULTANEITY_FACTOR} and {MAX_SIMULTANEITY_FACTOR}"
            ),
        });
    }

    for (field, v) in [
        ("report.kv_velocity_mps", project.report.kv_velocity_mps),
        ("report.vv_velocity_mps", project.report.vv_velocity_mps),
    ] {
        if !v.is_finite() || v <= 0.0 {
            issues.push(ValidationError::InvalidValue {
                field: field.to_string(),
                value: v.to_string(),
                reason: "must be positive".to_string(),
            });
        }
    }

    issues
}

fn from_graph(err: GraphError) -> ValidationError {
    match err {
        GraphError::DuplicateId { id } => ValidationError::DuplicateId {
            id: id.to_string(),
            context: "segments".to_string(),
        },
        GraphError::UnknownSegment { id } => ValidationError::MissingReference {
            id: id.to_string(),
            context: "segments".to_string(),
        },
        GraphError::DanglingParent { segment, parent } => ValidationError::MissingReference {
            id: parent.to_string(),
            context: format!("segment {segment} parent_id"),
        },
        GraphError::SelfParent { segment } => ValidationError::Cycle {
            path: format!("{segment} -> {segment}"),
        },
        GraphError::InvalidLength { segment, length_m } => ValidationError::InvalidValue {
            field: format!("segments[{segment}].length_m"),
            value: length_m.to_string(),
            reason: "must be positive".to_string(),
        },
        GraphError::CycleDetected { segments } => ValidationError::Cycle {
            path: segments
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" -> "),
        },
    }
}
