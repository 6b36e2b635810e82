//! Graph-specific error types.

use hf_core::SegmentId;

/// Segment graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Two segments share an id.
    DuplicateId { id: SegmentId },

    /// A lookup named a segment that is not in the snapshot.
    UnknownSegment { id: SegmentId },

    /// A segment's parent is not in the snapshot.
    DanglingParent { segment: SegmentId, parent: SegmentId },

    /// A segment names itself as parent.
    SelfParent { segment: SegmentId },

    /// Length is not a positive finite number.
    InvalidLength { segment: SegmentId, length_m: f64 },

    /// The parent graph is not acyclic.
    CycleDetected { segments: Vec<SegmentId> },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateId { id } => {
                write!(f, "Segment id '{}' is used more than once", id)
            }
            GraphError::UnknownSegment { id } => {
                write!(f, "Segment '{}' not found", id)
            }
            GraphError::DanglingParent { segment, parent } => {
                write!(
                    f,
                    "Segment '{}' refers to non-existent parent '{}'",
                    segment, parent
                )
            }
            GraphError::SelfParent { segment } => {
                write!(f, "Segment '{}' is its own parent", segment)
            }
            GraphError::InvalidLength { segment, length_m } => {
                write!(f, "Segment '{}' has invalid length {} m", segment, length_m)
            }
            GraphError::CycleDetected { segments } => {
                let ids: Vec<&str> = segments.iter().map(SegmentId::as_str).collect();
                write!(f, "Cycle detected in segment tree: {}", ids.join(" -> "))
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_ids() {
        let err = GraphError::DanglingParent {
            segment: "S1".into(),
            parent: "S9".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("S1") && msg.contains("S9"));

        let cycle = GraphError::CycleDetected {
            segments: vec!["A".into(), "B".into()],
        };
        assert!(cycle.to_string().contains("A -> B"));
    }
}
