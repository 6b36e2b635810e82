//! Structural diagnostics over a segment snapshot.

use hf_core::ensure_positive;

use crate::error::GraphError;
use crate::topo::topo_sort;
use crate::tree::SegmentTree;

/// Collect every structural problem in the tree.
///
/// Never fails fast: callers get the full list so a project file can be
/// repaired in one pass. An empty vector means the snapshot is a forest of
/// positive-length segments with resolvable parents.
pub fn validate_tree(tree: &SegmentTree) -> Vec<GraphError> {
    let mut errors: Vec<GraphError> = tree
        .duplicates()
        .iter()
        .map(|id| GraphError::DuplicateId { id: id.clone() })
        .collect();

    for segment in tree.segments() {
        if ensure_positive(segment.length_m, "segment length").is_err() {
            errors.push(GraphError::InvalidLength {
                segment: segment.id.clone(),
                length_m: segment.length_m,
            });
        }

        if let Some(parent) = segment.parent() {
            if parent == &segment.id {
                errors.push(GraphError::SelfParent {
                    segment: segment.id.clone(),
                });
            } else if tree.idx(parent.as_str()).is_none() {
                errors.push(GraphError::DanglingParent {
                    segment: segment.id.clone(),
                    parent: parent.clone(),
                });
            }
        }
    }

    let sorted = topo_sort(tree);
    // A lone self-parent is already reported above.
    if sorted.has_cycle && sorted.cycle.len() > 1 {
        errors.push(GraphError::CycleDetected {
            segments: sorted.cycle.iter().map(|&i| tree.id(i).clone()).collect(),
        });
    }

    errors
}
