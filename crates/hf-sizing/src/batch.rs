//! Bottom-up dimensioning of a whole segment snapshot.

use hf_core::PipeSegment;
use hf_graph::{SegmentTree, topo_sort};

use crate::context::SizingContext;
use crate::load::LoadAggregator;
use crate::result::BatchOutcome;
use crate::segment::size_with_load;

/// Dimension every segment, children before parents.
///
/// A cyclic parent graph yields no results and `has_cycle = true`; load
/// is undefined on a cycle so nothing is partially dimensioned.
pub fn dimension_all(segments: &[PipeSegment], ctx: &SizingContext<'_>) -> BatchOutcome {
    let tree = SegmentTree::from_segments(segments);
    let sorted = topo_sort(&tree);
    let loads = LoadAggregator::new(&tree, ctx.fixtures, ctx.norms);

    if sorted.has_cycle {
        tracing::warn!(
            cycle = ?sorted.cycle.iter().map(|&i| tree.id(i).as_str()).collect::<Vec<_>>(),
            "segment graph has a cycle, nothing dimensioned"
        );
        return BatchOutcome {
            results: Vec::new(),
            has_cycle: true,
            unknown_fixtures: loads.into_unknown_fixtures(),
        };
    }

    let totals = loads.bottom_up_totals(&sorted.order);
    let results: Vec<_> = sorted
        .order
        .iter()
        .map(|&idx| size_with_load(tree.segment(idx), totals[idx.as_usize()], ctx))
        .collect();

    let outcome = BatchOutcome {
        results,
        has_cycle: false,
        unknown_fixtures: loads.into_unknown_fixtures(),
    };
    tracing::debug!(
        segments = outcome.results.len(),
        failed = outcome.failed_count(),
        "dimensioning pass complete"
    );
    outcome
}
