//! Bottom-up ordering of the segment forest with cycle detection.
//!
//! Children are emitted before their parent, so a single forward pass over
//! the order sees every subtree resolved before the segment that drains it.

use hf_core::{PipeSegment, SegIdx, SegmentId};

use crate::tree::SegmentTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Result of [`topo_sort`].
#[derive(Debug, Clone, Default)]
pub struct TopoOrder {
    /// Every segment once, descendants before ancestors.
    pub order: Vec<SegIdx>,
    pub has_cycle: bool,
    /// Members of the first cycle found, in traversal order.
    pub cycle: Vec<SegIdx>,
}

/// Depth-first post-order over child edges.
///
/// Starts from the roots, then sweeps every segment not yet reached (which
/// covers sub-forests hanging off missing parents and cyclic components).
/// Uses an explicit stack; revisiting an in-progress segment sets
/// `has_cycle` and abandons that edge instead of failing.
pub fn topo_sort(tree: &SegmentTree) -> TopoOrder {
    let n = tree.len();
    let mut marks = vec![Mark::Unvisited; n];
    let mut result = TopoOrder {
        order: Vec::with_capacity(n),
        ..TopoOrder::default()
    };

    // (segment, position of the next child to visit)
    let mut stack: Vec<(SegIdx, usize)> = Vec::new();

    let starts = tree.roots().iter().copied().chain(tree.indices());
    for start in starts {
        if marks[start.as_usize()] != Mark::Unvisited {
            continue;
        }
        marks[start.as_usize()] = Mark::InProgress;
        stack.push((start, 0));

        while let Some(&(node, next)) = stack.last() {
            let children = tree.children(node);
            if next >= children.len() {
                stack.pop();
                marks[node.as_usize()] = Mark::Done;
                result.order.push(node);
                continue;
            }

            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            let child = children[next];
            match marks[child.as_usize()] {
                Mark::Unvisited => {
                    marks[child.as_usize()] = Mark::InProgress;
                    stack.push((child, 0));
                }
                Mark::InProgress => {
                    if !result.has_cycle {
                        let from = stack.iter().position(|&(s, _)| s == child).unwrap_or(0);
                        result.cycle = stack[from..].iter().map(|&(s, _)| s).collect();
                        tracing::debug!(segment = %tree.id(child), "cycle detected");
                    }
                    result.has_cycle = true;
                }
                Mark::Done => {}
            }
        }
    }

    result
}

/// Convenience wrapper: sort a raw segment list and return ids.
pub fn sort_segments(segments: &[PipeSegment]) -> (Vec<SegmentId>, bool) {
    let tree = SegmentTree::from_segments(segments);
    let sorted = topo_sort(&tree);
    let ids = sorted.order.iter().map(|&i| tree.id(i).clone()).collect();
    (ids, sorted.has_cycle)
}
