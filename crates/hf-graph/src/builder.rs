//! Incremental segment tree builder.

use hf_core::{PipeSegment, SegIdx, SegmentId};

use crate::error::{GraphError, GraphResult};
use crate::indexing::IndexMap;
use crate::tree::SegmentTree;

/// Builder for constructing a segment tree incrementally.
///
/// Use `add_segment` to collect segments, then call `build()` to resolve
/// parent references and freeze the result into an immutable `SegmentTree`.
#[derive(Debug, Default)]
pub struct SegmentTreeBuilder {
    segments: Vec<PipeSegment>,
    index: IndexMap,
    duplicates: Vec<SegmentId>,
}

impl SegmentTreeBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment and return its index.
    pub fn add_segment(&mut self, segment: PipeSegment) -> GraphResult<SegIdx> {
        match self.index.insert(segment.id.clone()) {
            Some(idx) => {
                self.segments.push(segment);
                Ok(idx)
            }
            None => Err(GraphError::DuplicateId { id: segment.id }),
        }
    }

    pub(crate) fn note_duplicate(&mut self, id: SegmentId) {
        self.duplicates.push(id);
    }

    /// Resolve parents and build compact child lists.
    pub fn build(self) -> SegmentTree {
        let parents: Vec<Option<SegIdx>> = self
            .segments
            .iter()
            .map(|s| s.parent().and_then(|p| self.index.idx(p.as_str())))
            .collect();

        let roots = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_root())
            .map(|(i, _)| SegIdx::from_index(i as u32))
            .collect();

        let (child_offsets, children) = Self::build_adjacency(&parents);

        SegmentTree {
            segments: self.segments,
            index: self.index,
            parents,
            child_offsets,
            children,
            roots,
            duplicates: self.duplicates,
        }
    }

    /// Build compact adjacency lists: for each segment, collect its children.
    fn build_adjacency(parents: &[Option<SegIdx>]) -> (Vec<usize>, Vec<SegIdx>) {
        let n = parents.len();

        // Count children per parent
        let mut counts = vec![0_usize; n];
        for parent in parents.iter().flatten() {
            counts[parent.as_usize()] += 1;
        }

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        // Fill in insertion order
        let mut cursor = offsets[..n].to_vec();
        let mut flat = vec![SegIdx::from_index(0); offsets[n]];
        for (child, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                let slot = &mut cursor[parent.as_usize()];
                flat[*slot] = SegIdx::from_index(child as u32);
                *slot += 1;
            }
        }

        (offsets, flat)
    }
}
