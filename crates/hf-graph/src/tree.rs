//! Immutable index over one segment snapshot.

use hf_core::{PipeSegment, SegIdx, SegmentId};

use crate::builder::SegmentTreeBuilder;
use crate::indexing::IndexMap;

/// The segment forest: a validated-shape, immutable view of a segment list.
///
/// The tree stores:
/// - All segments in a vector (indexed by `SegIdx`).
/// - Resolved parent indices (`None` for roots and dangling parents).
/// - Compact adjacency: for each segment, its direct children in insertion order.
///
/// The shape is not guaranteed acyclic; see [`crate::topo_sort`].
#[derive(Debug, Clone)]
pub struct SegmentTree {
    pub(crate) segments: Vec<PipeSegment>,
    pub(crate) index: IndexMap,
    pub(crate) parents: Vec<Option<SegIdx>>,

    /// Segment i's children are in children[child_offsets[i]..child_offsets[i+1]].
    pub(crate) child_offsets: Vec<usize>,
    pub(crate) children: Vec<SegIdx>,

    /// Segments with no parent reference, in insertion order.
    pub(crate) roots: Vec<SegIdx>,

    /// Ids dropped because an earlier segment already used them.
    pub(crate) duplicates: Vec<SegmentId>,
}

impl SegmentTree {
    /// Index a segment list, tolerating duplicate ids (first occurrence wins).
    pub fn from_segments(segments: &[PipeSegment]) -> Self {
        let mut builder = SegmentTreeBuilder::new();
        for segment in segments {
            if builder.add_segment(segment.clone()).is_err() {
                tracing::warn!(segment = %segment.id, "duplicate segment id ignored");
                builder.note_duplicate(segment.id.clone());
            }
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return all segments in index order.
    pub fn segments(&self) -> &[PipeSegment] {
        &self.segments
    }

    pub fn index_map(&self) -> &IndexMap {
        &self.index
    }

    pub fn idx(&self, id: &str) -> Option<SegIdx> {
        self.index.idx(id)
    }

    pub fn id(&self, idx: SegIdx) -> &SegmentId {
        self.index.id(idx)
    }

    /// Get a segment by id.
    pub fn get(&self, id: &str) -> Option<&PipeSegment> {
        self.idx(id).map(|idx| self.segment(idx))
    }

    /// Get a segment by index (panics if out of bounds).
    pub fn segment(&self, idx: SegIdx) -> &PipeSegment {
        &self.segments[idx.as_usize()]
    }

    /// Parent index, `None` for roots and for parents missing from the snapshot.
    pub fn parent(&self, idx: SegIdx) -> Option<SegIdx> {
        self.parents.get(idx.as_usize()).copied().flatten()
    }

    /// Direct children of a segment.
    pub fn children(&self, idx: SegIdx) -> &[SegIdx] {
        let i = idx.as_usize();
        if i >= self.segments.len() {
            return &[];
        }
        let start = self.child_offsets[i];
        let end = self.child_offsets[i + 1];
        &self.children[start..end]
    }

    pub fn roots(&self) -> &[SegIdx] {
        &self.roots
    }

    pub fn duplicates(&self) -> &[SegmentId] {
        &self.duplicates
    }

    /// Iterate over all indices in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = SegIdx> {
        (0..self.segments.len() as u32).map(SegIdx::from_index)
    }
}
