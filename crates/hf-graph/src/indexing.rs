//! Stable indexing between segment ids and contiguous positions.
//!
//! Provides bidirectional mappings between domain ids (`SegmentId`)
//! and contiguous indices (0..N) used by per-segment arrays.

use std::collections::HashMap;

use hf_core::{SegIdx, SegmentId};

use crate::error::{GraphError, GraphResult};

/// Index map providing O(1) lookup in both directions.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    /// Contiguous list of ids (index -> SegmentId).
    ids: Vec<SegmentId>,

    /// Reverse lookup: SegmentId -> index.
    to_idx: HashMap<SegmentId, SegIdx>,
}

impl IndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id, returning its index, or `None` if already present.
    pub(crate) fn insert(&mut self, id: SegmentId) -> Option<SegIdx> {
        if self.to_idx.contains_key(id.as_str()) {
            return None;
        }
        let idx = SegIdx::from_index(self.ids.len() as u32);
        self.to_idx.insert(id.clone(), idx);
        self.ids.push(id);
        Some(idx)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.to_idx.contains_key(id)
    }

    /// Look up the index of an id.
    pub fn idx(&self, id: &str) -> Option<SegIdx> {
        self.to_idx.get(id).copied()
    }

    /// Like [`IndexMap::idx`] but returns an error for unknown ids.
    pub fn try_idx(&self, id: &str) -> GraphResult<SegIdx> {
        self.idx(id).ok_or_else(|| GraphError::UnknownSegment { id: id.into() })
    }

    /// Get the id for an index (panics if out of bounds).
    pub fn id(&self, idx: SegIdx) -> &SegmentId {
        &self.ids[idx.as_usize()]
    }

    /// All ids in index order.
    pub fn ids(&self) -> &[SegmentId] {
        &self.ids
    }
}
