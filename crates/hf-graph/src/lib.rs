//! hf-graph: segment forest layer for hvacflow.
//!
//! Provides:
//! - An immutable index over a segment snapshot (parents, children, roots)
//! - Incremental builder with duplicate detection
//! - Bottom-up topological ordering with cycle detection
//! - Structural validation for diagnostics
//!
//! # Example
//!
//! ```
//! use hf_core::{MediaType, PipeSegment};
//! use hf_graph::{SegmentTree, topo_sort};
//!
//! let tree = SegmentTree::from_segments(&[
//!     PipeSegment::new("main", 10.0, MediaType::ColdWater, "pex"),
//!     PipeSegment::new("branch", 4.0, MediaType::ColdWater, "pex").with_parent("main"),
//! ]);
//! let sorted = topo_sort(&tree);
//!
//! assert!(!sorted.has_cycle);
//! let ids: Vec<&str> = sorted.order.iter().map(|&i| tree.id(i).as_str()).collect();
//! assert_eq!(ids, ["branch", "main"]);
//! ```

pub mod builder;
pub mod error;
pub mod indexing;
pub mod topo;
pub mod tree;
pub mod validate;

// Re-exports for ergonomics
pub use builder::SegmentTreeBuilder;
pub use error::{GraphError, GraphResult};
pub use indexing::IndexMap;
pub use topo::{TopoOrder, sort_segments, topo_sort};
pub use tree::SegmentTree;
pub use validate::validate_tree;
