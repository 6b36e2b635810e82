//! Segment dimensioning for sanitary pipe trees.
//!
//! This crate aggregates fixture load units bottom-up through a segment
//! forest, converts load to design flow, picks the smallest catalog
//! dimension within the media's velocity limit and estimates pressure drop.
//! Failures are returned as data on each [`SegmentResult`]; a cyclic parent
//! graph is reported on the [`BatchOutcome`] instead of raising.

pub mod batch;
pub mod context;
pub mod load;
pub mod result;
pub mod segment;

pub use batch::dimension_all;
pub use context::SizingContext;
pub use load::{LoadAggregator, UnknownFixture};
pub use result::{BatchOutcome, SegmentError, SegmentResult};
pub use segment::dimension_segment;
