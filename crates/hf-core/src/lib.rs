//! hf-core: stable foundation for hvacflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (finiteness and positivity checks)
//! - ids (segment/fixture identifiers and compact indices)
//! - model (fixtures, pipe segments, media and water types)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod model;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::HfError;
pub use ids::*;
pub use model::*;
pub use numeric::*;
pub use units::*;
