//! hf-catalog: read-only reference data for sanitary dimensioning.
//!
//! Provides:
//! - Fixture norms (load units, nominal and report-method flows)
//! - Pipe dimension tables grouped by media type and pipe type
//! - Drainage curves and slope tables for the report method
//! - A built-in default data set and JSON/YAML loading
//!
//! # Example
//!
//! ```
//! use hf_catalog::Catalog;
//! use hf_core::MediaType;
//!
//! let catalog = Catalog::builtin();
//! let dims = catalog.pipes.dimensions(MediaType::ColdWater, "kobber");
//! assert!(!dims.is_empty());
//! assert!(dims.windows(2).all(|w| w[0].inner_diameter_mm <= w[1].inner_diameter_mm));
//! ```

pub mod builtin;
pub mod catalog;
pub mod drainage;
pub mod error;
pub mod norms;
pub mod pipes;

pub use catalog::Catalog;
pub use drainage::{CurveKind, CurvePoint, DrainDimension, DrainageCurve, DrainageData, SlopeTable};
pub use error::{CatalogError, CatalogResult};
pub use norms::{FixtureLoad, FlowKind, NormCatalog, NormFixture};
pub use pipes::{PipeCatalog, PipeDimension, PipeTypeDef};
