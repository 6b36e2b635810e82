//! hf-hydraulics: flow, velocity and pressure-drop estimates for pipe sizing.
//!
//! Everything here is a pure function of its arguments:
//! - [`design_flow`] turns aggregated load units into a design flow
//! - [`velocity`] and [`pressure_drop`] evaluate one pipe size
//! - [`select_dimension`] picks the smallest size within the media's velocity limit
//!
//! Friction is pluggable through [`FrictionModel`]; the default
//! [`FixedFrictionTable::STANDARD`] uses one constant factor per media type.
//! That is a deliberate approximation of Darcy-Weisbach, not a Colebrook model.

pub mod common;
pub mod error;
pub mod flow;
pub mod friction;
pub mod pipe;
pub mod selection;

pub use error::{HydraulicsError, HydraulicsResult};
pub use flow::design_flow;
pub use friction::{FixedFrictionTable, FrictionModel};
pub use pipe::{cross_section_area_m2, pressure_drop, pressure_drop_with, velocity};
pub use selection::{
    DRAINAGE_SELECTION_CEILING_MPS, is_velocity_allowed, select_dimension,
    selection_velocity_limit,
};
