//! hf-report: the formula-based report method for sanitary installations.
//!
//! Sizes a whole building (or one floor or zone of it) without the segment
//! tree: sum the normal flows, apply the probable-flow formula, derive a
//! required inner diameter, and look the drainage load up on a curve and a
//! slope table.

pub mod drainage;
pub mod flow;
pub mod limits;
pub mod scope;
pub mod sizing;
pub mod summary;

pub use drainage::{SlopeOption, available_slopes, drainage_max_flow, select_drain_by_slope};
pub use flow::{largest_tap, probable_max_flow, sum_normal};
pub use limits::{VelocityAdvice, advisory_velocity_limits};
pub use scope::{FloorZoneGroups, ScopeFilter, group_by_floor_zone};
pub use sizing::{actual_velocity, required_inner_diameter_mm, select_by_inner_diameter};
pub use summary::{DrainageReport, ReportOptions, ReportSummary, WaterReport, evaluate_report};
