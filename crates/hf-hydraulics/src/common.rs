//! Common utilities for hydraulic calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use hf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })
}

/// True when every input is strictly positive (NaN counts as not positive).
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}
