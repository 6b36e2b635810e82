//! Diameter-driven pipe selection for the report method.

use std::f64::consts::PI;

use hf_catalog::PipeDimension;

/// Inner diameter (mm) that carries `q_lps` at exactly `v_mps`:
/// `Di = 1000·√(4·(q/1000)/(π·v))`. 0 for non-positive inputs.
pub fn required_inner_diameter_mm(q_lps: f64, v_mps: f64) -> f64 {
    if q_lps <= 0.0 || v_mps <= 0.0 {
        return 0.0;
    }
    let q_m3ps = q_lps / 1000.0;
    1000.0 * (4.0 * q_m3ps / (PI * v_mps)).sqrt()
}

/// Smallest dimension with an inner diameter of at least `required_mm`.
pub fn select_by_inner_diameter(dims: &[PipeDimension], required_mm: f64) -> Option<PipeDimension> {
    if required_mm <= 0.0 {
        return None;
    }
    dims.iter()
        .filter(|d| d.inner_diameter_mm >= required_mm)
        .min_by(|a, b| a.inner_diameter_mm.total_cmp(&b.inner_diameter_mm))
        .cloned()
}

/// Velocity in the chosen pipe, for verification against the target.
pub fn actual_velocity(q_lps: f64, inner_diameter_mm: f64) -> f64 {
    hf_hydraulics::velocity(q_lps, inner_diameter_mm)
}
