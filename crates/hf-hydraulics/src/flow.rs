//! Load units to design flow.

/// Design flow in L/s: `k * sqrt(load)`, or 0 when there is no load.
pub fn design_flow(total_load_units: f64, k: f64) -> f64 {
    if total_load_units <= 0.0 || total_load_units.is_nan() {
        return 0.0;
    }
    k * total_load_units.sqrt()
}
