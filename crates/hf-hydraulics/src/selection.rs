//! Velocity-constrained pipe dimension selection.

use hf_catalog::PipeDimension;
use hf_core::MediaType;

use crate::pipe::velocity;

/// Selection ceiling for drainage (m/s). Looser advisory limits for
/// horizontal and vertical drains exist in the report method; selection
/// always uses this value.
pub const DRAINAGE_SELECTION_CEILING_MPS: f64 = 3.0;

/// Maximum velocity a selected dimension may produce (m/s).
pub fn selection_velocity_limit(media: MediaType) -> f64 {
    match media {
        MediaType::ColdWater => 2.0,
        MediaType::HotWater => 1.5,
        MediaType::Drainage => DRAINAGE_SELECTION_CEILING_MPS,
    }
}

pub fn is_velocity_allowed(media: MediaType, velocity_mps: f64) -> bool {
    velocity_mps <= selection_velocity_limit(media)
}

/// Smallest dimension whose velocity at `flow_lps` is within the limit.
///
/// `dims` may come in any order; ties in inner diameter keep their input
/// order. A non-positive flow returns the smallest dimension without a
/// velocity check.
pub fn select_dimension(
    media: MediaType,
    flow_lps: f64,
    dims: &[PipeDimension],
) -> Option<PipeDimension> {
    let mut sorted: Vec<&PipeDimension> = dims.iter().collect();
    sorted.sort_by(|a, b| a.inner_diameter_mm.total_cmp(&b.inner_diameter_mm));

    if flow_lps <= 0.0 {
        return sorted.first().map(|d| (*d).clone());
    }

    // Water media use their own limit, drainage the fixed ceiling.
    let chosen = sorted
        .iter()
        .find(|d| is_velocity_allowed(media, velocity(flow_lps, d.inner_diameter_mm)));

    if chosen.is_none() {
        tracing::debug!(
            %media,
            flow_lps,
            candidates = dims.len(),
            "no dimension within velocity limit"
        );
    }
    chosen.map(|d| (*d).clone())
}
