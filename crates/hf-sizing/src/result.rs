//! Per-segment results and batch outcome.

use hf_catalog::PipeDimension;
use hf_core::{MediaType, SegmentId};
use thiserror::Error;

use crate::load::UnknownFixture;

/// Why a segment could not be dimensioned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error("Segment not found")]
    SegmentNotFound,

    #[error("No dimensions available for pipe type '{pipe_type}' ({media})")]
    NoDimensionsAvailable { media: MediaType, pipe_type: String },

    #[error("No dimension meets velocity requirements ({flow_lps:.3} l/s, limit {limit_mps} m/s)")]
    NoDimensionMeetsVelocity { flow_lps: f64, limit_mps: f64 },
}

impl SegmentError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SegmentError::SegmentNotFound => "segment_not_found",
            SegmentError::NoDimensionsAvailable { .. } => "no_dimensions_available",
            SegmentError::NoDimensionMeetsVelocity { .. } => "no_dimension_meets_velocity",
        }
    }
}

/// Outcome for one segment.
///
/// `total_load_units` and `design_flow_lps` are filled in even when a later
/// step fails, so partial diagnostics stay visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentResult {
    pub segment_id: SegmentId,
    pub total_load_units: f64,
    pub design_flow_lps: f64,
    pub selected_dimension: Option<PipeDimension>,
    pub velocity_mps: Option<f64>,
    pub pressure_drop_kpa: Option<f64>,
    pub error: Option<SegmentError>,
}

impl SegmentResult {
    pub(crate) fn failed(
        segment_id: SegmentId,
        total_load_units: f64,
        design_flow_lps: f64,
        error: SegmentError,
    ) -> Self {
        Self {
            segment_id,
            total_load_units,
            design_flow_lps,
            selected_dimension: None,
            velocity_mps: None,
            pressure_drop_kpa: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of [`crate::dimension_all`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Bottom-up order: every segment before its parent. Empty on a cycle.
    pub results: Vec<SegmentResult>,
    pub has_cycle: bool,
    /// Fixtures on known segments whose type is missing from the norms.
    pub unknown_fixtures: Vec<UnknownFixture>,
}

impl BatchOutcome {
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_ok()).count()
    }

    pub fn get(&self, segment_id: &str) -> Option<&SegmentResult> {
        self.results
            .iter()
            .find(|r| r.segment_id.as_str() == segment_id)
    }
}
