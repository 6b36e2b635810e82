//! Query helpers over the segment records of a run.

use hf_results::SegmentRecord;
use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub segment_count: usize,
    pub failed_count: usize,
    pub max_velocity_mps: Option<f64>,
    /// Sum over all dimensioned segments, not along one path.
    pub total_pressure_drop_kpa: f64,
    pub max_load_units: f64,
}

pub fn summarize_records(records: &[SegmentRecord]) -> RecordSummary {
    let max_velocity_mps = records
        .iter()
        .filter_map(|r| r.velocity_mps)
        .max_by(f64::total_cmp);

    RecordSummary {
        segment_count: records.len(),
        failed_count: records.iter().filter(|r| !r.is_ok()).count(),
        max_velocity_mps,
        total_pressure_drop_kpa: records.iter().filter_map(|r| r.pressure_drop_kpa).sum(),
        max_load_units: records
            .iter()
            .map(|r| r.total_load_units)
            .fold(0.0, f64::max),
    }
}

pub fn failed_records(records: &[SegmentRecord]) -> Vec<&SegmentRecord> {
    records.iter().filter(|r| !r.is_ok()).collect()
}

pub fn find_record<'a>(
    records: &'a [SegmentRecord],
    segment_id: &str,
) -> AppResult<&'a SegmentRecord> {
    records
        .iter()
        .find(|r| r.segment_id == segment_id)
        .ok_or_else(|| AppError::InvalidInput(format!("Segment not in run: {segment_id}")))
}
