//! Result data types.

use hf_sizing::{SegmentResult, UnknownFixture};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub project_name: String,
    /// RFC 3339.
    pub timestamp: String,
    pub engine_version: String,
    pub has_cycle: bool,
    pub segment_count: usize,
    pub failed_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_fixtures: Vec<UnknownFixtureRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownFixtureRecord {
    pub fixture_id: String,
    pub fixture_type: String,
}

impl From<&UnknownFixture> for UnknownFixtureRecord {
    fn from(u: &UnknownFixture) -> Self {
        Self {
            fixture_id: u.fixture_id.to_string(),
            fixture_type: u.fixture_type.clone(),
        }
    }
}

/// One line of `segments.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub segment_id: String,
    pub total_load_units: f64,
    pub design_flow_lps: f64,
    pub dimension: Option<String>,
    pub inner_diameter_mm: Option<f64>,
    pub velocity_mps: Option<f64>,
    pub pressure_drop_kpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SegmentRecord {
    pub fn is_ok(&self) -> bool {
        self.error_code.is_none()
    }
}

impl From<&SegmentResult> for SegmentRecord {
    fn from(r: &SegmentResult) -> Self {
        Self {
            segment_id: r.segment_id.to_string(),
            total_load_units: r.total_load_units,
            design_flow_lps: r.design_flow_lps,
            dimension: r.selected_dimension.as_ref().map(|d| d.label.clone()),
            inner_diameter_mm: r.selected_dimension.as_ref().map(|d| d.inner_diameter_mm),
            velocity_mps: r.velocity_mps,
            pressure_drop_kpa: r.pressure_drop_kpa,
            error_code: r.error.as_ref().map(|e| e.code().to_string()),
            error_message: r.error.as_ref().map(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_sizing::SegmentError;

    #[test]
    fn failed_result_keeps_code_and_message() {
        let result = SegmentResult {
            segment_id: "S9".into(),
            total_load_units: 0.0,
            design_flow_lps: 0.0,
            selected_dimension: None,
            velocity_mps: None,
            pressure_drop_kpa: None,
            error: Some(SegmentError::SegmentNotFound),
        };
        let record = SegmentRecord::from(&result);
        assert!(!record.is_ok());
        assert_eq!(record.error_code.as_deref(), Some("segment_not_found"));
        assert_eq!(record.error_message.as_deref(), Some("Segment not found"));

        let json = serde_json::to_string(&record).unwrap();
        let back: SegmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
