//! Project schema definitions.

use hf_catalog::CurveKind;
use hf_core::{Fixture, PipeSegment};
use serde::{Deserialize, Serialize};

use crate::migrate::LATEST_VERSION;

pub const DEFAULT_SIMULTANEITY_FACTOR: f64 = 0.5;

fn default_building_type() -> String {
    "general".to_string()
}

fn default_k() -> f64 {
    DEFAULT_SIMULTANEITY_FACTOR
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default = "default_building_type")]
    pub building_type: String,
    /// k in `q = k·√(load units)`.
    #[serde(default = "default_k")]
    pub simultaneity_factor: f64,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub segments: Vec<PipeSegment>,
    #[serde(default)]
    pub report: ReportSettings,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            building_type: default_building_type(),
            simultaneity_factor: DEFAULT_SIMULTANEITY_FACTOR,
            fixtures: Vec::new(),
            segments: Vec::new(),
            report: ReportSettings::default(),
        }
    }
}

fn default_slope() -> String {
    "1:60".to_string()
}

fn default_pipe_type() -> String {
    "pex".to_string()
}

fn default_kv_velocity() -> f64 {
    2.0
}

fn default_vv_velocity() -> f64 {
    1.5
}

/// Report-method choices stored with the project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSettings {
    #[serde(default = "default_slope")]
    pub drainage_slope: String,
    #[serde(default)]
    pub drainage_curve: CurveKind,
    #[serde(default = "default_pipe_type")]
    pub kv_pipe_type: String,
    #[serde(default = "default_pipe_type")]
    pub vv_pipe_type: String,
    #[serde(default = "default_kv_velocity")]
    pub kv_velocity_mps: f64,
    #[serde(default = "default_vv_velocity")]
    pub vv_velocity_mps: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            drainage_slope: default_slope(),
            drainage_curve: CurveKind::default(),
            kv_pipe_type: default_pipe_type(),
            vv_pipe_type: default_pipe_type(),
            kv_velocity_mps: default_kv_velocity(),
            vv_velocity_mps: default_vv_velocity(),
        }
    }
}
