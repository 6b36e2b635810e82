//! One-call evaluation of the report method for a set of fixtures.

use hf_catalog::{Catalog, CurveKind, DrainDimension, FlowKind, PipeDimension};
use hf_core::{Fixture, MediaType};
use serde::{Deserialize, Serialize};

use crate::drainage::{drainage_max_flow, select_drain_by_slope};
use crate::flow::{largest_tap, probable_max_flow, sum_normal};
use crate::limits::{VelocityAdvice, advisory_velocity_limits};
use crate::scope::ScopeFilter;
use crate::sizing::{actual_velocity, required_inner_diameter_mm, select_by_inner_diameter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    #[serde(default)]
    pub scope: ScopeFilter,
    pub kv_pipe_type: String,
    pub vv_pipe_type: String,
    /// Target velocity used to derive the required diameter (m/s).
    pub kv_velocity_mps: f64,
    pub vv_velocity_mps: f64,
    pub drainage_slope: String,
    pub drainage_curve: CurveKind,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            scope: ScopeFilter::all(),
            kv_pipe_type: "pex".to_string(),
            vv_pipe_type: "pex".to_string(),
            kv_velocity_mps: 2.0,
            vv_velocity_mps: 1.5,
            drainage_slope: "1:60".to_string(),
            drainage_curve: CurveKind::A,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterReport {
    pub media: MediaType,
    /// Q
    pub sum_normal_lps: f64,
    /// q1
    pub largest_tap_lps: f64,
    /// q
    pub probable_flow_lps: f64,
    pub target_velocity_mps: f64,
    pub required_inner_diameter_mm: f64,
    pub selected_dimension: Option<PipeDimension>,
    pub actual_velocity_mps: Option<f64>,
    pub advice: VelocityAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrainageReport {
    pub sum_normal_lps: f64,
    pub curve: CurveKind,
    pub q_max_lps: f64,
    pub slope: String,
    pub selected_drain: Option<DrainDimension>,
    pub advice: VelocityAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub scope: ScopeFilter,
    pub fixtures_in_scope: usize,
    pub cold_water: WaterReport,
    pub hot_water: WaterReport,
    pub drainage: DrainageReport,
}

fn water_report(
    fixtures: &[Fixture],
    catalog: &Catalog,
    scope: &ScopeFilter,
    media: MediaType,
    pipe_type: &str,
    target_velocity_mps: f64,
) -> WaterReport {
    let kind = match media {
        MediaType::HotWater => FlowKind::Vv,
        _ => FlowKind::Kv,
    };
    let q_sum = sum_normal(fixtures, &catalog.norms, kind, scope);
    let q1 = largest_tap(fixtures, &catalog.norms, kind, scope);
    let q = probable_max_flow(q_sum, q1);
    let required = required_inner_diameter_mm(q, target_velocity_mps);
    let dims = catalog.pipes.dimensions(media, pipe_type);
    let selected = select_by_inner_diameter(&dims, required);
    let actual = selected
        .as_ref()
        .map(|d| actual_velocity(q, d.inner_diameter_mm));

    WaterReport {
        media,
        sum_normal_lps: q_sum,
        largest_tap_lps: q1,
        probable_flow_lps: q,
        target_velocity_mps,
        required_inner_diameter_mm: required,
        selected_dimension: selected,
        actual_velocity_mps: actual,
        advice: advisory_velocity_limits(media),
    }
}

/// Cold water, hot water and drainage results for the fixtures in scope.
pub fn evaluate_report(
    fixtures: &[Fixture],
    catalog: &Catalog,
    options: &ReportOptions,
) -> ReportSummary {
    let scope = &options.scope;
    let cold_water = water_report(
        fixtures,
        catalog,
        scope,
        MediaType::ColdWater,
        &options.kv_pipe_type,
        options.kv_velocity_mps,
    );
    let hot_water = water_report(
        fixtures,
        catalog,
        scope,
        MediaType::HotWater,
        &options.vv_pipe_type,
        options.vv_velocity_mps,
    );

    let spill_sum = sum_normal(fixtures, &catalog.norms, FlowKind::Spill, scope);
    let curve = catalog.drainage.curve(options.drainage_curve);
    let q_max = drainage_max_flow(spill_sum, curve);
    let drainage = DrainageReport {
        sum_normal_lps: spill_sum,
        curve: options.drainage_curve,
        q_max_lps: q_max,
        slope: options.drainage_slope.clone(),
        selected_drain: select_drain_by_slope(&catalog.drainage, &options.drainage_slope, q_max),
        advice: advisory_velocity_limits(MediaType::Drainage),
    };

    let fixtures_in_scope = scope.apply(fixtures).count();
    tracing::debug!(fixtures_in_scope, q_kv = cold_water.probable_flow_lps, "report evaluated");

    ReportSummary {
        scope: scope.clone(),
        fixtures_in_scope,
        cold_water,
        hot_water,
        drainage,
    }
}
