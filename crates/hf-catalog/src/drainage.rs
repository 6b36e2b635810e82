//! Drainage curves and horizontal-drain slope tables (report method data).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Sum of normal drainage flows (l/s).
    pub sum_normal_lps: f64,
    /// Maximum simultaneous drainage flow (l/s).
    pub q_max_lps: f64,
}

/// Piecewise-linear curve, points ordered by `sum_normal_lps`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrainageCurve {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub points: Vec<CurvePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainDimension {
    pub nominal_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    /// Capacity at this slope (l/s).
    pub q_max_lps: f64,
}

/// Capacities of horizontal drains laid at one slope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlopeTable {
    #[serde(default)]
    pub description: String,
    /// Ordered smallest first.
    #[serde(default)]
    pub dimensions: Vec<DrainDimension>,
}

/// Which drainage curve a building uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Business buildings.
    #[default]
    #[serde(rename = "curveA", alias = "a")]
    A,
    /// Residential buildings.
    #[serde(rename = "curveB", alias = "b")]
    B,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrainageData {
    #[serde(default)]
    pub curve_a: DrainageCurve,
    #[serde(default)]
    pub curve_b: DrainageCurve,
    /// Keyed by slope ratio, e.g. "1:60".
    #[serde(default)]
    pub horizontal_drain_by_slope: BTreeMap<String, SlopeTable>,
}

impl DrainageData {
    pub fn curve(&self, kind: CurveKind) -> &DrainageCurve {
        match kind {
            CurveKind::A => &self.curve_a,
            CurveKind::B => &self.curve_b,
        }
    }

    pub fn slope(&self, key: &str) -> Option<&SlopeTable> {
        self.horizontal_drain_by_slope.get(key)
    }
}

/// Points must be finite and strictly increasing in `sum_normal_lps`.
pub(crate) fn curve_is_monotonic(curve: &DrainageCurve) -> bool {
    curve
        .points
        .iter()
        .all(|p| p.sum_normal_lps.is_finite() && p.q_max_lps.is_finite())
        && curve
            .points
            .windows(2)
            .all(|w| w[0].sum_normal_lps < w[1].sum_normal_lps)
}
