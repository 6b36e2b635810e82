//! Drainage curve lookup and slope-table drain selection.

use hf_catalog::{DrainDimension, DrainageCurve, DrainageData};
use serde::Serialize;

/// Maximum simultaneous drainage flow for a sum of normal drainage flows.
///
/// Linear interpolation between curve points, clamped to the first and last
/// point. 0 for a non-positive sum or an empty curve.
pub fn drainage_max_flow(sum_normal_lps: f64, curve: &DrainageCurve) -> f64 {
    let points = &curve.points;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if sum_normal_lps <= 0.0 {
        return 0.0;
    }
    if sum_normal_lps <= first.sum_normal_lps {
        return first.q_max_lps;
    }
    if sum_normal_lps >= last.sum_normal_lps {
        return last.q_max_lps;
    }

    points
        .windows(2)
        .find(|w| sum_normal_lps >= w[0].sum_normal_lps && sum_normal_lps <= w[1].sum_normal_lps)
        .map_or(last.q_max_lps, |w| {
            let (p1, p2) = (w[0], w[1]);
            let span = p2.sum_normal_lps - p1.sum_normal_lps;
            let ratio = (sum_normal_lps - p1.sum_normal_lps) / span;
            p1.q_max_lps + ratio * (p2.q_max_lps - p1.q_max_lps)
        })
}

/// Smallest horizontal drain at `slope_key` whose capacity covers `q_max_lps`.
///
/// Falls back to the largest listed drain when none is big enough. `None`
/// for an unknown slope, an empty table or a non-positive flow.
pub fn select_drain_by_slope(
    drainage: &DrainageData,
    slope_key: &str,
    q_max_lps: f64,
) -> Option<DrainDimension> {
    if q_max_lps <= 0.0 {
        return None;
    }
    let table = drainage.slope(slope_key)?;
    table
        .dimensions
        .iter()
        .find(|d| d.q_max_lps >= q_max_lps)
        .or_else(|| {
            tracing::debug!(slope = slope_key, q_max_lps, "no drain large enough, using largest");
            table.dimensions.last()
        })
        .cloned()
}

/// One selectable slope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlopeOption {
    pub key: String,
    pub label: String,
    pub description: String,
}

pub fn available_slopes(drainage: &DrainageData) -> Vec<SlopeOption> {
    drainage
        .horizontal_drain_by_slope
        .iter()
        .map(|(key, table)| SlopeOption {
            key: key.clone(),
            label: format!("Fall {key}"),
            description: table.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_catalog::{Catalog, CurveKind};

    #[test]
    fn curve_interpolation_and_clamping() {
        let catalog = Catalog::builtin();
        let curve = catalog.drainage.curve(CurveKind::A);
        assert_eq!(drainage_max_flow(0.0, curve), 0.0);
        assert_eq!(drainage_max_flow(0.2, curve), 0.5);
        assert_eq!(drainage_max_flow(2.0, curve), 1.2);
        assert!((drainage_max_flow(3.5, curve) - 1.55).abs() < 1e-12);
        assert_eq!(drainage_max_flow(1e6, curve), 12.0);
        assert_eq!(drainage_max_flow(3.0, &DrainageCurve::default()), 0.0);
    }

    #[test]
    fn drain_selection() {
        let catalog = Catalog::builtin();
        let d = select_drain_by_slope(&catalog.drainage, "1:60", 1.55).unwrap();
        assert_eq!(d.nominal_diameter_mm, 75.0);
        let d = select_drain_by_slope(&catalog.drainage, "1:60", 5.7).unwrap();
        assert_eq!(d.nominal_diameter_mm, 110.0);
        let d = select_drain_by_slope(&catalog.drainage, "1:60", 99.0).unwrap();
        assert_eq!(d.nominal_diameter_mm, 160.0);
        assert_eq!(select_drain_by_slope(&catalog.drainage, "1:7", 1.0), None);
        assert_eq!(select_drain_by_slope(&catalog.drainage, "1:60", 0.0), None);
    }

    #[test]
    fn slope_options() {
        let catalog = Catalog::builtin();
        let slopes = available_slopes(&catalog.drainage);
        let sixty = slopes.iter().find(|s| s.key == "1:60").unwrap();
        assert_eq!(sixty.label, "Fall 1:60");
        assert!(!sixty.description.is_empty());
        assert_eq!(slopes.len(), catalog.drainage.horizontal_drain_by_slope.len());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn curve_lookup_is_monotone(a in 0.0..300.0f64, b in 0.0..300.0f64) {
                let catalog = Catalog::builtin();
                let curve = catalog.drainage.curve(CurveKind::B);
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(drainage_max_flow(lo, curve) <= drainage_max_flow(hi, curve) + 1e-12);
            }
        }
    }
}
