//! Normal-flow sums and the probable maximum flow formula.

use hf_catalog::{FlowKind, NormCatalog};
use hf_core::Fixture;

use crate::scope::ScopeFilter;

/// Q: Σ normal flow × quantity over fixtures in scope (l/s).
///
/// A quantity of 0 counts as one fixture. Unknown types contribute 0.
pub fn sum_normal(
    fixtures: &[Fixture],
    norms: &NormCatalog,
    kind: FlowKind,
    scope: &ScopeFilter,
) -> f64 {
    let index = norms.index();
    scope
        .apply(fixtures)
        .map(|f| {
            let nvm = index
                .get(f.fixture_type.as_str())
                .map_or(0.0, |n| n.normal_flow_lps(kind));
            nvm * f64::from(f.quantity.max(1))
        })
        .sum()
}

/// q1: the largest single normal flow in scope (l/s), 0 if none.
pub fn largest_tap(
    fixtures: &[Fixture],
    norms: &NormCatalog,
    kind: FlowKind,
    scope: &ScopeFilter,
) -> f64 {
    let index = norms.index();
    scope
        .apply(fixtures)
        .filter_map(|f| index.get(f.fixture_type.as_str()))
        .map(|n| n.normal_flow_lps(kind))
        .fold(0.0, f64::max)
}

/// `q = q1 + 0.015(Q − q1) + 0.17·√(Q − q1)`.
///
/// 0 when either input is non-positive; `q1` when `Q < q1`.
pub fn probable_max_flow(sum_normal_lps: f64, largest_tap_lps: f64) -> f64 {
    if sum_normal_lps <= 0.0 || largest_tap_lps <= 0.0 {
        return 0.0;
    }
    if sum_normal_lps < largest_tap_lps {
        return largest_tap_lps;
    }
    let diff = sum_normal_lps - largest_tap_lps;
    largest_tap_lps + 0.015 * diff + 0.17 * diff.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_catalog::NormFixture;

    fn norms() -> NormCatalog {
        let norm = |t: &str, kv: f64, vv: f64, spill: f64| NormFixture {
            fixture_type: t.into(),
            label: t.into(),
            nominal_flow_lps: kv,
            load_units: 1.0,
            water_types: Vec::new(),
            nvm_kv_lps: kv,
            nvm_vv_lps: vv,
            nvm_spill_lps: spill,
        };
        NormCatalog::new(vec![
            norm("wc", 0.1, 0.0, 1.8),
            norm("dusj", 0.2, 0.2, 0.6),
        ])
    }

    #[test]
    fn sums_and_largest_tap() {
        let fixtures = vec![
            Fixture::new("a", "wc", 3),
            Fixture::new("b", "dusj", 0),
            Fixture::new("c", "unknown", 5),
        ];
        let scope = ScopeFilter::all();
        let q = sum_normal(&fixtures, &norms(), FlowKind::Kv, &scope);
        assert!((q - 0.5).abs() < 1e-12);
        let q = sum_normal(&fixtures, &norms(), FlowKind::Spill, &scope);
        assert!((q - 6.0).abs() < 1e-12);
        assert_eq!(largest_tap(&fixtures, &norms(), FlowKind::Vv, &scope), 0.2);
        assert_eq!(largest_tap(&[], &norms(), FlowKind::Vv, &scope), 0.0);
    }

    #[test]
    fn probable_flow_formula() {
        let q = probable_max_flow(1.0, 0.2);
        assert!((q - 0.364_052_622_469_985_7).abs() < 1e-12);
    }

    #[test]
    fn probable_flow_edges() {
        assert_eq!(probable_max_flow(0.0, 0.2), 0.0);
        assert_eq!(probable_max_flow(1.0, 0.0), 0.0);
        assert_eq!(probable_max_flow(0.1, 0.3), 0.3);
        assert_eq!(probable_max_flow(0.3, 0.3), 0.3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_below_largest_tap(q in 0.01..500.0f64, q1 in 0.01..2.0f64) {
                prop_assert!(probable_max_flow(q, q1) >= q1);
            }

            #[test]
            fn never_above_sum_for_large_sums(q1 in 0.05..1.0f64, extra in 5.0..500.0f64) {
                let q = q1 + extra;
                prop_assert!(probable_max_flow(q, q1) <= q);
            }
        }
    }
}
