//! Load-unit aggregation over the segment forest.

use std::collections::HashSet;

use hf_catalog::NormCatalog;
use hf_catalog::norms::load_for;
use hf_core::{Fixture, FixtureId, SegIdx};
use hf_graph::SegmentTree;

/// A connected fixture whose type is not in the norm catalog.
///
/// Such fixtures contribute zero load; they are reported, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFixture {
    pub fixture_id: FixtureId,
    pub fixture_type: String,
}

/// Per-segment own load, grouped once from the fixture list.
#[derive(Debug, Clone)]
pub struct LoadAggregator<'t> {
    tree: &'t SegmentTree,
    own: Vec<f64>,
    unknown: Vec<UnknownFixture>,
}

impl<'t> LoadAggregator<'t> {
    pub fn new(tree: &'t SegmentTree, fixtures: &[Fixture], norms: &NormCatalog) -> Self {
        let norms_by_type = norms.index();
        let mut own = vec![0.0; tree.len()];
        let mut unknown = Vec::new();

        for fixture in fixtures {
            let Some(idx) = fixture.segment().and_then(|s| tree.idx(s.as_str())) else {
                continue;
            };
            match norms_by_type.get(fixture.fixture_type.as_str()) {
                Some(norm) => own[idx.as_usize()] += load_for(norm, fixture.quantity).load_units,
                None => {
                    tracing::warn!(
                        fixture = %fixture.id,
                        fixture_type = %fixture.fixture_type,
                        "unknown fixture type contributes no load"
                    );
                    unknown.push(UnknownFixture {
                        fixture_id: fixture.id.clone(),
                        fixture_type: fixture.fixture_type.clone(),
                    });
                }
            }
        }

        Self { tree, own, unknown }
    }

    /// Load units of fixtures connected directly to the segment.
    pub fn own_load(&self, idx: SegIdx) -> f64 {
        self.own.get(idx.as_usize()).copied().unwrap_or(0.0)
    }

    /// Own load plus every descendant's, walking the subtree.
    ///
    /// Each segment is counted once, so a cyclic snapshot still terminates.
    pub fn total_load(&self, idx: SegIdx) -> f64 {
        let mut seen = HashSet::new();
        let mut stack = vec![idx];
        let mut total = 0.0;
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            total += self.own_load(current);
            stack.extend_from_slice(self.tree.children(current));
        }
        total
    }

    /// Totals for every segment, resolved in one pass over a bottom-up order.
    ///
    /// `order` must list each child before its parent (see
    /// [`hf_graph::topo_sort`]); the result is indexed by `SegIdx`.
    pub fn bottom_up_totals(&self, order: &[SegIdx]) -> Vec<f64> {
        let mut totals = self.own.clone();
        for &idx in order {
            let from_children: f64 = self
                .tree
                .children(idx)
                .iter()
                .map(|child| totals[child.as_usize()])
                .sum();
            totals[idx.as_usize()] += from_children;
        }
        totals
    }

    pub fn unknown_fixtures(&self) -> &[UnknownFixture] {
        &self.unknown
    }

    pub fn into_unknown_fixtures(self) -> Vec<UnknownFixture> {
        self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_catalog::NormFixture;
    use hf_core::{MediaType, PipeSegment};

    fn norms() -> NormCatalog {
        let norm = |t: &str, lu: f64| NormFixture {
            fixture_type: t.into(),
            label: t.into(),
            nominal_flow_lps: 0.1,
            load_units: lu,
            water_types: Vec::new(),
            nvm_kv_lps: 0.0,
            nvm_vv_lps: 0.0,
            nvm_spill_lps: 0.0,
        };
        NormCatalog::new(vec![norm("wc", 0.5), norm("dusj", 2.0)])
    }

    fn seg(id: &str, parent: Option<&str>) -> PipeSegment {
        let s = PipeSegment::new(id, 1.0, MediaType::ColdWater, "kobber");
        match parent {
            Some(p) => s.with_parent(p),
            None => s,
        }
    }

    #[test]
    fn own_load_and_unknown_types() {
        let tree = SegmentTree::from_segments(&[seg("S1", None)]);
        let fixtures = vec![
            Fixture::new("f1", "wc", 2).on_segment("S1"),
            Fixture::new("f2", "dusj", 1).on_segment("S1"),
            Fixture::new("f3", "sauna", 4).on_segment("S1"),
            Fixture::new("f4", "wc", 9),
            Fixture::new("f5", "wc", 9).on_segment(""),
            Fixture::new("f6", "wc", 9).on_segment("ghost"),
        ];
        let agg = LoadAggregator::new(&tree, &fixtures, &norms());
        let s1 = tree.idx("S1").unwrap();
        assert!((agg.own_load(s1) - 3.0).abs() < 1e-12);
        assert_eq!(
            agg.unknown_fixtures(),
            &[UnknownFixture {
                fixture_id: "f3".into(),
                fixture_type: "sauna".into()
            }]
        );
    }

    #[test]
    fn cached_totals_match_subtree_walk() {
        let tree = SegmentTree::from_segments(&[
            seg("main", None),
            seg("a", Some("main")),
            seg("b", Some("main")),
            seg("a1", Some("a")),
        ]);
        let fixtures = vec![
            Fixture::new("f1", "wc", 1).on_segment("a1"),
            Fixture::new("f2", "dusj", 1).on_segment("a"),
            Fixture::new("f3", "wc", 4).on_segment("b"),
            Fixture::new("f4", "dusj", 1).on_segment("main"),
        ];
        let agg = LoadAggregator::new(&tree, &fixtures, &norms());
        let order = hf_graph::topo_sort(&tree).order;
        let totals = agg.bottom_up_totals(&order);

        for idx in tree.indices() {
            assert!((totals[idx.as_usize()] - agg.total_load(idx)).abs() < 1e-12);
        }
        let main = tree.idx("main").unwrap();
        assert!((totals[main.as_usize()] - 6.5).abs() < 1e-12);
    }

    #[test]
    fn subtree_walk_terminates_on_cycle() {
        let tree = SegmentTree::from_segments(&[seg("A", Some("B")), seg("B", Some("A"))]);
        let fixtures = vec![
            Fixture::new("f1", "wc", 2).on_segment("A"),
            Fixture::new("f2", "dusj", 1).on_segment("B"),
        ];
        let agg = LoadAggregator::new(&tree, &fixtures, &norms());
        let a = tree.idx("A").unwrap();
        assert!((agg.total_load(a) - 3.0).abs() < 1e-12);
    }
}
