//! Fixture norms: load units and normal flows per fixture type.

use std::collections::HashMap;

use hf_core::{Fixture, WaterType};
use serde::{Deserialize, Serialize};

/// Reference data for one fixture type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormFixture {
    pub fixture_type: String,
    pub label: String,
    /// Nominal tap flow (l/s).
    #[serde(default)]
    pub nominal_flow_lps: f64,
    /// Tappevannsenheter.
    pub load_units: f64,
    #[serde(default)]
    pub water_types: Vec<WaterType>,
    /// Normalvannmengde, cold water (l/s).
    #[serde(default)]
    pub nvm_kv_lps: f64,
    /// Normalvannmengde, hot water (l/s).
    #[serde(default)]
    pub nvm_vv_lps: f64,
    /// Normal drainage discharge (l/s).
    #[serde(default)]
    pub nvm_spill_lps: f64,
}

/// Which normal-flow column of a norm to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowKind {
    #[serde(rename = "KV")]
    Kv,
    #[serde(rename = "VV")]
    Vv,
    #[serde(rename = "SPILL")]
    Spill,
}

impl NormFixture {
    pub fn normal_flow_lps(&self, kind: FlowKind) -> f64 {
        match kind {
            FlowKind::Kv => self.nvm_kv_lps,
            FlowKind::Vv => self.nvm_vv_lps,
            FlowKind::Spill => self.nvm_spill_lps,
        }
    }
}

/// Load contributed by one fixture record (all of its units).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixtureLoad {
    pub load_units: f64,
    pub nominal_flow_lps: f64,
}

/// All fixture norms, keyed by fixture type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormCatalog {
    #[serde(default)]
    pub fixtures: Vec<NormFixture>,
}

impl NormCatalog {
    pub fn new(fixtures: Vec<NormFixture>) -> Self {
        Self { fixtures }
    }

    pub fn get(&self, fixture_type: &str) -> Option<&NormFixture> {
        self.fixtures.iter().find(|n| n.fixture_type == fixture_type)
    }

    /// Build a lookup map. Later duplicates do not replace earlier entries.
    pub fn index(&self) -> HashMap<&str, &NormFixture> {
        let mut map = HashMap::with_capacity(self.fixtures.len());
        for norm in &self.fixtures {
            map.entry(norm.fixture_type.as_str()).or_insert(norm);
        }
        map
    }

    /// quantity × norm values, or `None` if the fixture type is unknown.
    pub fn fixture_load(&self, fixture: &Fixture) -> Option<FixtureLoad> {
        self.get(&fixture.fixture_type)
            .map(|norm| load_for(norm, fixture.quantity))
    }

    /// Normal flow for a fixture type, 0 when the type is unknown.
    pub fn nvm(&self, fixture_type: &str, kind: FlowKind) -> f64 {
        self.get(fixture_type)
            .map_or(0.0, |norm| norm.normal_flow_lps(kind))
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

pub fn load_for(norm: &NormFixture, quantity: u32) -> FixtureLoad {
    let q = f64::from(quantity);
    FixtureLoad {
        load_units: q * norm.load_units,
        nominal_flow_lps: q * norm.nominal_flow_lps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wc() -> NormFixture {
        NormFixture {
            fixture_type: "wc".into(),
            label: "WC".into(),
            nominal_flow_lps: 0.1,
            load_units: 0.5,
            water_types: vec![WaterType::Cold],
            nvm_kv_lps: 0.1,
            nvm_vv_lps: 0.0,
            nvm_spill_lps: 1.8,
        }
    }

    #[test]
    fn fixture_load_scales_with_quantity() {
        let norms = NormCatalog::new(vec![wc()]);
        let load = norms.fixture_load(&Fixture::new("f1", "wc", 3)).unwrap();
        assert!((load.load_units - 1.5).abs() < 1e-12);
        assert!((load.nominal_flow_lps - 0.3).abs() < 1e-12);
    }

    #[test]
    fn unknown_type_has_no_load() {
        let norms = NormCatalog::new(vec![wc()]);
        assert!(norms.fixture_load(&Fixture::new("f1", "sauna", 1)).is_none());
        assert_eq!(norms.nvm("sauna", FlowKind::Kv), 0.0);
    }

    #[test]
    fn index_keeps_first_duplicate() {
        let mut second = wc();
        second.load_units = 9.0;
        let norms = NormCatalog::new(vec![wc(), second]);
        assert_eq!(norms.index()["wc"].load_units, 0.5);
    }

    #[test]
    fn nvm_columns() {
        let norm = wc();
        assert_eq!(norm.normal_flow_lps(FlowKind::Kv), 0.1);
        assert_eq!(norm.normal_flow_lps(FlowKind::Vv), 0.0);
        assert_eq!(norm.normal_flow_lps(FlowKind::Spill), 1.8);
    }
}
