//! Fixture scoping and floor/zone grouping.

use std::collections::BTreeMap;

use hf_core::Fixture;
use serde::{Deserialize, Serialize};

/// Restricts a report to one floor and/or one zone. `None` means all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl ScopeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// True if the fixture counts towards the report. Fixtures flagged
    /// `excluded_from_calc` never do.
    pub fn includes(&self, fixture: &Fixture) -> bool {
        !fixture.excluded_from_calc
            && self.floor.is_none_or(|floor| fixture.floor == floor)
            && self.zone.as_deref().is_none_or(|zone| fixture.zone == zone)
    }

    pub fn apply<'a>(&'a self, fixtures: &'a [Fixture]) -> impl Iterator<Item = &'a Fixture> + 'a {
        fixtures.iter().filter(move |f| self.includes(f))
    }
}

/// Fixtures grouped three ways, each group in input order.
#[derive(Debug, Clone, Default)]
pub struct FloorZoneGroups<'a> {
    pub by_floor: BTreeMap<i32, Vec<&'a Fixture>>,
    pub by_zone: BTreeMap<String, Vec<&'a Fixture>>,
    pub by_floor_zone: BTreeMap<(i32, String), Vec<&'a Fixture>>,
}

pub fn group_by_floor_zone(fixtures: &[Fixture]) -> FloorZoneGroups<'_> {
    let mut groups = FloorZoneGroups::default();
    for fixture in fixtures {
        groups.by_floor.entry(fixture.floor).or_default().push(fixture);
        groups
            .by_zone
            .entry(fixture.zone.clone())
            .or_default()
            .push(fixture);
        groups
            .by_floor_zone
            .entry((fixture.floor, fixture.zone.clone()))
            .or_default()
            .push(fixture);
    }
    groups
}
