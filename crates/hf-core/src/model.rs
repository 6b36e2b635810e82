//! Fixture and pipe-segment records supplied by the persistence layer.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::HfError;
use crate::ids::{FixtureId, SegmentId};

/// What flows in a pipe segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MediaType {
    /// Kaldtvann.
    #[cfg_attr(feature = "serde", serde(rename = "KV", alias = "cold_water"))]
    ColdWater,
    /// Varmtvann.
    #[cfg_attr(feature = "serde", serde(rename = "VV", alias = "hot_water"))]
    HotWater,
    /// Avløp / spillvann.
    #[cfg_attr(feature = "serde", serde(rename = "AV", alias = "drainage"))]
    Drainage,
}

impl MediaType {
    pub const ALL: [MediaType; 3] =
        [MediaType::ColdWater, MediaType::HotWater, MediaType::Drainage];

    /// Short code used in persisted data and catalogs.
    pub fn code(self) -> &'static str {
        match self {
            MediaType::ColdWater => "KV",
            MediaType::HotWater => "VV",
            MediaType::Drainage => "AV",
        }
    }

    pub fn is_water(self) -> bool {
        matches!(self, MediaType::ColdWater | MediaType::HotWater)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MediaType {
    type Err = HfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KV" | "COLD_WATER" => Ok(MediaType::ColdWater),
            "VV" | "HOT_WATER" => Ok(MediaType::HotWater),
            "AV" | "DRAINAGE" => Ok(MediaType::Drainage),
            _ => Err(HfError::UnknownCode {
                what: "media type",
                code: s.to_string(),
            }),
        }
    }
}

/// Which supply a fixture draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaterType {
    #[cfg_attr(feature = "serde", serde(rename = "KV", alias = "cold"))]
    Cold,
    #[cfg_attr(feature = "serde", serde(rename = "VV", alias = "hot"))]
    Hot,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BOTH", alias = "both"))]
    Both,
}

impl WaterType {
    pub fn code(self) -> &'static str {
        match self {
            WaterType::Cold => "KV",
            WaterType::Hot => "VV",
            WaterType::Both => "BOTH",
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A sanitary appliance instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fixture {
    pub id: FixtureId,
    /// Key into the norm catalog.
    pub fixture_type: String,
    pub quantity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub water_type: WaterType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub floor: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zone: String,
    /// Segment this fixture discharges into. `None` or blank means unconnected.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub segment_id: Option<SegmentId>,
    /// Report-method flag: leave this fixture out of flow sums.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "core::ops::Not::not")
    )]
    pub excluded_from_calc: bool,
}

impl Fixture {
    pub fn new(id: impl Into<FixtureId>, fixture_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            fixture_type: fixture_type.into(),
            quantity,
            water_type: WaterType::Both,
            floor: 0,
            zone: String::new(),
            segment_id: None,
            excluded_from_calc: false,
        }
    }

    pub fn on_segment(mut self, segment_id: impl Into<SegmentId>) -> Self {
        self.segment_id = Some(segment_id.into());
        self
    }

    pub fn at(mut self, floor: i32, zone: impl Into<String>) -> Self {
        self.floor = floor;
        self.zone = zone.into();
        self
    }

    /// The connected segment, treating a blank reference as unconnected.
    pub fn segment(&self) -> Option<&SegmentId> {
        self.segment_id.as_ref().filter(|id| !id.is_blank())
    }
}

/// One run of pipe in the distribution tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeSegment {
    pub id: SegmentId,
    /// `None` marks a root segment feeding the building main.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub parent_id: Option<SegmentId>,
    #[cfg_attr(feature = "serde", serde(alias = "length"))]
    pub length_m: f64,
    pub media_type: MediaType,
    /// Key into the per-media dimension catalog.
    pub pipe_type: String,
}

impl PipeSegment {
    pub fn new(
        id: impl Into<SegmentId>,
        length_m: f64,
        media_type: MediaType,
        pipe_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            length_m,
            media_type,
            pipe_type: pipe_type.into(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<SegmentId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// The parent, treating a blank reference as a root.
    pub fn parent(&self) -> Option<&SegmentId> {
        self.parent_id.as_ref().filter(|id| !id.is_blank())
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
