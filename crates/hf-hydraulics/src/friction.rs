//! Friction factor models.

use hf_core::MediaType;

use crate::common::check_finite;
use crate::error::{HydraulicsError, HydraulicsResult};

/// Supplies the Darcy friction factor used by the pressure-drop estimate.
///
/// Implementations must return a positive finite factor for every media type.
pub trait FrictionModel: Send + Sync {
    fn friction_factor(&self, media: MediaType) -> f64;

    fn name(&self) -> &str;
}

/// One constant friction factor per media type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFrictionTable {
    pub cold_water: f64,
    pub hot_water: f64,
    pub drainage: f64,
}

impl FixedFrictionTable {
    /// KV 0.025, VV 0.025, AV 0.020.
    pub const STANDARD: FixedFrictionTable = FixedFrictionTable {
        cold_water: 0.025,
        hot_water: 0.025,
        drainage: 0.020,
    };

    pub fn new(cold_water: f64, hot_water: f64, drainage: f64) -> HydraulicsResult<Self> {
        for (value, what) in [
            (cold_water, "cold water friction factor"),
            (hot_water, "hot water friction factor"),
            (drainage, "drainage friction factor"),
        ] {
            check_finite(value, what)?;
            if value <= 0.0 {
                return Err(HydraulicsError::InvalidArg { what });
            }
        }
        Ok(Self {
            cold_water,
            hot_water,
            drainage,
        })
    }
}

impl Default for FixedFrictionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FrictionModel for FixedFrictionTable {
    fn friction_factor(&self, media: MediaType) -> f64 {
        match media {
            MediaType::ColdWater => self.cold_water,
            MediaType::HotWater => self.hot_water,
            MediaType::Drainage => self.drainage,
        }
    }

    fn name(&self) -> &str {
        "fixed-table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_factors() {
        let t = FixedFrictionTable::STANDARD;
        assert_eq!(t.friction_factor(MediaType::ColdWater), 0.025);
        assert_eq!(t.friction_factor(MediaType::HotWater), 0.025);
        assert_eq!(t.friction_factor(MediaType::Drainage), 0.020);
        assert_eq!(FixedFrictionTable::default(), t);
    }

    #[test]
    fn new_rejects_bad_factors() {
        assert!(FixedFrictionTable::new(0.02, 0.02, 0.02).is_ok());
        assert!(matches!(
            FixedFrictionTable::new(0.0, 0.02, 0.02),
            Err(HydraulicsError::InvalidArg { .. })
        ));
        assert!(matches!(
            FixedFrictionTable::new(0.02, f64::NAN, 0.02),
            Err(HydraulicsError::NonPhysical { .. })
        ));
    }
}
