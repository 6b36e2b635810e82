//! Advisory velocity limits shown alongside report results.

use hf_core::MediaType;
use serde::Serialize;

/// Informational limits. Selection in the segment tree uses
/// `hf_hydraulics::selection_velocity_limit` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityAdvice {
    pub max_mps: f64,
    pub recommended_mps: f64,
    pub description: &'static str,
}

pub fn advisory_velocity_limits(media: MediaType) -> VelocityAdvice {
    match media {
        MediaType::ColdWater => VelocityAdvice {
            max_mps: 2.0,
            recommended_mps: 1.5,
            description: "Maks 2.0 m/s (fordelingsledning), anbefalt 1.5 m/s",
        },
        MediaType::HotWater => VelocityAdvice {
            max_mps: 1.5,
            recommended_mps: 1.5,
            description: "Maks 1.5 m/s",
        },
        MediaType::Drainage => VelocityAdvice {
            max_mps: 2.0,
            recommended_mps: 1.5,
            description: "Maks 2.0 m/s (liggende), 4.0 m/s (stående)",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_limits_per_media() {
        let av = advisory_velocity_limits(MediaType::Drainage);
        assert_eq!(av.max_mps, 2.0);
        assert!(av.description.contains("4.0"));
        assert_eq!(advisory_velocity_limits(MediaType::HotWater).max_mps, 1.5);
        assert_eq!(advisory_velocity_limits(MediaType::ColdWater).recommended_mps, 1.5);
    }
}
