// hf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_second;
    VolumeRate::new::<liter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    use super::*;

    /// Water density used by the sizing estimate.
    pub const WATER_DENSITY_KGPM3: f64 = 1000.0;

    #[inline]
    pub fn water_density() -> Density {
        kgpm3(WATER_DENSITY_KGPM3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _d = mm(20.0);
        let _q = lps(0.5);
        let _v = mps(1.2);
        let _rho = constants::water_density();
    }

    #[test]
    fn scale_conversions() {
        use uom::si::length::meter;
        use uom::si::volume_rate::cubic_meter_per_second;

        assert!((mm(25.0).get::<meter>() - 0.025).abs() < 1e-15);
        assert!((lps(1.0).get::<cubic_meter_per_second>() - 1e-3).abs() < 1e-15);
    }
}
