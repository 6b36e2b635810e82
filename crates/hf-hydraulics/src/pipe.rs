//! Velocity and Darcy-Weisbach pressure drop for a single pipe size.

use std::f64::consts::PI;

use hf_core::MediaType;
use hf_core::units::{Area, Pressure, Velocity, constants::water_density, lps, m, mm, mps};
use uom::si::area::square_meter;
use uom::si::pressure::kilopascal;
use uom::si::velocity::meter_per_second;

use crate::common::all_positive;
use crate::friction::{FixedFrictionTable, FrictionModel};

fn area(inner_diameter_mm: f64) -> Area {
    let radius = mm(inner_diameter_mm) / 2.0;
    radius * radius * PI
}

/// Internal cross-section `π(d/2)²` in m², 0 for non-positive diameters.
pub fn cross_section_area_m2(inner_diameter_mm: f64) -> f64 {
    if !all_positive(&[inner_diameter_mm]) {
        return 0.0;
    }
    area(inner_diameter_mm).get::<square_meter>()
}

/// Mean velocity in m/s for a flow in L/s through an inner diameter in mm.
///
/// Returns 0 when either input is non-positive.
pub fn velocity(flow_lps: f64, inner_diameter_mm: f64) -> f64 {
    if !all_positive(&[flow_lps, inner_diameter_mm]) {
        return 0.0;
    }
    let v: Velocity = lps(flow_lps) / area(inner_diameter_mm);
    v.get::<meter_per_second>()
}

/// Pressure drop in kPa using [`FixedFrictionTable::STANDARD`].
pub fn pressure_drop(
    length_m: f64,
    inner_diameter_mm: f64,
    velocity_mps: f64,
    media: MediaType,
) -> f64 {
    pressure_drop_with(
        &FixedFrictionTable::STANDARD,
        length_m,
        inner_diameter_mm,
        velocity_mps,
        media,
    )
}

/// `ΔP = f · (L/D) · ρv²/2` in kPa, with ρ = 1000 kg/m³.
///
/// Returns 0 when length, diameter or velocity is non-positive.
pub fn pressure_drop_with(
    friction: &dyn FrictionModel,
    length_m: f64,
    inner_diameter_mm: f64,
    velocity_mps: f64,
    media: MediaType,
) -> f64 {
    if !all_positive(&[length_m, inner_diameter_mm, velocity_mps]) {
        return 0.0;
    }
    let f = friction.friction_factor(media);
    let slenderness: f64 = (m(length_m) / mm(inner_diameter_mm)).value;
    let v = mps(velocity_mps);
    let dynamic: Pressure = water_density() * v * v / 2.0;
    (dynamic * f * slenderness).get::<kilopascal>()
}
