use hf_catalog::Catalog;
use hf_core::MediaType;
use hf_hydraulics::{design_flow, pressure_drop, select_dimension, velocity};

#[test]
fn two_wcs_on_copper_cold_water() {
    let catalog = Catalog::builtin();
    let dims = catalog.pipes.dimensions(MediaType::ColdWater, "kobber");
    assert!(!dims.is_empty());

    let q = design_flow(1.0, 0.5);
    assert!((q - 0.5).abs() < 1e-12);

    let dim = select_dimension(MediaType::ColdWater, q, &dims).unwrap();
    assert_eq!(dim.label, "22x1");

    let v = velocity(q, dim.inner_diameter_mm);
    assert!((v - 1.591_549_430_918_953).abs() < 1e-9);

    let dp = pressure_drop(5.0, dim.inner_diameter_mm, v, MediaType::ColdWater);
    assert!((dp - 7.915_717).abs() < 1e-5);
}

#[test]
fn every_builtin_table_accepts_zero_flow() {
    let catalog = Catalog::builtin();
    for media in MediaType::ALL {
        for def in catalog.pipes.pipe_types(media) {
            let dims = catalog.pipes.dimensions(media, &def.pipe_type);
            let chosen = select_dimension(media, 0.0, &dims).unwrap();
            assert_eq!(chosen, dims[0], "{media} {}", def.pipe_type);
        }
    }
}
