//! Built-in reference data (Norwegian practice, representative values).

use hf_core::{MediaType, WaterType};

use crate::catalog::Catalog;
use crate::drainage::{CurvePoint, DrainDimension, DrainageCurve, DrainageData, SlopeTable};
use crate::norms::{NormCatalog, NormFixture};
use crate::pipes::{PipeCatalog, PipeDimension, PipeTypeDef};

struct NormRow {
    fixture_type: &'static str,
    label: &'static str,
    nominal_flow_lps: f64,
    load_units: f64,
    nvm_kv_lps: f64,
    nvm_vv_lps: f64,
    nvm_spill_lps: f64,
}

#[rustfmt::skip]
const NORMS: [NormRow; 10] = [
    NormRow { fixture_type: "wc", label: "WC", nominal_flow_lps: 0.1, load_units: 0.5, nvm_kv_lps: 0.1, nvm_vv_lps: 0.0, nvm_spill_lps: 1.8 },
    NormRow { fixture_type: "servant", label: "Servant", nominal_flow_lps: 0.2, load_units: 1.0, nvm_kv_lps: 0.1, nvm_vv_lps: 0.1, nvm_spill_lps: 0.3 },
    NormRow { fixture_type: "dusj", label: "Dusj", nominal_flow_lps: 0.3, load_units: 1.5, nvm_kv_lps: 0.2, nvm_vv_lps: 0.2, nvm_spill_lps: 0.6 },
    NormRow { fixture_type: "badekar", label: "Badekar", nominal_flow_lps: 0.4, load_units: 2.0, nvm_kv_lps: 0.3, nvm_vv_lps: 0.3, nvm_spill_lps: 0.9 },
    NormRow { fixture_type: "kjokkenkum", label: "Kjøkkenkum", nominal_flow_lps: 0.3, load_units: 1.5, nvm_kv_lps: 0.2, nvm_vv_lps: 0.2, nvm_spill_lps: 0.6 },
    NormRow { fixture_type: "oppvaskmaskin", label: "Oppvaskmaskin", nominal_flow_lps: 0.1, load_units: 0.5, nvm_kv_lps: 0.1, nvm_vv_lps: 0.0, nvm_spill_lps: 0.6 },
    NormRow { fixture_type: "vaskemaskin", label: "Vaskemaskin", nominal_flow_lps: 0.2, load_units: 1.0, nvm_kv_lps: 0.2, nvm_vv_lps: 0.0, nvm_spill_lps: 0.6 },
    NormRow { fixture_type: "urinal", label: "Urinal", nominal_flow_lps: 0.1, load_units: 0.3, nvm_kv_lps: 0.1, nvm_vv_lps: 0.0, nvm_spill_lps: 0.3 },
    NormRow { fixture_type: "utslagsvask", label: "Utslagsvask", nominal_flow_lps: 0.3, load_units: 1.5, nvm_kv_lps: 0.2, nvm_vv_lps: 0.2, nvm_spill_lps: 0.9 },
    NormRow { fixture_type: "tappekran", label: "Tappekran", nominal_flow_lps: 0.2, load_units: 1.0, nvm_kv_lps: 0.2, nvm_vv_lps: 0.0, nvm_spill_lps: 0.0 },
];

/// (media, pipe type, label, [(dimension label, inner diameter mm)])
type PipeRow = (
    MediaType,
    &'static str,
    &'static str,
    &'static [(&'static str, f64)],
);

const PIPES: [PipeRow; 6] = [
    (
        MediaType::ColdWater,
        "pex",
        "PEX Sanipex",
        &[("Ø15", 10.0), ("Ø18", 13.0), ("Ø22", 16.0), ("Ø28", 20.4), ("Ø32", 23.2)],
    ),
    (
        MediaType::ColdWater,
        "kobber",
        "Kobberrør",
        &[
            ("15x1", 13.0),
            ("18x1", 16.0),
            ("22x1", 20.0),
            ("28x1.2", 25.6),
            ("35x1.5", 32.0),
            ("42x1.5", 39.0),
            ("54x2", 50.0),
        ],
    ),
    (
        MediaType::HotWater,
        "pex",
        "PEX Sanipex",
        &[("Ø15", 10.0), ("Ø18", 13.0), ("Ø22", 16.0), ("Ø28", 20.4), ("Ø32", 23.2)],
    ),
    (
        MediaType::HotWater,
        "kobber",
        "Kobberrør",
        &[
            ("15x1", 13.0),
            ("18x1", 16.0),
            ("22x1", 20.0),
            ("28x1.2", 25.6),
            ("35x1.5", 32.0),
            ("42x1.5", 39.0),
            ("54x2", 50.0),
        ],
    ),
    (
        MediaType::Drainage,
        "plast",
        "Plastrør PP",
        &[("DN32", 28.4), ("DN50", 44.0), ("DN75", 69.0), ("DN110", 101.6), ("DN160", 147.6)],
    ),
    (
        MediaType::Drainage,
        "stopejern",
        "Støpejern SML",
        &[("DN50", 51.0), ("DN75", 76.0), ("DN100", 104.0), ("DN150", 155.0)],
    ),
];

const CURVE_A: [(f64, f64); 9] = [
    (0.5, 0.5),
    (1.0, 0.8),
    (2.0, 1.2),
    (5.0, 1.9),
    (10.0, 2.7),
    (20.0, 3.8),
    (50.0, 6.0),
    (100.0, 8.5),
    (200.0, 12.0),
];

const CURVE_B: [(f64, f64); 9] = [
    (0.5, 0.5),
    (1.0, 0.7),
    (2.0, 1.0),
    (5.0, 1.6),
    (10.0, 2.2),
    (20.0, 3.1),
    (50.0, 4.9),
    (100.0, 6.9),
    (200.0, 9.8),
];

/// (slope, description, [(nominal mm, inner mm, capacity l/s)])
type SlopeRow = (&'static str, &'static str, &'static [(f64, f64, f64)]);

const SLOPES: [SlopeRow; 4] = [
    ("1:50", "Fall 20 mm/m", &[(75.0, 69.0, 2.2), (110.0, 101.6, 6.2), (160.0, 147.6, 17.0)]),
    ("1:60", "Fall 16.7 mm/m", &[(75.0, 69.0, 2.0), (110.0, 101.6, 5.7), (160.0, 147.6, 15.5)]),
    ("1:100", "Fall 10 mm/m", &[(75.0, 69.0, 1.5), (110.0, 101.6, 4.4), (160.0, 147.6, 12.0)]),
    ("1:200", "Fall 5 mm/m", &[(110.0, 101.6, 3.1), (160.0, 147.6, 8.5), (200.0, 187.6, 15.0)]),
];

pub(crate) fn catalog() -> Catalog {
    let norms = NORMS
        .iter()
        .map(|row| NormFixture {
            fixture_type: row.fixture_type.to_string(),
            label: row.label.to_string(),
            nominal_flow_lps: row.nominal_flow_lps,
            load_units: row.load_units,
            water_types: water_types(row),
            nvm_kv_lps: row.nvm_kv_lps,
            nvm_vv_lps: row.nvm_vv_lps,
            nvm_spill_lps: row.nvm_spill_lps,
        })
        .collect();

    let mut pipes = PipeCatalog::new();
    for (media, pipe_type, label, dims) in PIPES {
        pipes.insert(
            media,
            PipeTypeDef {
                pipe_type: pipe_type.to_string(),
                label: label.to_string(),
                dimensions: dims
                    .iter()
                    .map(|&(l, d)| PipeDimension::new(l, d))
                    .collect(),
            },
        );
    }

    let drainage = DrainageData {
        curve_a: curve("Forretningsbygg (kurve A)", &CURVE_A),
        curve_b: curve("Boligbygg (kurve B)", &CURVE_B),
        horizontal_drain_by_slope: SLOPES
            .iter()
            .map(|&(key, description, dims)| {
                let table = SlopeTable {
                    description: description.to_string(),
                    dimensions: dims
                        .iter()
                        .map(|&(nominal, inner, q)| DrainDimension {
                            nominal_diameter_mm: nominal,
                            inner_diameter_mm: inner,
                            q_max_lps: q,
                        })
                        .collect(),
                };
                (key.to_string(), table)
            })
            .collect(),
    };

    Catalog {
        norms: NormCatalog::new(norms),
        pipes,
        drainage,
    }
}

fn water_types(row: &NormRow) -> Vec<WaterType> {
    match (row.nvm_kv_lps > 0.0, row.nvm_vv_lps > 0.0) {
        (true, true) => vec![WaterType::Cold, WaterType::Hot, WaterType::Both],
        (false, true) => vec![WaterType::Hot],
        _ => vec![WaterType::Cold],
    }
}

fn curve(label: &str, points: &[(f64, f64)]) -> DrainageCurve {
    DrainageCurve {
        label: label.to_string(),
        points: points
            .iter()
            .map(|&(x, y)| CurvePoint {
                sum_normal_lps: x,
                q_max_lps: y,
            })
            .collect(),
    }
}
