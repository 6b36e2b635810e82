use hf_catalog::{Catalog, CurveKind};
use hf_core::Fixture;
use hf_report::{ReportOptions, ScopeFilter, evaluate_report};

fn apartment() -> Vec<Fixture> {
    let mut spare = Fixture::new("spare", "badekar", 1).at(1, "A");
    spare.excluded_from_calc = true;
    vec![
        Fixture::new("wc", "wc", 2).at(1, "A"),
        Fixture::new("basin", "servant", 2).at(1, "A"),
        Fixture::new("shower", "dusj", 1).at(2, "B"),
        spare,
    ]
}

#[test]
fn whole_building_report() {
    let catalog = Catalog::builtin();
    let summary = evaluate_report(&apartment(), &catalog, &ReportOptions::default());

    assert_eq!(summary.fixtures_in_scope, 3);

    let kv = &summary.cold_water;
    assert!((kv.sum_normal_lps - 0.6).abs() < 1e-12);
    assert!((kv.largest_tap_lps - 0.2).abs() < 1e-12);
    assert!((kv.probable_flow_lps - 0.313_517_440_445_725).abs() < 1e-9);
    assert!((kv.required_inner_diameter_mm - 14.127_682_1).abs() < 1e-6);
    assert_eq!(kv.selected_dimension.as_ref().unwrap().label, "Ø22");
    assert!(kv.actual_velocity_mps.unwrap() < kv.target_velocity_mps);

    let vv = &summary.hot_water;
    assert!((vv.sum_normal_lps - 0.4).abs() < 1e-12);
    assert!((vv.required_inner_diameter_mm - 15.389_765_7).abs() < 1e-6);
    assert_eq!(vv.selected_dimension.as_ref().unwrap().label, "Ø22");

    let av = &summary.drainage;
    assert!((av.sum_normal_lps - 4.8).abs() < 1e-12);
    assert!((av.q_max_lps - 1.853_333_333).abs() < 1e-6);
    assert_eq!(av.selected_drain.as_ref().unwrap().nominal_diameter_mm, 75.0);
}

#[test]
fn scoped_to_one_floor() {
    let catalog = Catalog::builtin();
    let options = ReportOptions {
        scope: ScopeFilter::all().with_floor(2),
        drainage_curve: CurveKind::B,
        ..ReportOptions::default()
    };
    let summary = evaluate_report(&apartment(), &catalog, &options);

    assert_eq!(summary.fixtures_in_scope, 1);
    // A single tap: Q == q1, so q == q1.
    assert!((summary.cold_water.probable_flow_lps - 0.2).abs() < 1e-12);
    assert_eq!(summary.drainage.curve, CurveKind::B);
    assert!((summary.drainage.q_max_lps - 0.54).abs() < 1e-12);
}

#[test]
fn empty_scope_selects_nothing() {
    let catalog = Catalog::builtin();
    let options = ReportOptions {
        scope: ScopeFilter::all().with_zone("Z"),
        ..ReportOptions::default()
    };
    let summary = evaluate_report(&apartment(), &catalog, &options);
    assert_eq!(summary.fixtures_in_scope, 0);
    assert_eq!(summary.cold_water.probable_flow_lps, 0.0);
    assert!(summary.cold_water.selected_dimension.is_none());
    assert!(summary.drainage.selected_drain.is_none());
}

#[test]
fn summary_serializes() {
    let catalog = Catalog::builtin();
    let summary = evaluate_report(&apartment(), &catalog, &ReportOptions::default());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["cold_water"]["media"], "KV");
    assert_eq!(json["drainage"]["curve"], "curveA");
}
