//! Dimensioning of a single segment.

use hf_core::{PipeSegment, SegmentId};
use hf_graph::SegmentTree;
use hf_hydraulics::{
    design_flow, pressure_drop_with, select_dimension, selection_velocity_limit, velocity,
};

use crate::context::SizingContext;
use crate::load::LoadAggregator;
use crate::result::{SegmentError, SegmentResult};

/// Dimension one segment of `tree`.
///
/// Steps short-circuit in order: lookup, load, design flow, dimension
/// table, selection, then velocity and pressure drop over the segment's
/// own length.
pub fn dimension_segment(
    tree: &SegmentTree,
    segment_id: &str,
    ctx: &SizingContext<'_>,
) -> SegmentResult {
    let Some(idx) = tree.idx(segment_id) else {
        return SegmentResult::failed(
            SegmentId::from(segment_id),
            0.0,
            0.0,
            SegmentError::SegmentNotFound,
        );
    };
    let loads = LoadAggregator::new(tree, ctx.fixtures, ctx.norms);
    let total = loads.total_load(idx);
    size_with_load(tree.segment(idx), total, ctx)
}

/// Steps after load aggregation, shared with the batch driver.
pub(crate) fn size_with_load(
    segment: &PipeSegment,
    total_load_units: f64,
    ctx: &SizingContext<'_>,
) -> SegmentResult {
    let flow = design_flow(total_load_units, ctx.k);
    let media = segment.media_type;

    let dims = ctx.pipes.dimensions(media, &segment.pipe_type);
    if dims.is_empty() {
        return SegmentResult::failed(
            segment.id.clone(),
            total_load_units,
            flow,
            SegmentError::NoDimensionsAvailable {
                media,
                pipe_type: segment.pipe_type.clone(),
            },
        );
    }

    let Some(dimension) = select_dimension(media, flow, &dims) else {
        return SegmentResult::failed(
            segment.id.clone(),
            total_load_units,
            flow,
            SegmentError::NoDimensionMeetsVelocity {
                flow_lps: flow,
                limit_mps: selection_velocity_limit(media),
            },
        );
    };

    let v = velocity(flow, dimension.inner_diameter_mm);
    let dp = pressure_drop_with(
        ctx.friction,
        segment.length_m,
        dimension.inner_diameter_mm,
        v,
        media,
    );

    SegmentResult {
        segment_id: segment.id.clone(),
        total_load_units,
        design_flow_lps: flow,
        selected_dimension: Some(dimension),
        velocity_mps: Some(v),
        pressure_drop_kpa: Some(dp),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_catalog::{NormCatalog, NormFixture, PipeCatalog, PipeDimension, PipeTypeDef};
    use hf_core::{Fixture, MediaType};

    fn catalogs() -> (NormCatalog, PipeCatalog) {
        let norms = NormCatalog::new(vec![NormFixture {
            fixture_type: "wc".into(),
            label: "WC".into(),
            nominal_flow_lps: 0.1,
            load_units: 0.5,
            water_types: Vec::new(),
            nvm_kv_lps: 0.1,
            nvm_vv_lps: 0.0,
            nvm_spill_lps: 1.8,
        }]);
        let mut pipes = PipeCatalog::new();
        pipes.insert(
            MediaType::ColdWater,
            PipeTypeDef {
                pipe_type: "tiny".into(),
                label: "Tiny".into(),
                dimensions: vec![PipeDimension::new("6", 6.0), PipeDimension::new("4", 4.0)],
            },
        );
        (norms, pipes)
    }

    #[test]
    fn missing_segment() {
        let (norms, pipes) = catalogs();
        let tree = SegmentTree::from_segments(&[]);
        let ctx = SizingContext::new(&[], &norms, &pipes, 0.5);
        let r = dimension_segment(&tree, "nope", &ctx);
        assert_eq!(r.segment_id.as_str(), "nope");
        assert_eq!(r.error, Some(SegmentError::SegmentNotFound));
        assert_eq!(r.total_load_units, 0.0);
    }

    #[test]
    fn unknown_pipe_type_keeps_load() {
        let (norms, pipes) = catalogs();
        let tree =
            SegmentTree::from_segments(&[PipeSegment::new("S", 2.0, MediaType::HotWater, "tiny")]);
        let fixtures = [Fixture::new("f", "wc", 8).on_segment("S")];
        let ctx = SizingContext::new(&fixtures, &norms, &pipes, 0.5);
        let r = dimension_segment(&tree, "S", &ctx);
        assert!(matches!(r.error, Some(SegmentError::NoDimensionsAvailable { .. })));
        assert!((r.total_load_units - 4.0).abs() < 1e-12);
        assert!((r.design_flow_lps - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_much_flow_for_catalog() {
        let (norms, pipes) = catalogs();
        let tree =
            SegmentTree::from_segments(&[PipeSegment::new("S", 2.0, MediaType::ColdWater, "tiny")]);
        let fixtures = [Fixture::new("f", "wc", 8).on_segment("S")];
        let ctx = SizingContext::new(&fixtures, &norms, &pipes, 0.5);
        let r = dimension_segment(&tree, "S", &ctx);
        assert_eq!(
            r.error,
            Some(SegmentError::NoDimensionMeetsVelocity {
                flow_lps: 1.0,
                limit_mps: 2.0
            })
        );
        assert!(r.selected_dimension.is_none());
    }

    #[test]
    fn zero_load_gets_smallest_and_zero_drop() {
        let (norms, pipes) = catalogs();
        let tree =
            SegmentTree::from_segments(&[PipeSegment::new("S", 2.0, MediaType::ColdWater, "tiny")]);
        let ctx = SizingContext::new(&[], &norms, &pipes, 0.5);
        let r = dimension_segment(&tree, "S", &ctx);
        assert!(r.is_ok());
        assert_eq!(r.selected_dimension.unwrap().label, "4");
        assert_eq!(r.velocity_mps, Some(0.0));
        assert_eq!(r.pressure_drop_kpa, Some(0.0));
    }
}
