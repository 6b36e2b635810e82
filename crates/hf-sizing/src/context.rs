//! Inputs shared by every segment in one dimensioning pass.

use hf_catalog::{NormCatalog, PipeCatalog};
use hf_core::Fixture;
use hf_hydraulics::{FixedFrictionTable, FrictionModel};

static STANDARD_FRICTION: FixedFrictionTable = FixedFrictionTable::STANDARD;

/// Catalog lookups, fixtures and the simultaneity factor for one pass.
///
/// Borrowed rather than owned: callers keep their snapshot and may build a
/// fresh context per invocation.
#[derive(Clone, Copy)]
pub struct SizingContext<'a> {
    pub fixtures: &'a [Fixture],
    pub norms: &'a NormCatalog,
    pub pipes: &'a PipeCatalog,
    /// Simultaneity factor. Range checks belong to the project layer.
    pub k: f64,
    pub friction: &'a dyn FrictionModel,
}

impl<'a> SizingContext<'a> {
    /// Context using [`FixedFrictionTable::STANDARD`].
    pub fn new(
        fixtures: &'a [Fixture],
        norms: &'a NormCatalog,
        pipes: &'a PipeCatalog,
        k: f64,
    ) -> Self {
        Self {
            fixtures,
            norms,
            pipes,
            k,
            friction: &STANDARD_FRICTION,
        }
    }

    pub fn with_friction(mut self, friction: &'a dyn FrictionModel) -> Self {
        self.friction = friction;
        self
    }
}

impl std::fmt::Debug for SizingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizingContext")
            .field("fixtures", &self.fixtures.len())
            .field("norms", &self.norms.len())
            .field("k", &self.k)
            .field("friction", &self.friction.name())
            .finish()
    }
}
