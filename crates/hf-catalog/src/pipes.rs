//! Pipe dimension tables grouped by media type and pipe type.

use std::collections::BTreeMap;

use hf_core::MediaType;
use serde::{Deserialize, Serialize};

/// A concrete pipe size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeDimension {
    /// Display label, e.g. "DN15" or "Ø22".
    pub label: String,
    pub inner_diameter_mm: f64,
}

impl PipeDimension {
    pub fn new(label: impl Into<String>, inner_diameter_mm: f64) -> Self {
        Self {
            label: label.into(),
            inner_diameter_mm,
        }
    }
}

/// One pipe product line and the sizes it comes in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeTypeDef {
    pub pipe_type: String,
    pub label: String,
    #[serde(default)]
    pub dimensions: Vec<PipeDimension>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipeCatalog {
    #[serde(default)]
    pub by_media_type: BTreeMap<MediaType, Vec<PipeTypeDef>>,
}

impl PipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pipe type under a media type (appends, keeps order).
    pub fn insert(&mut self, media: MediaType, def: PipeTypeDef) {
        self.by_media_type.entry(media).or_default().push(def);
    }

    pub fn pipe_types(&self, media: MediaType) -> &[PipeTypeDef] {
        self.by_media_type
            .get(&media)
            .map_or(&[][..], |types| types.as_slice())
    }

    pub fn pipe_type(&self, media: MediaType, pipe_type: &str) -> Option<&PipeTypeDef> {
        self.pipe_types(media)
            .iter()
            .find(|def| def.pipe_type == pipe_type)
    }

    /// Dimensions for (media, pipe type), smallest inner diameter first.
    ///
    /// Empty when either key is unknown.
    pub fn dimensions(&self, media: MediaType, pipe_type: &str) -> Vec<PipeDimension> {
        let mut dims = self
            .pipe_type(media, pipe_type)
            .map(|def| def.dimensions.clone())
            .unwrap_or_default();
        dims.sort_by(|a, b| a.inner_diameter_mm.total_cmp(&b.inner_diameter_mm));
        dims
    }
}
