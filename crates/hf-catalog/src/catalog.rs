//! The complete reference data set and its file formats.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drainage::{DrainageData, curve_is_monotonic};
use crate::error::{CatalogError, CatalogResult};
use crate::norms::NormCatalog;
use crate::pipes::PipeCatalog;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub norms: NormCatalog,
    #[serde(default)]
    pub pipes: PipeCatalog,
    #[serde(default)]
    pub drainage: DrainageData,
}

impl Catalog {
    /// The data set compiled into the binary.
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = std::fs::read_to_string(path)?;
        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(CatalogError::UnsupportedFormat { extension }),
        }
    }

    pub fn to_json_string(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let mut fixture_types = HashSet::new();
        for norm in &self.norms.fixtures {
            if !fixture_types.insert(norm.fixture_type.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    key: norm.fixture_type.clone(),
                    context: "norms".to_string(),
                });
            }
            let values = [
                norm.load_units,
                norm.nominal_flow_lps,
                norm.nvm_kv_lps,
                norm.nvm_vv_lps,
                norm.nvm_spill_lps,
            ];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(CatalogError::InvalidEntry {
                    entry: norm.fixture_type.clone(),
                    reason: "load units and flows must be finite and non-negative".to_string(),
                });
            }
        }

        for (media, types) in &self.pipes.by_media_type {
            let mut pipe_types = HashSet::new();
            for def in types {
                if !pipe_types.insert(def.pipe_type.as_str()) {
                    return Err(CatalogError::DuplicateKey {
                        key: def.pipe_type.clone(),
                        context: format!("pipes/{media}"),
                    });
                }
                for dim in &def.dimensions {
                    if !dim.inner_diameter_mm.is_finite() || dim.inner_diameter_mm <= 0.0 {
                        return Err(CatalogError::InvalidEntry {
                            entry: format!("{media}/{}/{}", def.pipe_type, dim.label),
                            reason: "inner diameter must be positive".to_string(),
                        });
                    }
                }
            }
        }

        for (name, curve) in [
            ("curveA", &self.drainage.curve_a),
            ("curveB", &self.drainage.curve_b),
        ] {
            if !curve_is_monotonic(curve) {
                return Err(CatalogError::InvalidEntry {
                    entry: name.to_string(),
                    reason: "curve points must increase strictly in sum_normal_lps".to_string(),
                });
            }
        }

        Ok(())
    }
}
