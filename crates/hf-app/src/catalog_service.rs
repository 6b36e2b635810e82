//! Catalog selection.

use std::path::Path;

use hf_catalog::Catalog;

use crate::error::AppResult;

/// The catalog at `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            tracing::debug!(
                path = %path.display(),
                norms = catalog.norms.len(),
                "loaded catalog"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
