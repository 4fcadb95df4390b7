//! Catalogue loading.
//!
//! The storefront ships with a bundled catalogue compiled into the binary.
//! `LECTIO_CATALOGUE_PATH` points at a JSON file to use instead.

use std::path::Path;

use lectio_core::{Catalogue, CatalogueError};
use thiserror::Error;

/// Bundled catalogue JSON.
const BUNDLED_CATALOGUE: &str = include_str!("../catalogue.json");

#[derive(Debug, Error)]
pub enum CatalogueLoadError {
    #[error("Failed to read catalogue file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid catalogue: {0}")]
    Invalid(#[from] CatalogueError),
}

/// The catalogue bundled with the binary.
///
/// # Errors
///
/// Returns an error if the bundled JSON fails validation.
pub fn bundled() -> Result<Catalogue, CatalogueLoadError> {
    Ok(Catalogue::from_json(BUNDLED_CATALOGUE)?)
}

/// Load the catalogue from `path`, or the bundled one when no path is set.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn load(path: Option<&Path>) -> Result<Catalogue, CatalogueLoadError> {
    let Some(path) = path else {
        let catalogue = bundled()?;
        tracing::info!(products = catalogue.len(), "Loaded bundled catalogue");
        return Ok(catalogue);
    };

    let json = std::fs::read_to_string(path).map_err(|source| CatalogueLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalogue = Catalogue::from_json(&json)?;
    tracing::info!(
        products = catalogue.len(),
        path = %path.display(),
        "Loaded catalogue file"
    );
    Ok(catalogue)
}
