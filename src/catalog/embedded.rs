//! Embedded catalog
//!
//! The default word list compiled into the binary.

use super::{Catalog, CatalogError, loader::catalog_from_json};

/// Default catalog as shipped, JSON
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/words.json");

/// Parse the embedded catalog
///
/// # Errors
/// Returns `CatalogError` only if the shipped data file is broken.
pub fn embedded() -> Result<Catalog, CatalogError> {
    catalog_from_json(EMBEDDED_CATALOG)
}
