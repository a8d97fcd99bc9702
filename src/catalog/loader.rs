//! Catalog loading utilities
//!
//! Catalogs are JSON arrays of `{word, definitions, example?, quality?}`.

use super::{Catalog, CatalogError};
use crate::core::WordEntry;
use std::fs;
use std::path::Path;

/// Parse raw entries without validating them
///
/// Used by the catalog linter, which wants to report every problem rather
/// than stop at the first.
///
/// # Errors
/// Returns `CatalogError::Parse` on malformed JSON.
pub fn parse_entries(json: &str) -> Result<Vec<WordEntry>, CatalogError> {
    serde_json::from_str(json).map_err(CatalogError::Parse)
}

/// Build a catalog from a JSON string
///
/// # Errors
/// Returns `CatalogError` on malformed JSON or an unplayable catalog.
///
/// # Examples
/// ```
/// use urdle::catalog::loader::catalog_from_json;
///
/// let catalog = catalog_from_json(r#"[{"word":"yeet","definitions":["throw"]}]"#).unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn catalog_from_json(json: &str) -> Result<Catalog, CatalogError> {
    Catalog::new(parse_entries(json)?)
}

/// Read raw entries from a file
///
/// # Errors
/// Returns `CatalogError::Io` if the file cannot be read, or
/// `CatalogError::Parse` on malformed JSON.
pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, CatalogError> {
    let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
    parse_entries(&content)
}

/// Load a catalog from a file
///
/// # Errors
/// Returns `CatalogError` if the file cannot be read or holds an unplayable
/// catalog.
///
/// # Examples
/// ```no_run
/// use urdle::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.json").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let catalog = Catalog::new(read_entries(path)?)?;
    log::info!("loaded {} entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn json_with_optional_fields() {
        let json = r#"[
            {"word": "Bussin", "definitions": ["really good"], "quality": 3},
            {"word": "mid", "definitions": ["average"], "example": "that movie was mid"}
        ]"#;
        let catalog = catalog_from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].word, "bussin");
        assert_eq!(catalog.entries()[0].quality(), 3);
        assert_eq!(
            catalog.entries()[1].example.as_deref(),
            Some("that movie was mid")
        );
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            catalog_from_json("[{\"word\": }]"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(catalog_from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn parse_entries_keeps_invalid_words() {
        let entries = parse_entries(r#"[{"word":"2fast"},{"word":"ok"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].validate().is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"word":"slay","definitions":["do great"]}}]"#).unwrap();
        let catalog = load_from_file(file.path()).unwrap();
        assert_eq!(catalog.word_by_index(0).map(|e| e.word.as_str()), Some("slay"));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/definitely/not/here.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
