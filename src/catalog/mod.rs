//! Word catalog
//!
//! The ordered, read-only list of playable entries. Catalog order is the
//! basis of share links, so it must stay stable for a deployed version.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_CATALOG, embedded};

use crate::core::WordEntry;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for catalogs that cannot be played
#[derive(Debug)]
pub enum CatalogError {
    Empty,
    DuplicateWord(String),
    InvalidEntry { index: usize, reason: String },
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Catalog contains no entries"),
            Self::DuplicateWord(word) => write!(f, "Catalog lists '{word}' more than once"),
            Self::InvalidEntry { index, reason } => {
                write!(f, "Catalog entry #{index} is invalid: {reason}")
            }
            Self::Parse(e) => write!(f, "Catalog is not valid JSON: {e}"),
            Self::Io(e) => write!(f, "Catalog could not be read: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Ordered, index-addressable collection of entries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WordEntry>,
    by_word: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, normalizing every entry
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty, an entry is invalid, or
    /// two entries share a word.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut normalized = Vec::with_capacity(entries.len());
        let mut by_word = FxHashMap::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry
                .normalized()
                .map_err(|e| CatalogError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            if by_word.insert(entry.word.clone(), index).is_some() {
                return Err(CatalogError::DuplicateWord(entry.word));
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
            by_word,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Entry at catalog position `index`
    #[inline]
    #[must_use]
    pub fn word_by_index(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    /// Catalog position of `entry`, matched by word
    #[must_use]
    pub fn word_index(&self, entry: &WordEntry) -> Option<usize> {
        self.index_of(&entry.word)
    }

    /// Catalog position of `word`, case-insensitive
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.by_word.get(&word.to_lowercase()).copied()
    }

    /// Entry for `name`, case-insensitive
    #[must_use]
    pub fn word_by_name(&self, name: &str) -> Option<&WordEntry> {
        self.index_of(name).and_then(|i| self.word_by_index(i))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small catalog shared by tests across the crate
    pub(crate) fn sample() -> Catalog {
        let entry = |word: &str, defs: &[&str], quality: Option<u8>| WordEntry {
            word: word.to_string(),
            definitions: defs.iter().map(|d| (*d).to_string()).collect(),
            example: Some(format!("that was so {word}")),
            quality,
        };
        Catalog::new(vec![
            entry("rizz", &["charisma", "the ability to charm", "short for charisma"], Some(3)),
            entry("cat", &["a cool person"], None),
            entry("brat", &["confident and messy", "a summer aesthetic"], Some(1)),
            entry("algorithm", &["the feed that decides what you see"], Some(2)),
            entry("no cap", &["no lie", "for real"], Some(3)),
        ])
        .unwrap()
    }

    #[test]
    fn catalog_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn catalog_rejects_duplicates_case_insensitively() {
        let a = WordEntry::new("sus", vec![]).unwrap();
        let mut b = a.clone();
        b.word = "SUS".into();
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::DuplicateWord(w)) if w == "sus"
        ));
    }

    #[test]
    fn catalog_rejects_invalid_entry() {
        let bad = WordEntry {
            word: "l8r".into(),
            definitions: vec![],
            example: None,
            quality: None,
        };
        let good = WordEntry::new("later", vec![]).unwrap();
        let err = Catalog::new(vec![good, bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { index: 1, .. }));
    }

    #[test]
    fn index_round_trip() {
        let catalog = sample();
        for (i, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(catalog.word_index(entry), Some(i));
            assert_eq!(catalog.word_by_index(i), Some(entry));
        }
        assert_eq!(catalog.word_by_index(catalog.len()), None);
    }

    #[test]
    fn lookup_by_name() {
        let catalog = sample();
        assert_eq!(catalog.word_by_name("RIZZ").map(|e| e.word.as_str()), Some("rizz"));
        assert_eq!(catalog.index_of("No Cap"), Some(4));
        assert!(catalog.word_by_name("skibidi").is_none());
    }
}
