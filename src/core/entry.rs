//! Catalog entry representation
//!
//! A `WordEntry` is one playable slang term: the word itself, its
//! definitions in unlock order, an optional usage example and a quality
//! weight used by the daily selector.

use super::positions::MAX_WORD_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality assumed when an entry does not carry one
pub const DEFAULT_QUALITY: u8 = 2;

/// A playable word with its hint material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

/// Error type for invalid entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    Empty,
    TooLong(usize),
    InvalidCharacters(String),
    EdgeSpace(String),
    InvalidQuality(u8),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} characters, got {len}")
            }
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' must contain only ASCII letters and spaces")
            }
            Self::EdgeSpace(word) => {
                write!(f, "Word '{word}' must not start or end with a space")
            }
            Self::InvalidQuality(q) => write!(f, "Quality must be 1, 2 or 3, got {q}"),
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create an entry with the default quality and no example
    ///
    /// # Errors
    /// Returns `EntryError` if the word is empty, too long, contains anything
    /// other than ASCII letters and inner spaces.
    ///
    /// # Examples
    /// ```
    /// use urdle::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Yeet", vec!["to throw".into()]).unwrap();
    /// assert_eq!(entry.word, "yeet");
    /// assert!(WordEntry::new("l33t", vec![]).is_err());
    /// ```
    pub fn new(word: impl Into<String>, definitions: Vec<String>) -> Result<Self, EntryError> {
        let entry = Self {
            word: word.into(),
            definitions,
            example: None,
            quality: None,
        };
        entry.normalized()
    }

    /// Lowercase the word and validate every field
    ///
    /// # Errors
    /// Returns `EntryError` when the word or the quality is out of bounds.
    pub fn normalized(mut self) -> Result<Self, EntryError> {
        self.word = self.word.to_lowercase();
        self.validate()?;
        Ok(self)
    }

    /// Check the entry without modifying it
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), EntryError> {
        let word = &self.word;
        if word.is_empty() {
            return Err(EntryError::Empty);
        }
        if !word.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
            return Err(EntryError::InvalidCharacters(word.clone()));
        }
        if word.len() > MAX_WORD_LEN {
            return Err(EntryError::TooLong(word.len()));
        }
        if word.starts_with(' ') || word.ends_with(' ') {
            return Err(EntryError::EdgeSpace(word.clone()));
        }
        if let Some(q) = self.quality
            && !(1..=3).contains(&q)
        {
            return Err(EntryError::InvalidQuality(q));
        }
        Ok(())
    }

    /// Quality weight, defaulting to 2
    #[inline]
    #[must_use]
    pub fn quality(&self) -> u8 {
        self.quality.unwrap_or(DEFAULT_QUALITY)
    }

    /// How many copies of this entry go into the daily pool
    #[inline]
    #[must_use]
    pub fn daily_weight(&self) -> usize {
        match self.quality() {
            3 => 5,
            2 => 2,
            _ => 1,
        }
    }

    /// Number of tiles in the grid row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
