//! Word selection
//!
//! Picks the target for a session: today's scheduled word, a random word, or
//! a specific word from a share link.

mod daily;
mod link;

pub use daily::{DailySchedule, EPOCH, catalog_seed, date_key, day_index, seeded_shuffle};
pub use link::{Route, decode_index, decode_word_id, encode_word_id};

use crate::catalog::Catalog;
use crate::core::WordEntry;
use chrono::NaiveDate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// How the current target was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Scheduled word for a calendar day; progress is saved under that day
    Daily { date: NaiveDate },
    /// Random word or a word opened from a share link
    Free,
}

impl GameMode {
    #[inline]
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily { .. })
    }

    /// Day number for daily sessions
    #[must_use]
    pub fn day_index(self) -> Option<i64> {
        match self {
            Self::Daily { date } => Some(day_index(date)),
            Self::Free => None,
        }
    }
}

/// A chosen target: catalog position plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub mode: GameMode,
}

/// Chooses targets from a catalog
pub struct WordSelector<'a> {
    catalog: &'a Catalog,
    schedule: DailySchedule,
}

impl<'a> WordSelector<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            schedule: DailySchedule::new(catalog),
        }
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    #[must_use]
    pub const fn schedule(&self) -> &DailySchedule {
        &self.schedule
    }

    /// Catalog index of the word for `date`
    #[must_use]
    pub fn daily_index(&self, date: NaiveDate) -> usize {
        self.schedule.index_for_date(date)
    }

    /// Entry scheduled for `date`
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> &'a WordEntry {
        let entries = self.catalog.entries();
        &entries[self.daily_index(date)]
    }

    /// Daily selection for `date`
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> Selection {
        Selection {
            index: self.daily_index(date),
            mode: GameMode::Daily { date },
        }
    }

    /// Uniformly random catalog index whose word differs from `exclude`
    ///
    /// Falls back to the first entry when nothing else is available.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R, exclude: Option<&str>) -> usize {
        let candidates: Vec<usize> = self
            .catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| exclude != Some(entry.word.as_str()))
            .map(|(i, _)| i)
            .collect();
        candidates.choose(rng).copied().unwrap_or(0)
    }

    /// Random entry whose word differs from `exclude`
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R, exclude: Option<&str>) -> &'a WordEntry {
        let entries = self.catalog.entries();
        &entries[self.random_index(rng, exclude)]
    }

    /// Resolve a route to a target
    ///
    /// Invalid link ids fall back to the daily word for `today`.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        route: &Route,
        today: NaiveDate,
        rng: &mut R,
        exclude: Option<&str>,
    ) -> Selection {
        match route {
            Route::Daily => self.daily(today),
            Route::Random => Selection {
                index: self.random_index(rng, exclude),
                mode: GameMode::Free,
            },
            Route::Word(id) => match decode_word_id(id, self.catalog) {
                Some(index) => Selection {
                    index,
                    mode: GameMode::Free,
                },
                None => {
                    log::warn!("invalid word id '{id}', using the daily word");
                    self.daily(today)
                }
            },
        }
    }
}
