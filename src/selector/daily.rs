//! Daily word schedule
//!
//! Every entry is repeated according to its quality, the resulting pool is
//! shuffled with a linear-congruential generator seeded from the catalog's
//! own text, and the day number indexes into it. No external randomness is
//! involved, so every player sees the same word on the same calendar day.

use crate::catalog::Catalog;
use chrono::NaiveDate;

/// Day zero of the schedule
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

const LCG_MULTIPLIER: i32 = 1_103_515_245;
const LCG_INCREMENT: i32 = 12_345;

/// Whole days between the epoch and `date` (negative before the epoch)
#[inline]
#[must_use]
pub fn day_index(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

/// Storage key for a calendar day, `YYYY-MM-DD`
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Seed folded from every character of every catalog word
#[must_use]
pub fn catalog_seed(catalog: &Catalog) -> i32 {
    catalog
        .entries()
        .iter()
        .flat_map(|entry| entry.word.bytes())
        .fold(0i32, |seed, ch| {
            seed.wrapping_mul(31).wrapping_add(i32::from(ch))
        })
}

/// Fisher-Yates shuffle driven by a 32-bit LCG
pub fn seeded_shuffle<T>(items: &mut [T], mut seed: i32) {
    for i in (1..items.len()).rev() {
        seed = seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
        let j = ((seed as u32 >> 16) & 0x7fff) as usize % (i + 1);
        items.swap(i, j);
    }
}

/// Quality-weighted, shuffled pool of catalog indices
#[derive(Debug, Clone)]
pub struct DailySchedule {
    pool: Vec<usize>,
}

impl DailySchedule {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut pool: Vec<usize> = catalog
            .entries()
            .iter()
            .enumerate()
            .flat_map(|(i, entry)| std::iter::repeat_n(i, entry.daily_weight()))
            .collect();
        seeded_shuffle(&mut pool, catalog_seed(catalog));
        log::debug!("daily pool has {} slots", pool.len());
        Self { pool }
    }

    #[inline]
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Catalog index scheduled for day number `day`
    #[must_use]
    pub fn index_for_day(&self, day: i64) -> usize {
        let slot = day.rem_euclid(self.pool.len() as i64) as usize;
        self.pool[slot]
    }

    /// Catalog index scheduled for `date`
    #[must_use]
    pub fn index_for_date(&self, date: NaiveDate) -> usize {
        self.index_for_day(day_index(date))
    }

    /// How many pool slots each catalog index occupies
    #[must_use]
    pub fn slot_counts(&self, catalog_len: usize) -> Vec<usize> {
        let mut counts = vec![0; catalog_len];
        for &i in &self.pool {
            if let Some(count) = counts.get_mut(i) {
                *count += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_index_counts_from_epoch() {
        assert_eq!(day_index(date(2025, 1, 1)), 0);
        assert_eq!(day_index(date(2025, 1, 2)), 1);
        assert_eq!(day_index(date(2026, 1, 1)), 365);
        assert_eq!(day_index(date(2024, 12, 31)), -1);
    }

    #[test]
    fn date_key_format() {
        assert_eq!(date_key(date(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn pool_respects_quality_weights() {
        let catalog = sample();
        let schedule = DailySchedule::new(&catalog);
        // qualities: 3, default, 1, 2, 3 => 5 + 2 + 1 + 2 + 5
        assert_eq!(schedule.pool_len(), 15);
        assert_eq!(schedule.slot_counts(catalog.len()), vec![5, 2, 1, 2, 5]);
    }

    #[test]
    fn schedule_is_deterministic() {
        let catalog = sample();
        let a = DailySchedule::new(&catalog);
        let b = DailySchedule::new(&catalog);
        for day in -30..400 {
            assert_eq!(a.index_for_day(day), b.index_for_day(day));
        }
        let today = date(2026, 10, 18);
        assert_eq!(a.index_for_date(today), a.index_for_date(today));
    }

    #[test]
    fn schedule_wraps_around_pool() {
        let catalog = sample();
        let schedule = DailySchedule::new(&catalog);
        let len = schedule.pool_len() as i64;
        assert_eq!(schedule.index_for_day(3), schedule.index_for_day(3 + len));
        assert_eq!(schedule.index_for_day(-1), schedule.index_for_day(len - 1));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<usize> = (0..50).collect();
        seeded_shuffle(&mut items, 42);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn seed_depends_on_catalog_text() {
        let catalog = sample();
        let other = crate::catalog::loader::catalog_from_json(
            r#"[{"word":"rizz"},{"word":"cat"}]"#,
        )
        .unwrap();
        assert_ne!(catalog_seed(&catalog), catalog_seed(&other));
    }
}
