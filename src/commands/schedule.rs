//! Daily schedule listing
//!
//! Shows which word each upcoming day gets, for catalog curation.

use crate::catalog::Catalog;
use crate::selector::{WordSelector, day_index, encode_word_id};
use chrono::{Days, NaiveDate};

/// One scheduled day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub day: i64,
    pub index: usize,
    pub word: String,
    pub link_id: String,
}

/// Schedule for a run of days plus pool statistics
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub days: Vec<ScheduleDay>,
    pub pool_len: usize,
    pub catalog_len: usize,
    /// Catalog words that never appear in the listed days
    pub unscheduled: usize,
}

/// List the daily word for `count` days starting at `from`
///
/// # Errors
///
/// Returns an error if the range runs past the end of the calendar.
pub fn build_schedule(
    catalog: &Catalog,
    from: NaiveDate,
    count: usize,
) -> Result<ScheduleReport, String> {
    let selector = WordSelector::new(catalog);
    let mut days = Vec::with_capacity(count);
    let mut seen = vec![false; catalog.len()];

    for offset in 0..count as u64 {
        let date = from
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| format!("Date out of range {offset} days after {from}"))?;
        let index = selector.daily_index(date);
        seen[index] = true;
        days.push(ScheduleDay {
            date,
            day: day_index(date),
            index,
            word: selector.daily_word(date).word.clone(),
            link_id: encode_word_id(index),
        });
    }

    Ok(ScheduleReport {
        days,
        pool_len: selector.schedule().pool_len(),
        catalog_len: catalog.len(),
        unscheduled: seen.iter().filter(|&&s| !s).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    #[test]
    fn lists_consecutive_days() {
        let catalog = sample();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = build_schedule(&catalog, from, 3).unwrap();
        assert_eq!(report.days.len(), 3);
        assert_eq!(report.days[0].day, 0);
        assert_eq!(report.days[2].day, 2);
        assert_eq!(report.pool_len, 15);
        for day in &report.days {
            assert_eq!(catalog.word_by_index(day.index).unwrap().word, day.word);
        }
    }

    #[test]
    fn full_cycle_covers_catalog() {
        let catalog = sample();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = build_schedule(&catalog, from, 15).unwrap();
        assert_eq!(report.unscheduled, 0);
    }

    #[test]
    fn matches_selector() {
        let catalog = sample();
        let from = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let report = build_schedule(&catalog, from, 1).unwrap();
        assert_eq!(report.days[0].index, WordSelector::new(&catalog).daily_index(from));
    }

    #[test]
    fn empty_range() {
        let catalog = sample();
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = build_schedule(&catalog, from, 0).unwrap();
        assert!(report.days.is_empty());
        assert_eq!(report.unscheduled, catalog.len());
    }
}
