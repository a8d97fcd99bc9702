//! Time sources
//!
//! `Clock` answers "what day is it" for the daily schedule. `Ticker` drives
//! the per-second game timer from an event loop; it belongs to the session
//! slot and is reset whenever a new session starts.

use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};

/// Source of the current calendar day
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar day from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Recurring tick source for a polling event loop
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    /// One tick per second, starting from `now`
    #[must_use]
    pub fn every_second(now: Instant) -> Self {
        Self::new(Duration::from_secs(1), now)
    }

    /// How long the event loop may block before the next tick is due
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Number of ticks that fell due up to `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next {
            due += 1;
            self.next += self.interval;
        }
        due
    }

    /// Restart counting from `now`, dropping any pending ticks
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_day() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }

    #[test]
    fn ticker_counts_whole_intervals() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second(start);
        assert_eq!(ticker.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.poll(start + Duration::from_millis(3500)), 2);
        assert_eq!(ticker.poll(start + Duration::from_millis(3900)), 0);
    }

    #[test]
    fn ticker_timeout_shrinks() {
        let start = Instant::now();
        let ticker = Ticker::every_second(start);
        assert_eq!(ticker.timeout(start), Duration::from_secs(1));
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(ticker.timeout(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn ticker_reset_drops_pending() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second(start);
        let later = start + Duration::from_secs(10);
        ticker.reset(later);
        assert_eq!(ticker.poll(later + Duration::from_millis(500)), 0);
        assert_eq!(ticker.poll(later + Duration::from_secs(1)), 1);
    }
}
