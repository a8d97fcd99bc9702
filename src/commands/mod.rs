//! Command implementations

pub mod check;
pub mod schedule;
pub mod share;
pub mod simple;

pub use check::{CheckReport, Issue, IssueKind, Severity, check_entries, run_check};
pub use schedule::{ScheduleDay, ScheduleReport, build_schedule};
pub use share::share_saved_daily;
pub use simple::{enter_line, run_simple};
