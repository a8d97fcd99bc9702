//! Catalog lint
//!
//! Checks every entry of a catalog file and reports all problems at once,
//! instead of stopping at the first one like catalog loading does.

use crate::core::WordEntry;
use crate::game::DEFINITION_SLOTS;
use crate::selector::{decode_index, encode_word_id};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// How bad an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Playable, but the game will be weaker for it
    Warning,
    /// The catalog will not load
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Invalid(String),
    Duplicate { first: usize },
    NoDefinitions,
    FewDefinitions(usize),
    NoExample,
    LinkMismatch,
}

impl IssueKind {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Invalid(_) | Self::Duplicate { .. } | Self::LinkMismatch => Severity::Error,
            Self::NoDefinitions | Self::FewDefinitions(_) | Self::NoExample => Severity::Warning,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(reason) => write!(f, "{reason}"),
            Self::Duplicate { first } => write!(f, "duplicate of entry #{first}"),
            Self::NoDefinitions => write!(f, "no definitions, the hint panel stays empty"),
            Self::FewDefinitions(n) => {
                write!(f, "only {n} of {DEFINITION_SLOTS} definition hints")
            }
            Self::NoExample => write!(f, "no usage example"),
            Self::LinkMismatch => write!(f, "share link does not decode back to this entry"),
        }
    }
}

/// One problem with one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub word: String,
    pub kind: IssueKind,
}

/// Everything found in a catalog
#[derive(Debug)]
pub struct CheckReport {
    pub total: usize,
    pub issues: Vec<Issue>,
    pub duration: Duration,
}

impl CheckReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.kind.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.kind.severity() == Severity::Warning)
    }

    /// True when the catalog would load
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.total > 0 && self.errors().next().is_none()
    }
}

fn entry_issues(index: usize, entry: &WordEntry, total: usize) -> Vec<Issue> {
    let issue = |kind| Issue {
        index,
        word: entry.word.clone(),
        kind,
    };

    let entry = match entry.clone().normalized() {
        Ok(entry) => entry,
        Err(e) => return vec![issue(IssueKind::Invalid(e.to_string()))],
    };

    let mut issues = Vec::new();
    match entry.definitions.len() {
        0 => issues.push(issue(IssueKind::NoDefinitions)),
        n if n < DEFINITION_SLOTS => issues.push(issue(IssueKind::FewDefinitions(n))),
        _ => {}
    }
    if entry.example.is_none() {
        issues.push(issue(IssueKind::NoExample));
    }
    if decode_index(&encode_word_id(index), total) != Some(index) {
        issues.push(issue(IssueKind::LinkMismatch));
    }
    issues
}

/// Lint a list of raw entries
///
/// Entries are checked in parallel; duplicates are found afterwards.
#[must_use]
pub fn check_entries(entries: &[WordEntry], pb: &ProgressBar) -> CheckReport {
    let start = Instant::now();
    let total = entries.len();

    let mut issues: Vec<Issue> = entries
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, entry)| {
            let found = entry_issues(index, entry, total);
            pb.inc(1);
            found
        })
        .collect();

    let mut first_seen: FxHashMap<String, usize> = FxHashMap::default();
    for (index, entry) in entries.iter().enumerate() {
        let word = entry.word.to_lowercase();
        if let Some(&first) = first_seen.get(&word) {
            issues.push(Issue {
                index,
                word: entry.word.clone(),
                kind: IssueKind::Duplicate { first },
            });
        } else {
            first_seen.insert(word, index);
        }
    }
    issues.sort_by_key(|issue| issue.index);

    CheckReport {
        total,
        issues,
        duration: start.elapsed(),
    }
}

/// Lint entries with a progress bar on the terminal
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_check(entries: &[WordEntry]) -> CheckReport {
    println!("🔍 Checking {} entries...", entries.len());

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░"),
    );

    let report = check_entries(entries, &pb);
    pb.finish_with_message(format!("{} issues", report.issues.len()));
    log::info!(
        "checked {} entries in {:.2?}, {} issues",
        report.total,
        report.duration,
        report.issues.len()
    );
    report
}
