//! Shared result types
//!
//! Outcomes of matching a single document, updating a single file, and
//! running a whole batch.

use std::path::PathBuf;

use serde::Serialize;

use super::LogoError;

/// Result of running a matcher over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// The anchor was absent; nothing should be written
    NotFound,
    /// Every anchor occurrence was rewritten
    Found {
        /// Full document text after replacement
        content: String,
        /// Number of replaced logo blocks
        occurrences: usize,
    },
}

impl Replacement {
    pub fn is_found(&self) -> bool {
        matches!(self, Replacement::Found { .. })
    }

    pub fn occurrences(&self) -> usize {
        match self {
            Replacement::NotFound => 0,
            Replacement::Found { occurrences, .. } => *occurrences,
        }
    }

    /// The replaced text, or `original` untouched when nothing matched
    pub fn content_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Replacement::NotFound => original,
            Replacement::Found { content, .. } => content,
        }
    }
}

/// Outcome of updating a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// Backup written and page overwritten
    Updated {
        backup: PathBuf,
        occurrences: usize,
    },
    /// No logo container in the page; nothing was written
    NotFound,
    /// Reading, backing up, or writing the page failed
    Failed(LogoError),
}

impl FileOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }
}

/// Tally of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub updated: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl BatchReport {
    /// Count one more file outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        match outcome {
            FileOutcome::Updated { .. } => self.updated += 1,
            FileOutcome::NotFound => self.not_found += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The directory held no matching pages
    NoFiles { dir: PathBuf },
    /// The operator declined; no page was read or written
    Cancelled { discovered: Vec<PathBuf> },
    /// Every discovered page went through the updater
    Completed {
        discovered: Vec<PathBuf>,
        report: BatchReport,
    },
}

/// Read-only look at one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub occurrences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
