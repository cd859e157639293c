// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel assessment runner with error recovery.
//!
//! Assesses files in parallel using rayon, isolating failures so one
//! unreadable file doesn't prevent the others from being checked.
//! Reports come back in input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::assessment::{AssessmentResult, Document};
use crate::rules::{RuleTable, Severity};
use crate::walker::{WalkError, WalkedFile};

/// Assessment of one input.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub results: Vec<AssessmentResult>,
    /// Set when the input could not be read; `results` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn from_text(path: &Path, text: &str, table: &RuleTable) -> Self {
        Self { path: path.to_path_buf(), results: Document::parse(text).assess(table), error: None }
    }

    /// A report for an input that could not be read.
    pub fn failed(path: &Path, error: String) -> Self {
        Self { path: path.to_path_buf(), results: Vec::new(), error: Some(error) }
    }

    pub fn from_walk_error(error: &WalkError) -> Self {
        Self::failed(&error.path, error.message.clone())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }
}

/// Runs the rule table over a set of files.
pub struct Runner<'a> {
    table: &'a RuleTable,
}

impl<'a> Runner<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Assess every file. Files run in parallel; output keeps input order.
    pub fn run(&self, files: &[WalkedFile]) -> Vec<FileReport> {
        files.par_iter().map(|file| self.run_file(&file.path)).collect()
    }

    fn run_file(&self, path: &Path) -> FileReport {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                return FileReport::failed(path, e.to_string());
            }
        };

        // Catch panics to ensure error isolation
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            FileReport::from_text(path, &text, self.table)
        })) {
            Ok(report) => {
                tracing::trace!("{}: {} results", path.display(), report.results.len());
                report
            }
            Err(_) => FileReport::failed(path, "internal error: assessment panicked".to_string()),
        }
    }
}

/// Totals across all reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub non_inclusive: usize,
    pub potentially_non_inclusive: usize,
    pub errors: usize,
}

impl Summary {
    pub fn of(reports: &[FileReport]) -> Self {
        let mut summary = Self { files: reports.len(), ..Self::default() };
        for report in reports {
            summary.non_inclusive += report.count(Severity::NonInclusive);
            summary.potentially_non_inclusive += report.count(Severity::PotentiallyNonInclusive);
            if report.error.is_some() {
                summary.errors += 1;
            }
        }
        summary
    }

    pub fn results(&self) -> usize {
        self.non_inclusive + self.potentially_non_inclusive
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
