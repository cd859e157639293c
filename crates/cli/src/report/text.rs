// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use termcolor::WriteColor;

use crate::color::scheme;
use crate::rules::Severity;
use crate::runner::{FileReport, Summary};

use super::{ReportFormatter, plain_feedback};

/// Text format report formatter.
pub struct TextFormatter {
    limit: Option<usize>,
}

impl TextFormatter {
    /// `limit` caps the number of occurrences listed; `None` lists all.
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }
}

impl ReportFormatter for TextFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, reports: &[FileReport]) -> anyhow::Result<()> {
        let mut shown = 0;
        let mut truncated = false;

        'reports: for report in reports {
            let path = report.path.display();

            if let Some(error) = &report.error {
                w.set_color(&scheme::path())?;
                write!(w, "{path}")?;
                w.reset()?;
                writeln!(w, ": error: {error}")?;
                continue;
            }

            for result in &report.results {
                let budget = self.limit.map_or(usize::MAX, |limit| limit.saturating_sub(shown));
                if budget == 0 {
                    truncated = true;
                    break 'reports;
                }

                for mark in result.marks.iter().take(budget) {
                    shown += 1;
                    w.set_color(&scheme::path())?;
                    write!(w, "{path}")?;
                    w.reset()?;
                    write!(w, ":")?;
                    w.set_color(&scheme::line_number())?;
                    write!(w, "{}", mark.line)?;
                    w.reset()?;
                    write!(w, ": ")?;
                    w.set_color(&severity_color(result.severity))?;
                    write!(w, "{}", result.severity.as_str())?;
                    w.reset()?;
                    write!(w, " ")?;
                    w.set_color(&scheme::rule())?;
                    write!(w, "{}", result.identifier)?;
                    w.reset()?;
                    writeln!(w, ": \"{}\"", mark.phrase)?;
                }

                w.set_color(&scheme::advice())?;
                writeln!(w, "  {}", plain_feedback(&result.feedback))?;
                writeln!(w, "  {}", result.help_url)?;
                w.reset()?;

                if result.marks.len() > budget {
                    truncated = true;
                    break 'reports;
                }
            }
        }

        let summary = Summary::of(reports);
        if truncated {
            let total: usize = reports
                .iter()
                .flat_map(|r| &r.results)
                .map(|r| r.marks.len())
                .sum();
            writeln!(w, "... {} more occurrences not shown (use --no-limit)", total - shown)?;
        }
        write_summary(w, &summary)?;
        Ok(())
    }

    fn format_empty(&self) -> String {
        "No files checked.\n".to_string()
    }
}

fn severity_color(severity: Severity) -> termcolor::ColorSpec {
    match severity {
        Severity::NonInclusive => scheme::non_inclusive(),
        Severity::PotentiallyNonInclusive => scheme::potentially_non_inclusive(),
    }
}

fn write_summary(w: &mut dyn WriteColor, summary: &Summary) -> anyhow::Result<()> {
    let files = plural(summary.files, "file", "files");
    if summary.results() == 0 {
        w.set_color(&scheme::pass())?;
        write!(w, "PASS")?;
        w.reset()?;
        writeln!(w, ": no non-inclusive language found in {files}")?;
    } else {
        writeln!(
            w,
            "{} ({} non-inclusive, {} potentially non-inclusive) in {files}",
            plural(summary.results(), "result", "results"),
            summary.non_inclusive,
            summary.potentially_non_inclusive,
        )?;
    }
    if summary.errors > 0 {
        writeln!(w, "{} could not be read", plural(summary.errors, "file", "files"))?;
    }
    Ok(())
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
