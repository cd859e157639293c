// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check report output.
//!
//! Renders assessment results in text or JSON format.

mod json;
mod text;

use std::sync::LazyLock;

use regex::Regex;
use termcolor::{NoColor, WriteColor};

use crate::cli::OutputFormat;
use crate::runner::FileReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for formatting check results into various output formats.
pub trait ReportFormatter {
    /// Write the report, using color when `writer` supports it.
    fn format_to(&self, writer: &mut dyn WriteColor, reports: &[FileReport]) -> anyhow::Result<()>;

    /// Return output for when no files were checked.
    fn format_empty(&self) -> String;

    /// Format the report into an uncolored string.
    fn format(&self, reports: &[FileReport]) -> anyhow::Result<String> {
        let mut buffer = NoColor::new(Vec::new());
        self.format_to(&mut buffer, reports)?;
        Ok(String::from_utf8(buffer.into_inner())?)
    }
}

/// Pick the formatter for `format`. `limit` caps the occurrences listed by text output.
pub fn formatter(format: OutputFormat, limit: Option<usize>) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(limit)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[allow(clippy::expect_used)]
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*<a\s[^>]*>.*?</a>").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex pattern"));

/// Plain-text form of HTML feedback: links dropped, `<i>` rendered as quotes.
pub fn plain_feedback(html: &str) -> String {
    let without_link = LINK.replace_all(html, "");
    let quoted = without_link.replace("<i>", "\"").replace("</i>", "\"");
    TAG.replace_all(&quoted, "").into_owned()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
