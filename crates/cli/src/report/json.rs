// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;
use termcolor::WriteColor;

use crate::runner::{FileReport, Summary};

use super::ReportFormatter;

/// JSON format report formatter. Lists every result, ignoring `--limit`.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, reports: &[FileReport]) -> anyhow::Result<()> {
        let output = json!({
            "files": reports,
            "summary": Summary::of(reports),
        });
        serde_json::to_writer_pretty(&mut *w, &output)?;
        writeln!(w)?;
        Ok(())
    }

    fn format_empty(&self) -> String {
        concat!(
            r#"{"files": [], "summary": {"files": 0, "non_inclusive": 0, "#,
            r#""potentially_non_inclusive": 0, "errors": 0}}"#,
            "\n"
        )
        .to_string()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
