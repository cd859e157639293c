// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Fold `--no-color` and the `NO_COLOR` convention into a choice.
    pub fn resolve(self, no_color: bool) -> ColorChoice {
        match self {
            Self::Never => ColorChoice::Never,
            Self::Always => resolve_color(true, no_color),
            Self::Auto => {
                let no_color = no_color || std::env::var_os("NO_COLOR").is_some();
                if no_color || !std::io::stdout().is_terminal() {
                    ColorChoice::Never
                } else {
                    ColorChoice::Auto
                }
            }
        }
    }
}

/// `no_color` wins over `force`.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Colors used by the text report.
pub mod scheme {
    use super::*;

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn non_inclusive() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn potentially_non_inclusive() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    pub fn rule() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn advice() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
