// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kindly: flags non-inclusive language in prose.
//!
//! The core is a phrase-match engine: a table of [`rules::Rule`]s, each a
//! set of word phrases with context filters, evaluated over lowercase word
//! sequences by [`engine::find_matches`]. [`assessment`] applies it to whole
//! documents; the remaining modules make up the `kindly` command line tool.

pub mod assessment;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod report;
pub mod rules;
pub mod runner;
pub mod text;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
