// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `kindly.toml` configuration.
//!
//! ```toml
//! version = 1
//!
//! [check]
//! disable = ["crazy"]
//! categories = ["disability"]
//! min_severity = "potentially-non-inclusive"
//! include = ["**/*.md", "**/*.txt"]
//! exclude = ["target/**"]
//! ```

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::rules::{RuleTable, Severity};

/// Config schema version understood by this build.
pub const CONFIG_VERSION: i64 = 1;

/// Name of the config file searched for by discovery.
pub const CONFIG_FILE: &str = "kindly.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub version: i64,

    #[serde(default)]
    pub check: CheckConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: CONFIG_VERSION, check: CheckConfig::default() }
    }
}

/// The `[check]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Rule identifiers to skip.
    pub disable: Vec<String>,

    /// Categories to run. Empty means all.
    pub categories: Vec<String>,

    /// Least severe result still reported.
    pub min_severity: Severity,

    /// Glob patterns for files to check.
    pub include: Vec<String>,

    /// Glob patterns for files to skip.
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            disable: Vec::new(),
            categories: Vec::new(),
            min_severity: Severity::PotentiallyNonInclusive,
            include: defaults::include(),
            exclude: defaults::exclude(),
        }
    }
}

impl Config {
    /// Narrow `table` to the configured rules.
    ///
    /// Unknown identifiers and categories are logged and otherwise ignored.
    pub fn select_rules(&self, table: RuleTable) -> RuleTable {
        let check = &self.check;

        for id in &check.disable {
            if table.get(id).is_none() {
                tracing::warn!("unknown rule `{}` in check.disable", id);
            }
        }
        let known = table.categories();
        for category in &check.categories {
            if !known.contains(&category.as_str()) {
                tracing::warn!("unknown category `{}` in check.categories", category);
            }
        }

        let selected = table.retain(|rule| {
            !check.disable.iter().any(|id| id == rule.identifier())
                && (check.categories.is_empty()
                    || check.categories.iter().any(|c| c == rule.category()))
                && rule.severity().meets(check.min_severity)
        });
        tracing::debug!("{} rules selected", selected.len());
        selected
    }
}

/// Parse config text. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            found: config.version,
            expected: CONFIG_VERSION,
        });
    }

    Ok(config)
}

/// Config for a run: `explicit` if given, else the nearest kindly.toml
/// above `start_dir`, else the defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return load(path);
    }
    match crate::discovery::find_config(start_dir) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(Config::default())
        }
    }
}

/// Read and parse the config file at `path`.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
