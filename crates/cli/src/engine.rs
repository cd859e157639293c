// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phrase match engine.
//!
//! Applies every rule of a table to a word sequence. For each rule, each
//! phrase is matched in order, candidates are pruned by the rule's filters,
//! and survivors become [`Match`]es with rendered feedback.

use serde::Serialize;

use crate::matcher::{Phrase, Span};
use crate::rules::{Rule, RuleTable, Severity};

/// One rule firing on one token span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub rule: String,
    pub category: String,
    pub phrase: String,
    pub start: usize,
    pub end: usize,
    pub severity: Severity,
    pub feedback: String,
    pub help_url: String,
}

impl Match {
    fn new(rule: &Rule, phrase: &Phrase, span: Span) -> Self {
        Self {
            rule: rule.identifier().to_string(),
            category: rule.category().to_string(),
            phrase: phrase.text().to_string(),
            start: span.start,
            end: span.end,
            severity: rule.severity(),
            feedback: rule.render_feedback(phrase.text()),
            help_url: rule.help_url().to_string(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Run every rule in `table` over `words`, in table order.
pub fn find_matches<W: AsRef<str>>(table: &RuleTable, words: &[W]) -> Vec<Match> {
    table.iter().flat_map(|rule| match_rule(rule, words)).collect()
}

/// Matches of a single rule: by phrase order, then by position.
pub fn match_rule<W: AsRef<str>>(rule: &Rule, words: &[W]) -> Vec<Match> {
    let mut matches = Vec::new();
    for phrase in rule.phrases() {
        for span in phrase.find_in(words) {
            if rule.accepts(words, span) {
                matches.push(Match::new(rule, phrase, span));
            }
        }
    }
    matches
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
