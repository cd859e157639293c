// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document assessment.
//!
//! Runs the rule table over every sentence of a document and folds the
//! matches into at most one result per rule, each carrying a mark for
//! every occurrence.

use serde::Serialize;

use crate::engine::match_rule;
use crate::rules::{Rule, RuleTable, Severity};
use crate::text::{Sentence, split_sentences};

/// A document split into sentences, with each sentence tokenized once.
#[derive(Debug, Clone)]
pub struct Document {
    sentences: Vec<(Sentence, Vec<String>)>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let sentences = split_sentences(text)
            .into_iter()
            .map(|s| {
                let tokens = s.tokens();
                (s, tokens)
            })
            .collect();
        Self { sentences }
    }

    /// Assess against every rule in `table`, in table order.
    pub fn assess(&self, table: &RuleTable) -> Vec<AssessmentResult> {
        table.iter().filter_map(|rule| self.assess_rule(rule)).collect()
    }

    fn assess_rule(&self, rule: &Rule) -> Option<AssessmentResult> {
        let marks: Vec<Mark> = self
            .sentences
            .iter()
            .flat_map(|(sentence, tokens)| {
                match_rule(rule, tokens).into_iter().map(move |m| Mark {
                    sentence: sentence.index,
                    line: sentence.line,
                    phrase: m.phrase,
                    text: sentence.text.clone(),
                })
            })
            .collect();

        let first = marks.first()?;
        Some(AssessmentResult {
            identifier: rule.identifier().to_string(),
            category: rule.category().to_string(),
            severity: rule.severity(),
            score: rule.severity().score(),
            feedback: format!(
                "{} {}",
                rule.render_feedback(&first.phrase),
                learn_more(rule.help_url())
            ),
            help_url: rule.help_url().to_string(),
            marks,
        })
    }
}

/// The outcome of one rule over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub identifier: String,
    pub category: String,
    pub severity: Severity,
    pub score: u8,
    /// HTML feedback, ending with a "Learn more." link.
    pub feedback: String,
    pub help_url: String,
    pub marks: Vec<Mark>,
}

/// One occurrence of a flagged phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    pub sentence: usize,
    pub line: usize,
    pub phrase: String,
    pub text: String,
}

/// Convenience for `Document::parse(text).assess(table)`.
pub fn assess(table: &RuleTable, text: &str) -> Vec<AssessmentResult> {
    Document::parse(text).assess(table)
}

fn learn_more(url: &str) -> String {
    format!(r#"<a href="{url}" target="_blank">Learn more.</a>"#)
}

#[cfg(test)]
#[path = "assessment_tests.rs"]
mod tests;
