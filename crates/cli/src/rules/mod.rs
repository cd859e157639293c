// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inclusive-language rules and the validated rule table.
//!
//! Rules are declared as [`RuleDraft`] values and turned into immutable
//! [`Rule`]s by [`RuleTableBuilder::build`], which assigns each rule its
//! category and help URL and rejects authoring defects up front.

pub mod disability;
pub mod feedback;
pub mod words;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::filters::Filter;
use crate::matcher::{Phrase, Span};

/// How strongly a rule flags its phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    NonInclusive,
    PotentiallyNonInclusive,
}

impl Severity {
    /// Score reported to the editor: lower is worse.
    pub fn score(self) -> u8 {
        match self {
            Self::NonInclusive => 3,
            Self::PotentiallyNonInclusive => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NonInclusive => "non-inclusive",
            Self::PotentiallyNonInclusive => "potentially-non-inclusive",
        }
    }

    /// True when `self` is as severe as `threshold` or worse.
    pub fn meets(self, threshold: Severity) -> bool {
        self.score() <= threshold.score()
    }
}

/// A rule as written in a table, before validation.
#[derive(Debug, Clone)]
pub struct RuleDraft {
    identifier: String,
    phrases: Vec<String>,
    alternatives: Vec<String>,
    severity: Severity,
    feedback: String,
    filters: Vec<Filter>,
}

impl RuleDraft {
    pub fn new(identifier: &str, phrases: &[&str], severity: Severity) -> Self {
        Self {
            identifier: identifier.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            alternatives: Vec::new(),
            severity,
            feedback: String::new(),
            filters: Vec::new(),
        }
    }

    /// Append an inclusive alternative (`%2$s`, then `%3$s`, ...).
    pub fn alternative(mut self, alternative: &str) -> Self {
        self.alternatives.push(alternative.to_string());
        self
    }

    pub fn feedback(mut self, template: impl Into<String>) -> Self {
        self.feedback = template.into();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn not_preceded_by<S: AsRef<str>>(self, phrases: &[S]) -> Self {
        self.filter(Filter::not_preceded_by(phrases))
    }

    pub fn not_followed_by<S: AsRef<str>>(self, phrases: &[S]) -> Self {
        self.filter(Filter::not_followed_by(phrases))
    }

    pub fn preceded_by<S: AsRef<str>>(self, phrases: &[S]) -> Self {
        self.filter(Filter::preceded_by(phrases))
    }

    pub fn not_followed_and_preceded_by<S: AsRef<str>, T: AsRef<str>>(
        self,
        preceding: &[S],
        following: &[T],
    ) -> Self {
        self.filter(Filter::not_followed_and_preceded_by(preceding, following))
    }

    pub fn standalone(self) -> Self {
        self.filter(Filter::Standalone)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    fn validate(&self) -> Result<(), RuleError> {
        let id = || self.identifier.clone();

        if self.phrases.is_empty() {
            return Err(RuleError::NoPhrases(id()));
        }
        if self.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(RuleError::EmptyPhrase(id()));
        }
        if self.alternatives.is_empty() {
            return Err(RuleError::NoAlternatives(id()));
        }

        // %1$s is optional: some templates spell out the construction instead.
        let used = feedback::placeholders(&self.feedback);
        let alternatives = self.alternatives.len();
        if let Some(&index) = used.iter().find(|&&i| i == 0 || i > alternatives + 1) {
            return Err(RuleError::UnknownPlaceholder { identifier: id(), index, alternatives });
        }
        if let Some(index) = (2..=alternatives + 1).find(|i| !used.contains(i)) {
            return Err(RuleError::UnusedAlternative { identifier: id(), index });
        }

        for filter in &self.filters {
            for list in filter.phrase_lists() {
                if list.is_empty() {
                    return Err(RuleError::EmptyFilter { identifier: id(), filter: filter.kind() });
                }
                if list.iter().any(Phrase::is_empty) {
                    return Err(RuleError::EmptyException {
                        identifier: id(),
                        filter: filter.kind(),
                    });
                }
            }
        }

        Ok(())
    }

    fn into_rule(self, category: &str, help_url: &str) -> Rule {
        Rule {
            phrases: self.phrases.iter().map(|p| Phrase::parse(p)).collect(),
            identifier: self.identifier,
            alternatives: self.alternatives,
            severity: self.severity,
            feedback: self.feedback,
            filters: self.filters,
            category: category.to_string(),
            help_url: help_url.to_string(),
        }
    }
}

/// An immutable, validated rule.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    identifier: String,
    phrases: Vec<Phrase>,
    alternatives: Vec<String>,
    severity: Severity,
    feedback: String,
    filters: Vec<Filter>,
    category: String,
    help_url: String,
}

impl Rule {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn help_url(&self) -> &str {
        &self.help_url
    }

    /// Whether every filter keeps the candidate at `span`.
    pub fn accepts<W: AsRef<str>>(&self, words: &[W], span: Span) -> bool {
        self.filters.iter().all(|f| f.accepts(words, span))
    }

    /// Feedback with `phrase` and the alternatives substituted.
    pub fn render_feedback(&self, phrase: &str) -> String {
        let values: Vec<&str> = std::iter::once(phrase)
            .chain(self.alternatives.iter().map(String::as_str))
            .collect();
        feedback::render(&self.feedback, &values)
    }
}

/// Ordered collection of validated rules.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The built-in table: every category shipped with kindly.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::builder()
            .category(disability::CATEGORY, disability::HELP_URL, disability::rules())
            .build()
    }

    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.identifier == identifier)
    }

    /// Distinct categories in table order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for rule in &self.rules {
            if !seen.contains(&rule.category()) {
                seen.push(rule.category());
            }
        }
        seen
    }

    /// Keep only the rules for which `keep` returns true, preserving order.
    pub fn retain(mut self, keep: impl FnMut(&Rule) -> bool) -> Self {
        self.rules.retain(keep);
        self
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Collects rule drafts per category and validates them into a [`RuleTable`].
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    sections: Vec<Section>,
}

#[derive(Debug)]
struct Section {
    category: String,
    help_url: String,
    drafts: Vec<RuleDraft>,
}

impl RuleTableBuilder {
    /// Add `drafts` under `category`, all sharing `help_url`.
    pub fn category(mut self, category: &str, help_url: &str, drafts: Vec<RuleDraft>) -> Self {
        self.sections.push(Section {
            category: category.to_string(),
            help_url: help_url.to_string(),
            drafts,
        });
        self
    }

    /// Validate every draft and produce the table.
    ///
    /// Fails on the first authoring defect, in declaration order.
    pub fn build(self) -> Result<RuleTable, RuleError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for section in self.sections {
            for draft in section.drafts {
                draft.validate()?;
                if !seen.insert(draft.identifier.clone()) {
                    return Err(RuleError::DuplicateIdentifier(draft.identifier));
                }
                rules.push(draft.into_rule(&section.category, &section.help_url));
            }
        }

        tracing::debug!("built rule table with {} rules", rules.len());
        Ok(RuleTable { rules })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
