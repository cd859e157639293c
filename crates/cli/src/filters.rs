// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Context filters that prune candidate phrase matches.
//!
//! Filters only ever remove candidates. Each one inspects the tokens
//! directly before or after a candidate span:
//! - `NotPrecededBy`: drop when an exception phrase ends right before the span
//! - `NotFollowedBy`: drop when an exception phrase starts right after the span
//! - `PrecededBy`: keep only when one of the phrases ends right before the span
//! - `NotFollowedAndPrecededBy`: drop when both a preceding and a following
//!   phrase occur
//! - `Standalone`: keep only at the end of the sequence or before punctuation

use serde::Serialize;

use crate::matcher::{Phrase, Span, matches_at};

/// A context filter attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    NotPrecededBy {
        phrases: Vec<Phrase>,
    },
    NotFollowedBy {
        phrases: Vec<Phrase>,
    },
    PrecededBy {
        phrases: Vec<Phrase>,
    },
    NotFollowedAndPrecededBy {
        preceding: Vec<Phrase>,
        following: Vec<Phrase>,
    },
    Standalone,
}

impl Filter {
    pub fn not_preceded_by<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::NotPrecededBy { phrases: parse_all(phrases) }
    }

    pub fn not_followed_by<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::NotFollowedBy { phrases: parse_all(phrases) }
    }

    pub fn preceded_by<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::PrecededBy { phrases: parse_all(phrases) }
    }

    pub fn not_followed_and_preceded_by<S: AsRef<str>, T: AsRef<str>>(
        preceding: &[S],
        following: &[T],
    ) -> Self {
        Self::NotFollowedAndPrecededBy {
            preceding: parse_all(preceding),
            following: parse_all(following),
        }
    }

    /// Short name used in listings and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotPrecededBy { .. } => "not_preceded_by",
            Self::NotFollowedBy { .. } => "not_followed_by",
            Self::PrecededBy { .. } => "preceded_by",
            Self::NotFollowedAndPrecededBy { .. } => "not_followed_and_preceded_by",
            Self::Standalone => "standalone",
        }
    }

    /// Exception lists carried by this filter, in declaration order.
    pub fn phrase_lists(&self) -> Vec<&[Phrase]> {
        match self {
            Self::NotPrecededBy { phrases }
            | Self::NotFollowedBy { phrases }
            | Self::PrecededBy { phrases } => vec![phrases.as_slice()],
            Self::NotFollowedAndPrecededBy { preceding, following } => {
                vec![preceding.as_slice(), following.as_slice()]
            }
            Self::Standalone => Vec::new(),
        }
    }

    /// Whether the candidate at `span` survives this filter.
    pub fn accepts<W: AsRef<str>>(&self, words: &[W], span: Span) -> bool {
        match self {
            Self::NotPrecededBy { phrases } => !is_preceded_by(words, span, phrases),
            Self::NotFollowedBy { phrases } => !is_followed_by(words, span, phrases),
            Self::PrecededBy { phrases } => is_preceded_by(words, span, phrases),
            Self::NotFollowedAndPrecededBy { preceding, following } => {
                !(is_preceded_by(words, span, preceding) && is_followed_by(words, span, following))
            }
            Self::Standalone => is_standalone(words, span),
        }
    }
}

fn parse_all<S: AsRef<str>>(phrases: &[S]) -> Vec<Phrase> {
    phrases.iter().map(|p| Phrase::parse(p.as_ref())).collect()
}

/// True when one of `phrases` ends immediately before `span`.
pub fn is_preceded_by<W: AsRef<str>>(words: &[W], span: Span, phrases: &[Phrase]) -> bool {
    phrases.iter().any(|phrase| {
        span.start >= phrase.len() && matches_at(words, span.start - phrase.len(), phrase.words())
    })
}

/// True when one of `phrases` starts immediately after `span`.
pub fn is_followed_by<W: AsRef<str>>(words: &[W], span: Span, phrases: &[Phrase]) -> bool {
    phrases
        .iter()
        .any(|phrase| matches_at(words, span.end, phrase.words()))
}

/// True when `span` ends the sequence or is followed by punctuation.
pub fn is_standalone<W: AsRef<str>>(words: &[W], span: Span) -> bool {
    match words.get(span.end) {
        None => true,
        Some(next) => is_punctuation(next.as_ref()),
    }
}

/// A token with no letters or digits.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
