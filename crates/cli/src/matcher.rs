// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Consecutive-word phrase matching.
//!
//! A phrase is one or more words. Matching walks every start position of a
//! word sequence and compares the window word by word, ignoring case.

use std::fmt;

use serde::{Serialize, Serializer};

/// Half-open token range `[start, end)` within a word sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed sequence of words matched as a unit.
///
/// Keeps the original text for display and the lowercase words for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    text: String,
    words: Vec<String>,
}

impl Phrase {
    /// Split `text` on whitespace into a phrase.
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All spans where this phrase occurs in `words`.
    pub fn find_in<W: AsRef<str>>(&self, words: &[W]) -> Vec<Span> {
        find_consecutive(words, &self.words)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Phrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Find every position where `phrase` occurs as consecutive words.
///
/// Returns spans in ascending start order. An empty phrase never matches.
pub fn find_consecutive<W, P>(words: &[W], phrase: &[P]) -> Vec<Span>
where
    W: AsRef<str>,
    P: AsRef<str>,
{
    if phrase.is_empty() || phrase.len() > words.len() {
        return Vec::new();
    }

    (0..=words.len() - phrase.len())
        .filter(|&start| matches_at(words, start, phrase))
        .map(|start| Span::new(start, start + phrase.len()))
        .collect()
}

/// Check whether `phrase` occurs in `words` starting at `start`.
///
/// Windows that run past either end of `words` never match.
pub fn matches_at<W, P>(words: &[W], start: usize, phrase: &[P]) -> bool
where
    W: AsRef<str>,
    P: AsRef<str>,
{
    let Some(window) = words.get(start..start + phrase.len()) else {
        return false;
    };
    window
        .iter()
        .zip(phrase)
        .all(|(word, expected)| same_word(word.as_ref(), expected.as_ref()))
}

/// Case-insensitive word comparison. Does not allocate.
pub fn same_word(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
