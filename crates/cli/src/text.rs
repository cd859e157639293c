// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sentence splitting and tokenization.
//!
//! Turns raw prose into sentences with source positions, and each sentence
//! into the lowercase word sequence the engine consumes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Sentence terminator followed by whitespace or end of input, or a blank line.
#[allow(clippy::expect_used)]
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+(?:\s+|$)|\r?\n[ \t]*\r?\n\s*").expect("valid regex pattern")
});

/// Letter/digit runs joined by inner hyphens or apostrophes, or clause
/// punctuation (including free-standing dashes).
#[allow(clippy::expect_used)]
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*|[,;:()"]|\p{Pd}+"#).expect("valid regex pattern")
});

/// A sentence and where it sits in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position in the document, from 0.
    pub index: usize,
    /// Byte offset of the first character.
    pub offset: usize,
    /// 1-based line of the first character.
    pub line: usize,
    pub text: String,
}

impl Sentence {
    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.text)
    }
}

/// Split `text` into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut splitter = Splitter { text, sentences: Vec::new(), scanned: 0, line: 1 };
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(text) {
        let terminator = boundary
            .as_str()
            .find(char::is_whitespace)
            .unwrap_or(boundary.len());
        splitter.push(start, boundary.start() + terminator);
        start = boundary.end();
    }
    splitter.push(start, text.len());
    splitter.sentences
}

struct Splitter<'a> {
    text: &'a str,
    sentences: Vec<Sentence>,
    // Line counting resumes from the last pushed offset.
    scanned: usize,
    line: usize,
}

impl Splitter<'_> {
    fn push(&mut self, from: usize, to: usize) {
        let slice = &self.text[from..to];
        let trimmed = slice.trim();
        if trimmed.is_empty() {
            return;
        }
        let offset = from + (slice.len() - slice.trim_start().len());
        self.line += self.text[self.scanned..offset].matches('\n').count();
        self.scanned = offset;
        self.sentences.push(Sentence {
            index: self.sentences.len(),
            offset,
            line: self.line,
            text: trimmed.to_string(),
        });
    }
}

/// Lowercase word sequence for `text`.
///
/// Curly apostrophes and quotes are folded to their ASCII forms first, so
/// "don’t" and "don't" produce the same token.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect::<String>()
        .to_lowercase();

    TOKEN
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
