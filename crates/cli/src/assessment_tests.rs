// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::LazyLock;

use super::*;

static TABLE: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::builtin().unwrap());

fn identifiers(results: &[AssessmentResult]) -> Vec<&str> {
    results.iter().map(|r| r.identifier.as_str()).collect()
}

#[test]
fn clean_text_has_no_results() {
    assert!(assess(&TABLE, "The team shipped the release on time.").is_empty());
}

#[test]
fn one_result_per_rule_with_mark_per_occurrence() {
    let results = assess(&TABLE, "That was lame. Truly lame!\n\nStill lame.");
    assert_eq!(identifiers(&results), ["lame"]);

    let marks = &results[0].marks;
    assert_eq!(marks.len(), 3);
    let sentences: Vec<usize> = marks.iter().map(|m| m.sentence).collect();
    assert_eq!(sentences, [0, 1, 2]);
    assert_eq!(marks[2].line, 3);
    assert_eq!(marks[1].text, "Truly lame!");
}

#[test]
fn results_follow_table_order() {
    let results = assess(&TABLE, "What a stupid plan. It is lame.");
    assert_eq!(identifiers(&results), ["lame", "stupid"]);
}

#[test]
fn result_carries_severity_and_score() {
    let results = assess(&TABLE, "The crowd went crazy.");
    assert_eq!(results[0].identifier, "to go crazy");
    assert_eq!(results[0].severity, Severity::NonInclusive);
    assert_eq!(results[0].score, 3);
    assert_eq!(results[0].category, "disability");
}

#[test]
fn feedback_ends_with_learn_more_link() {
    let results = assess(&TABLE, "She is an alcoholic.");
    let feedback = &results[0].feedback;
    assert!(feedback.starts_with("Be careful when using <i>an alcoholic</i>"));
    assert!(feedback.ends_with(
        r#" <a href="https://yoa.st/inclusive-language-disability" target="_blank">Learn more.</a>"#
    ));
}

#[test]
fn feedback_uses_first_matched_phrase() {
    let results = assess(&TABLE, "He is an addict. They are addicts.");
    let addicts = results.iter().find(|r| r.identifier == "addicts").unwrap();
    assert!(addicts.feedback.contains("<i>addicts</i>"));
}

#[test]
fn sentence_boundary_breaks_phrase() {
    assert!(assess(&TABLE, "She went. Crazy ideas followed?").iter().all(|r| r.identifier != "to go crazy"));
}

#[test]
fn punctuation_ends_standalone_phrase() {
    let results = assess(&TABLE, "We help the disabled, always.");
    assert_eq!(identifiers(&results), ["theDisabled"]);
}

#[test]
fn dashes_end_standalone_phrase() {
    for text in ["We help the disabled \u{2014} always.", "We help the disabled - always."] {
        assert_eq!(identifiers(&assess(&TABLE, text)), ["theDisabled"], "{text}");
    }
}

#[test]
fn crlf_blank_line_separates_paragraphs() {
    let results = assess(&TABLE, "Help the disabled\r\n\r\nPeople read this");
    assert_eq!(identifiers(&results), ["theDisabled"]);

    let results = assess(&TABLE, "Where to go\r\n\r\nCrazy ideas work");
    assert_eq!(identifiers(&results), ["crazy"]);
}

#[test]
fn curly_apostrophes_are_normalized() {
    let results = assess(&TABLE, "I\u{2019}m so crazy about it.");
    assert_eq!(identifiers(&results), ["to be crazy about"]);
}

#[test]
fn empty_table_yields_nothing() {
    let empty = RuleTable::default();
    assert!(Document::parse("so lame").assess(&empty).is_empty());
}
