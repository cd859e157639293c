// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word lists shared by context filters.
//!
//! Several rules only apply in a specific construction ("going crazy",
//! "is so crazy about"). These lists enumerate the tokens that form those
//! constructions, expanded with optional intensifiers where needed.

/// Forms of "to be", including common contractions.
pub const FORMS_OF_TO_BE: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "i'm", "you're", "we're", "they're",
    "he's", "she's", "it's", "that's",
];

/// Negated forms of "to be" that read as a statement about the subject.
pub const NEGATED_FORMS_OF_TO_BE: &[&str] = &[
    "am not",
    "is not",
    "are not",
    "was not",
    "were not",
    "isn't",
    "aren't",
    "wasn't",
    "weren't",
    "i'm not",
    "you're not",
    "we're not",
    "they're not",
    "he's not",
    "she's not",
    "it's not",
    "that's not",
];

/// Negations placed before an infinitive or participle of "to be".
pub const NEGATED_INFINITIVES_OF_TO_BE: &[&str] = &[
    "not be",
    "not been",
    "not being",
    "never be",
    "never been",
    "won't be",
    "wouldn't be",
    "can't be",
    "couldn't be",
    "shouldn't be",
    "hasn't been",
    "haven't been",
    "hadn't been",
];

/// Optional intensifiers between a verb and the targeted adjective.
pub const INTENSIFIERS: &[&str] =
    &["so", "very", "really", "that", "too", "extremely", "totally", "particularly", "all that"];

pub const FORMS_OF_TO_GO: &[&str] = &["go", "goes", "going", "gone", "went"];

pub const FORMS_OF_TO_GET: &[&str] = &["get", "gets", "getting", "got", "gotten"];

pub const FORMS_OF_TO_DRIVE: &[&str] = &["drive", "drives", "driving", "drove", "driven"];

pub const OBJECT_PRONOUNS: &[&str] = &[
    "me", "you", "him", "her", "it", "us", "them", "everyone", "everybody", "someone", "somebody",
    "people",
];

/// Continuations that turn "crazy" into the "crazy in love" idiom.
pub const CRAZY_IN_LOVE_CONTINUATIONS: &[&str] = &["in love"];

/// Word following "crazy" in the "to be crazy about" construction.
pub const CRAZY_ABOUT_CONTINUATIONS: &[&str] = &["about"];

/// Each base form, followed by each base form joined with every intensifier.
pub fn with_optional_intensifier(bases: &[&str]) -> Vec<String> {
    let mut forms: Vec<String> = bases.iter().map(|b| b.to_string()).collect();
    for base in bases {
        for intensifier in INTENSIFIERS {
            forms.push(format!("{base} {intensifier}"));
        }
    }
    forms
}

/// Every pairing of `first` words with `second` words, in order.
pub fn combinations(first: &[&str], second: &[&str]) -> Vec<String> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| format!("{a} {b}")))
        .collect()
}

/// "am", "is so", "was really", ...
pub fn forms_of_to_be_with_optional_intensifier() -> Vec<String> {
    with_optional_intensifier(FORMS_OF_TO_BE)
}

/// "is not", "isn't so", "won't be that", ...
pub fn negated_forms_of_to_be_with_optional_intensifier() -> Vec<String> {
    let bases: Vec<&str> = NEGATED_FORMS_OF_TO_BE
        .iter()
        .chain(NEGATED_INFINITIVES_OF_TO_BE)
        .copied()
        .collect();
    with_optional_intensifier(&bases)
}

/// Positive and negated "to be", plus "to get", each with an optional intensifier.
pub fn forms_of_to_be_or_get_with_optional_intensifier() -> Vec<String> {
    let mut forms = forms_of_to_be_with_optional_intensifier();
    forms.extend(negated_forms_of_to_be_with_optional_intensifier());
    forms.extend(with_optional_intensifier(FORMS_OF_TO_GET));
    forms
}

/// "drive me", "driving everyone", "drove them", ...
pub fn combinations_of_drive_and_object_pronoun() -> Vec<String> {
    combinations(FORMS_OF_TO_DRIVE, OBJECT_PRONOUNS)
}

/// Precursors claimed by the "to go crazy" and "to drive crazy" rules.
pub fn should_not_precede_standalone_crazy() -> Vec<String> {
    let mut forms: Vec<String> = FORMS_OF_TO_GO.iter().map(|w| w.to_string()).collect();
    forms.extend(combinations_of_drive_and_object_pronoun());
    forms
}

/// Precursors claimed by the "crazy about" rules when "about" follows.
pub fn should_not_precede_standalone_crazy_when_followed_by_about() -> Vec<String> {
    let mut forms = forms_of_to_be_with_optional_intensifier();
    forms.extend(negated_forms_of_to_be_with_optional_intensifier());
    forms
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
