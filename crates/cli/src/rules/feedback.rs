// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feedback templates and positional placeholder rendering.
//!
//! Templates use `%N$s` placeholders: `%1$s` is the matched phrase,
//! `%2$s` the first inclusive alternative, `%3$s` the second.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Suggestion sentence shared by most templates.
pub const ALTERNATIVE: &str = "Consider using an alternative, such as %2$s.";

/// Used for terms that are harmful in every context.
pub const POTENTIALLY_HARMFUL: &str =
    "Avoid using <i>%1$s</i> as it is potentially harmful. Consider using an alternative, such as %2$s.";

/// Used for terms that are fine when someone chooses them for themselves.
pub const POTENTIALLY_HARMFUL_UNLESS: &str = "Be careful when using <i>%1$s</i> as it is potentially \
harmful. Consider using an alternative, such as %2$s, unless referring to someone who explicitly \
wants to be referred to with this term.";

/// Used for derogatory terms, such as 'cripple'.
pub const DEROGATORY: &str =
    "Avoid using <i>%1$s</i> as it is derogatory. Consider using an alternative, such as %2$s.";

/// Used for terms that are inclusive only when referring to a medical condition.
pub const MEDICAL_CONDITION: &str = "Be careful when using <i>%1$s</i> as it is potentially harmful. \
Unless you are referencing the specific medical condition, consider using another alternative to \
describe the trait or behavior, such as %2$s.";

/// Used for 'special needs': one alternative for needs, one for people.
pub const POTENTIALLY_HARMFUL_TWO_ALTERNATIVES: &str = "Avoid using <i>%1$s</i> as it is potentially \
harmful. Consider using an alternative, such as %2$s when referring to someone's needs, or %3$s when \
referring to a person.";

/// Used for terms that describe a symptom of an eating disorder.
pub const SYMPTOM: &str = "Be careful when using <i>%1$s</i>, unless talking about a symptom of a \
medical condition. If you are not referencing a symptom, consider other alternatives to describe the \
trait or behavior, such as %2$s.";

/// Used for functioning labels, which people may apply to themselves.
pub const OWN_CONDITION_CAREFUL: &str = "Be careful when using <i>%1$s</i> as it is potentially \
harmful. Consider using an alternative, such as %2$s, unless referring to how you characterize your \
own condition.";

/// Like [`OWN_CONDITION_CAREFUL`] for terms that are always flagged.
pub const OWN_CONDITION_AVOID: &str = "Avoid using <i>%1$s</i> as it is potentially harmful. \
Consider using an alternative, such as %2$s, unless referring to how you characterize your own \
condition.";

/// Used for personality-disorder terms with a medical and a colloquial alternative.
pub const PERSONALITY_DISORDER: &str = "Be careful when using <i>%1$s</i> as it is potentially \
harmful. If you are referencing the medical condition, use %2$s instead, unless referring to someone \
who explicitly wants to be referred to with this term. If you are not referencing the medical \
condition, consider other alternatives to describe the trait or behavior, such as %3$s.";

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d+)\$s").expect("valid regex pattern"));

/// Feedback for an idiom that names the whole construction, e.g. "to go crazy".
pub fn idiom(construction: &str) -> String {
    format!("Avoid using <i>{construction}</i> as it is potentially harmful. {ALTERNATIVE}")
}

/// Substitute a subset of placeholders, leaving the others in place.
///
/// `values[0]` fills `%1$s`, and so on. Used to pre-fill the phrase
/// when its display form differs from the matched tokens.
pub fn prefill(template: &str, values: &[Option<&str>]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(caps, values.iter().copied())
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Substitute every placeholder. Unknown placeholders render empty.
pub fn render(template: &str, values: &[&str]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(caps, values.iter().map(|v| Some(*v)))
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

fn lookup<'a>(
    caps: &Captures<'_>,
    mut values: impl Iterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    let index: usize = caps[1].parse().ok()?;
    values.nth(index.checked_sub(1)?).flatten()
}

/// Placeholder indices used by `template`, ascending and deduplicated.
pub fn placeholders(template: &str) -> Vec<usize> {
    let mut indices: Vec<usize> = PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
