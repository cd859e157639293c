// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Disability-related rules.

use super::feedback::{
    DEROGATORY, MEDICAL_CONDITION, OWN_CONDITION_AVOID, OWN_CONDITION_CAREFUL,
    PERSONALITY_DISORDER, POTENTIALLY_HARMFUL, POTENTIALLY_HARMFUL_TWO_ALTERNATIVES,
    POTENTIALLY_HARMFUL_UNLESS, SYMPTOM, idiom, prefill,
};
use super::words::{
    CRAZY_ABOUT_CONTINUATIONS, CRAZY_IN_LOVE_CONTINUATIONS, FORMS_OF_TO_GO,
    combinations_of_drive_and_object_pronoun, forms_of_to_be_or_get_with_optional_intensifier,
    forms_of_to_be_with_optional_intensifier, negated_forms_of_to_be_with_optional_intensifier,
    should_not_precede_standalone_crazy, should_not_precede_standalone_crazy_when_followed_by_about,
};
use super::RuleDraft;
use super::Severity::{NonInclusive, PotentiallyNonInclusive};

pub const CATEGORY: &str = "disability";

pub const HELP_URL: &str = "https://yoa.st/inclusive-language-disability";

/// The disability rules, in evaluation order.
pub fn rules() -> Vec<RuleDraft> {
    let mut rules = Vec::new();
    rules.extend(eating_disorders());
    rules.extend(disability_labels());
    rules.extend(functioning_and_suicide());
    rules.extend(idioms_and_insults());
    rules.extend(crazy_family());
    rules.extend(mental_health());
    rules
}

fn eating_disorders() -> Vec<RuleDraft> {
    vec![
        RuleDraft::new("binge", &["binge"], PotentiallyNonInclusive)
            .alternative("<i>indulge, satiate, wallow, spree, marathon, consume excessively</i>")
            .feedback(SYMPTOM)
            .not_followed_by(&[
                "drink",
                "drinks",
                "drinking",
                "eating disorder",
                "and purge",
                "behavior",
                "behaviors",
                "behaviour",
                "behaviours",
            ]),
        RuleDraft::new("bingeing", &["bingeing", "binging"], PotentiallyNonInclusive)
            .alternative(
                "<i>indulging, satiating, wallowing, spreeing, marathoning, consuming excessively</i>",
            )
            .feedback(SYMPTOM)
            .not_followed_by(&["and purging", "behavior", "behaviors", "behaviour", "behaviours"]),
        RuleDraft::new("binged", &["binged"], PotentiallyNonInclusive)
            .alternative("<i>indulged, satiated, wallowed, spreed, marathoned, consumed excessively</i>")
            .feedback(SYMPTOM)
            .not_followed_by(&["and purged"]),
        RuleDraft::new("binges", &["binges"], PotentiallyNonInclusive)
            .alternative("<i>indulges, satiates, wallows, sprees, marathons, consumes excessively</i>")
            .feedback(SYMPTOM)
            .not_followed_by(&["and purges"]),
    ]
}

fn disability_labels() -> Vec<RuleDraft> {
    vec![
        RuleDraft::new(
            "wheelchairBound",
            &["wheelchair-bound", "wheelchair bound", "confined to a wheelchair"],
            NonInclusive,
        )
        .alternative("<i>uses a wheelchair, is a wheelchair user</i>")
        .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("mentallyRetarded", &["mentally retarded"], NonInclusive)
            .alternative("<i>person with an intellectual disability</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("retarded", &["retarded"], NonInclusive)
            .alternative("<i>uninformed, ignorant, foolish, irrational, insensible</i>")
            .feedback(DEROGATORY)
            .not_preceded_by(&["mentally"]),
        RuleDraft::new("alcoholic", &["an alcoholic"], PotentiallyNonInclusive)
            .alternative("<i>person with alcohol use disorder</i>")
            .feedback(POTENTIALLY_HARMFUL_UNLESS)
            .not_followed_by(&["drink", "beverage"]),
        RuleDraft::new("alcoholics", &["alcoholics"], PotentiallyNonInclusive)
            .alternative("<i>people with alcohol use disorder</i>")
            .feedback(POTENTIALLY_HARMFUL_UNLESS)
            .not_followed_by(&["anonymous"]),
        RuleDraft::new("cripple", &["a cripple"], NonInclusive)
            .alternative("<i>person with a physical disability, a physically disabled person</i>")
            .feedback(DEROGATORY),
        RuleDraft::new("crippled", &["crippled"], NonInclusive)
            .alternative("<i>has a physical disability, is physically disabled</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("daft", &["daft"], NonInclusive)
            .alternative("<i>uninformed, ignorant, foolish, inconsiderate, irrational, reckless</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("handicapped", &["handicapped"], NonInclusive)
            .alternative("<i>disabled, person with a disability</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("handicap", &["handicap"], NonInclusive)
            .alternative("<i>disability</i>")
            .feedback(POTENTIALLY_HARMFUL)
            .not_followed_by(&[
                "toilet",
                "toilets",
                "parking",
                "bathroom",
                "bathrooms",
                "stall",
                "stalls",
            ]),
        RuleDraft::new("insane", &["insane"], NonInclusive)
            .alternative(
                "<i>wild, confusing, unpredictable, impulsive, reckless, out of control, \
unbelievable, amazing, incomprehensible, nonsensical, outrageous, ridiculous</i>",
            )
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("imbecile", &["imbecile"], NonInclusive)
            .alternative("<i>uninformed, ignorant, foolish, inconsiderate, irrational, reckless</i>")
            .feedback(DEROGATORY),
        RuleDraft::new("specialNeeds", &["special needs"], NonInclusive)
            .alternative("<i>functional needs, support needs</i>")
            .alternative("<i>disabled, person with a disability</i>")
            .feedback(POTENTIALLY_HARMFUL_TWO_ALTERNATIVES),
        RuleDraft::new("hardOfHearing", &["hard-of-hearing"], NonInclusive)
            .alternative("<i>hard of hearing, partially deaf, has partial hearing loss</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("hearingImpaired", &["hearing impaired"], NonInclusive)
            .alternative("<i>deaf or hard of hearing, partially deaf, has partial hearing loss</i>")
            .feedback(POTENTIALLY_HARMFUL),
    ]
}

fn functioning_and_suicide() -> Vec<RuleDraft> {
    vec![
        RuleDraft::new("functioning", &["high functioning", "low functioning"], PotentiallyNonInclusive)
            .alternative("describing the specific characteristic or experience")
            .feedback(OWN_CONDITION_CAREFUL)
            .not_followed_by(&["autism"]),
        RuleDraft::new(
            "autismHigh",
            &["high functioning autism", "high-functioning autism"],
            NonInclusive,
        )
        .alternative(
            "<i>autism with high support needs</i> or describing the specific characteristic or experience",
        )
        .feedback(OWN_CONDITION_AVOID),
        RuleDraft::new(
            "autismLow",
            &["low functioning autism", "low-functioning autism"],
            NonInclusive,
        )
        .alternative(
            "<i>autism with low support needs</i> or describing the specific characteristic or experience",
        )
        .feedback(OWN_CONDITION_AVOID),
        RuleDraft::new("lame", &["lame"], NonInclusive)
            .alternative("<i>boring, lousy, unimpressive, sad, corny</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("lamer", &["lamer"], NonInclusive)
            .alternative("<i>more boring, lousier, more unimpressive, sadder, cornier</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("lamest", &["lamest"], NonInclusive)
            .alternative("<i>most boring, lousiest, most unimpressive, saddest, corniest</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("commitSuicide", &["commit suicide"], NonInclusive)
            .alternative("<i>take one's life, die by suicide, kill oneself</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("committingSuicide", &["committing suicide"], NonInclusive)
            .alternative("<i>taking one's life, dying by suicide, killing oneself</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("commitsSuicide", &["commits suicide"], NonInclusive)
            .alternative("<i>takes one's life, dies by suicide, kills oneself</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("committedSuicide", &["committed suicide"], NonInclusive)
            .alternative("<i>took one's life, died by suicide, killed themself</i>")
            .feedback(POTENTIALLY_HARMFUL),
    ]
}

fn idioms_and_insults() -> Vec<RuleDraft> {
    vec![
        RuleDraft::new("handicapParking", &["handicap parking"], NonInclusive)
            .alternative("<i>accessible parking</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("fellOnDeafEars", &["fell on deaf ears"], NonInclusive)
            .alternative("<i>was not addressed, was ignored, was disregarded</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("turnOnBlindEye", &["turn a blind eye"], NonInclusive)
            .alternative("<i>ignore, pretend not to notice</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("blindLeadingBlind", &["the blind leading the blind"], NonInclusive)
            .alternative("<i>ignorant, misguided, incompetent, unqualified, insensitive, unaware</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("handicapBathroom", &["handicap bathroom", "handicap bathrooms"], NonInclusive)
            .alternative("<i>accessible bathroom(s)</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("handicapToilet", &["handicap toilet", "handicap toilets"], NonInclusive)
            .alternative("<i>accessible toilet(s)</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("handicapStall", &["handicap stall", "handicap stalls"], NonInclusive)
            .alternative("<i>accessible stall(s)</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("stupid", &["stupid"], NonInclusive)
            .alternative("<i>uninformed, ignorant, foolish, inconsiderate, irrational, reckless</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("dumb", &["dumb", "dumber", "dumbest"], NonInclusive)
            .alternative("<i>uninformed, ignorant, foolish, inconsiderate, irrational, reckless</i>")
            .feedback(POTENTIALLY_HARMFUL)
            .not_preceded_by(&["deaf and"]),
        RuleDraft::new("deaf", &["deaf-mute", "deaf and dumb"], NonInclusive)
            .alternative("<i>deaf</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("addict", &["addict"], PotentiallyNonInclusive)
            .alternative(
                "<i>person with a (drug, alcohol, ...) addiction, person with substance abuse disorder</i>",
            )
            .feedback(POTENTIALLY_HARMFUL_UNLESS),
        RuleDraft::new("addicts", &["addicts"], PotentiallyNonInclusive)
            .alternative(
                "<i>people with a (drug, alcohol, ...) addiction, people with substance abuse disorder</i>",
            )
            .feedback(POTENTIALLY_HARMFUL_UNLESS),
        RuleDraft::new("brainDamaged", &["brain-damaged"], PotentiallyNonInclusive)
            .alternative("<i>person with a (traumatic) brain injury</i>")
            .feedback(POTENTIALLY_HARMFUL_UNLESS),
        RuleDraft::new(
            "differentlyAbled",
            &["differently abled", "differently-abled"],
            PotentiallyNonInclusive,
        )
        .alternative("<i>disabled, person with a disability</i>")
        .feedback(POTENTIALLY_HARMFUL_UNLESS),
        RuleDraft::new("epilepticFit", &["epileptic fit"], NonInclusive)
            .alternative("<i>epileptic seizure</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("epilepticFits", &["epileptic fits"], NonInclusive)
            .alternative("<i>epileptic seizures</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("sanityCheck", &["sanity check"], NonInclusive)
            .alternative("<i>final check, confidence check, rationality check, soundness check</i>")
            .feedback(POTENTIALLY_HARMFUL),
    ]
}

/// Rules sharing the trigger word "crazy".
///
/// Their filters partition the contexts so at most one of them fires for
/// any occurrence: the specific constructions claim their precursors, and
/// the standalone rule excludes exactly those precursors.
fn crazy_family() -> Vec<RuleDraft> {
    let to_be = forms_of_to_be_with_optional_intensifier();
    let not_to_be = negated_forms_of_to_be_with_optional_intensifier();

    vec![
        RuleDraft::new("to not be crazy about", &["crazy about"], NonInclusive)
            .alternative(
                "<i>to not be impressed by, to not be enthusiastic about, to not be into, to not like</i>",
            )
            .feedback(idiom("to not be crazy about"))
            .preceded_by(&not_to_be),
        RuleDraft::new("to be crazy about", &["crazy about"], NonInclusive)
            .alternative("<i>to love, to be obsessed with, to be infatuated with</i>")
            .feedback(idiom("to be crazy about"))
            .preceded_by(&to_be)
            .not_preceded_by(&not_to_be),
        RuleDraft::new("crazy in love", &["crazy in love"], NonInclusive)
            .alternative("<i>wildly in love, head over heels, infatuated</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("to go crazy", &["crazy"], NonInclusive)
            .alternative(
                "<i>to go wild, to go out of control, to go up the wall, to be aggravated, \
to get confused</i>",
            )
            .feedback(idiom("to go crazy"))
            .preceded_by(FORMS_OF_TO_GO)
            .not_followed_by(CRAZY_IN_LOVE_CONTINUATIONS),
        RuleDraft::new("to drive crazy", &["crazy"], NonInclusive)
            .alternative(
                "<i>to drive one to their limit, to get on one's last nerve, to make one livid, \
to aggravate, to make one's blood boil, to exasperate, to get into one's head</i>",
            )
            .feedback(idiom("to drive crazy"))
            .preceded_by(&combinations_of_drive_and_object_pronoun())
            .not_followed_by(CRAZY_IN_LOVE_CONTINUATIONS),
        RuleDraft::new("crazy", &["crazy"], NonInclusive)
            .alternative(
                "<i>wild, baffling, out of control, inexplicable, unbelievable, aggravating, \
shocking, intense, impulsive, chaotic, confused, mistaken, obsessed</i>",
            )
            .feedback(POTENTIALLY_HARMFUL)
            .not_preceded_by(&should_not_precede_standalone_crazy())
            .not_followed_by(CRAZY_IN_LOVE_CONTINUATIONS)
            .not_followed_and_preceded_by(
                &should_not_precede_standalone_crazy_when_followed_by_about(),
                CRAZY_ABOUT_CONTINUATIONS,
            ),
        RuleDraft::new("crazier", &["crazier"], NonInclusive)
            .alternative(
                "<i>more wild, baffling, out of control, inexplicable, unbelievable, aggravating, \
shocking, intense, impulsive, chaotic, confused, mistaken, obsessed</i>",
            )
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("craziest", &["craziest"], NonInclusive)
            .alternative(
                "<i>most wild, baffling, out of control, inexplicable, unbelievable, aggravating, \
shocking, intense, impulsive, chaotic, confused, mistaken, obsessed</i>",
            )
            .feedback(POTENTIALLY_HARMFUL),
    ]
}

fn mental_health() -> Vec<RuleDraft> {
    // "OCD" is matched lowercase but always displayed capitalized.
    let ocd_feedback = format!(
        "{} If you are referring to someone who has the medical condition, \
then state that they have OCD rather than that they are OCD.",
        prefill(MEDICAL_CONDITION, &[Some("OCD")])
    );

    vec![
        RuleDraft::new("psychopathic", &["psychopath", "psychopaths", "psychopathic"], NonInclusive)
            .alternative("<i>toxic, manipulative, unpredictable, impulsive, reckless, out of control</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("schizophrenic", &["schizophrenic", "bipolar"], PotentiallyNonInclusive)
            .alternative("<i>of two minds, chaotic, confusing</i>")
            .feedback(MEDICAL_CONDITION)
            .not_followed_by(&["disorder"]),
        RuleDraft::new("paranoid", &["paranoid"], PotentiallyNonInclusive)
            .alternative("<i>overly suspicious, unreasonable, defensive</i>")
            .feedback(MEDICAL_CONDITION)
            .not_followed_by(&["personality disorder", "delusion", "delusions", "ideation"]),
        RuleDraft::new("manic", &["manic"], PotentiallyNonInclusive)
            .alternative("<i>excited, raving, unbalanced, wild</i>")
            .feedback(MEDICAL_CONDITION)
            .not_followed_by(&[
                "episode",
                "episodes",
                "state",
                "states",
                "symptoms",
                "and depressive episodes",
                "and hypomanic",
                "or hypomanic",
            ]),
        RuleDraft::new("hysterical", &["hysterical"], NonInclusive)
            .alternative("<i>intense, vehement, piercing, chaotic</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("psycho", &["psycho", "psychos"], NonInclusive)
            .alternative("<i>toxic, distraught, unpredictable, reckless, out of control</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("neurotic", &["neurotic", "lunatic"], NonInclusive)
            .alternative("<i>distraught, unstable, startling, confusing, baffling</i>")
            .feedback(POTENTIALLY_HARMFUL),
        RuleDraft::new("sociopath", &["sociopath"], PotentiallyNonInclusive)
            .alternative("<i>person with antisocial personality disorder</i>")
            .alternative("<i>toxic, manipulative, cruel</i>")
            .feedback(PERSONALITY_DISORDER),
        RuleDraft::new("sociopaths", &["sociopaths"], PotentiallyNonInclusive)
            .alternative("<i>people with antisocial personality disorder</i>")
            .alternative("<i>toxic, manipulative, cruel</i>")
            .feedback(PERSONALITY_DISORDER),
        RuleDraft::new("narcissistic", &["narcissistic"], PotentiallyNonInclusive)
            .alternative("<i>person with narcissistic personality disorder</i>")
            .alternative("<i>selfish, egotistical, self-centered, self-absorbed, vain, toxic, manipulative</i>")
            .feedback(PERSONALITY_DISORDER)
            .not_followed_by(&["personality disorder"]),
        RuleDraft::new("OCD", &["ocd"], PotentiallyNonInclusive)
            .alternative("<i>pedantic, obsessed, perfectionist</i>")
            .feedback(ocd_feedback)
            .preceded_by(&forms_of_to_be_or_get_with_optional_intensifier()),
        RuleDraft::new("theMentallyIll", &["the mentally ill"], NonInclusive)
            .alternative("<i>people who are mentally ill</i>, <i>mentally ill people</i>")
            .feedback(POTENTIALLY_HARMFUL)
            .standalone(),
        RuleDraft::new("theDisabled", &["the disabled"], NonInclusive)
            .alternative("<i>people who have a disability</i>, <i>disabled people</i>")
            .feedback(POTENTIALLY_HARMFUL)
            .standalone(),
    ]
}

#[cfg(test)]
#[path = "disability_tests.rs"]
mod tests;
