// src/strength/feedback.rs
use super::classify::CharClassReport;
use super::guesses::{GuessEstimate, Segment};
use super::matching::{Match, MatchKind, Pattern};
use crate::models::CharClass;

/// Score cutoffs on entropy bits: below 28 is 0, below 36 is 1, below 60
/// is 2, below 128 is 3, anything else is 4.
pub const SCORE_THRESHOLDS: [f64; 4] = [28.0, 36.0, 60.0, 128.0];

pub const MIN_RECOMMENDED_LENGTH: usize = 8;

pub fn score(entropy_bits: f64) -> u8 {
    SCORE_THRESHOLDS
        .iter()
        .position(|threshold| entropy_bits < *threshold)
        .unwrap_or(SCORE_THRESHOLDS.len()) as u8
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

pub fn feedback(estimate: &GuessEstimate, report: &CharClassReport) -> Feedback {
    let cardinality = report.cardinality();
    let sole_match = estimate.sequence.len() == 1;

    let warning = weakest_link(estimate, cardinality)
        .and_then(|m| warning_for(m, sole_match));

    let mut suggestions = Vec::new();

    let missing = report.missing();
    if !missing.is_empty() {
        push_unique(&mut suggestions, missing_classes_suggestion(&missing));
    }

    if report.length < MIN_RECOMMENDED_LENGTH {
        push_unique(
            &mut suggestions,
            format!("Use at least {} characters", MIN_RECOMMENDED_LENGTH),
        );
    }

    let mut seen_kinds = Vec::new();
    for m in estimate.matches() {
        if seen_kinds.contains(&m.kind()) {
            continue;
        }
        seen_kinds.push(m.kind());
        push_unique(&mut suggestions, suggestion_for(m).to_string());
    }

    Feedback { warning, suggestions }
}

/// The match in the chosen decomposition that saves the attacker the most
/// work compared to brute-forcing the same characters.
fn weakest_link(estimate: &GuessEstimate, cardinality: u32) -> Option<&Match> {
    let char_log2 = (cardinality.max(1) as f64).log2();
    estimate
        .sequence
        .iter()
        .filter_map(|segment| match segment {
            Segment::Pattern(m) => {
                let saved = m.len() as f64 * char_log2 - m.guesses.log2();
                Some((m, saved))
            }
            Segment::Bruteforce { .. } => None,
        })
        .filter(|(_, saved)| *saved > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(m, _)| m)
}

fn warning_for(m: &Match, sole_match: bool) -> Option<String> {
    let text = match &m.pattern {
        Pattern::Repeat { base_token, .. } if base_token.chars().count() == 1 => {
            "Repeats like \"aaa\" are easy to guess"
        }
        Pattern::Repeat { .. } => {
            "Repeats like \"abcabcabc\" are only slightly harder to guess than \"abc\""
        }
        Pattern::Sequence { .. } => "Sequences like abc or 6543 are easy to guess",
        Pattern::Keyboard { turns: 1, .. } => "Straight rows of keys are easy to guess",
        Pattern::Keyboard { .. } => "Short keyboard patterns are easy to guess",
        Pattern::Dictionary { rank, reversed, l33t_subs, .. } => {
            if sole_match && !*reversed && *l33t_subs == 0 {
                if *rank <= 10 {
                    "This is a top-10 common password"
                } else if *rank <= 100 {
                    "This is a top-100 common password"
                } else {
                    "This is a very common password"
                }
            } else if sole_match {
                "This is similar to a commonly used password"
            } else {
                "Common words and names are easy to guess"
            }
        }
        Pattern::Date { .. } => "Dates are often easy to guess",
    };
    Some(text.to_string())
}

fn suggestion_for(m: &Match) -> &'static str {
    match &m.pattern {
        Pattern::Repeat { .. } => "Avoid repeated words and characters",
        Pattern::Sequence { .. } => "Avoid sequences",
        Pattern::Keyboard { .. } => "Avoid keyboard patterns like qwerty or zxcvbn",
        Pattern::Dictionary { l33t_subs, .. } if *l33t_subs > 0 => {
            "Predictable substitutions like '@' instead of 'a' don't help very much"
        }
        Pattern::Dictionary { reversed: true, .. } => "Reversed words aren't much harder to guess",
        Pattern::Dictionary { .. } => "Add another word or two. Uncommon words are better",
        Pattern::Date { .. } => "Avoid dates and years that are associated with you",
    }
}

fn missing_classes_suggestion(missing: &[CharClass]) -> String {
    let labels: Vec<&str> = missing.iter().map(|c| c.label()).collect();
    let listed = match labels.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        None => String::new(),
    };
    format!("Add {}", listed)
}

fn push_unique(suggestions: &mut Vec<String>, suggestion: String) {
    if !suggestions.contains(&suggestion) {
        suggestions.push(suggestion);
    }
}

/// Kinds of pattern present in the decomposition, in order of appearance.
pub fn pattern_kinds(estimate: &GuessEstimate) -> Vec<MatchKind> {
    let mut kinds = Vec::new();
    for m in estimate.matches() {
        if !kinds.contains(&m.kind()) {
            kinds.push(m.kind());
        }
    }
    kinds
}
