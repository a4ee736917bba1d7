// src/strength/matching/mod.rs
//
// Each sub-matcher scans the password on its own and reports every
// occurrence it finds. Matches may overlap; picking a covering set is the
// estimator's job.
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use super::dictionary::Dictionary;

pub mod date;
pub mod dictionary;
pub mod keyboard;
pub mod repeat;
pub mod sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Repeat,
    Sequence,
    Keyboard,
    Dictionary,
    Date,
}

/// Kind-specific details of a match.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Repeat {
        base_token: String,
        repeat_count: usize,
    },
    Sequence {
        ascending: bool,
    },
    Keyboard {
        graph: &'static str,
        turns: usize,
        shifted_count: usize,
    },
    Dictionary {
        matched_word: String,
        rank: usize,
        reversed: bool,
        l33t_subs: usize,
        uppercase_variations: f64,
    },
    Date {
        separator: Option<char>,
        year: i32,
        month: u32,
        day: u32,
    },
}

impl Pattern {
    pub fn kind(&self) -> MatchKind {
        match self {
            Pattern::Repeat { .. } => MatchKind::Repeat,
            Pattern::Sequence { .. } => MatchKind::Sequence,
            Pattern::Keyboard { .. } => MatchKind::Keyboard,
            Pattern::Dictionary { .. } => MatchKind::Dictionary,
            Pattern::Date { .. } => MatchKind::Date,
        }
    }
}

/// A detected low-entropy substring. `i` and `j` are inclusive character
/// offsets into the password.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub pattern: Pattern,
    pub guesses: f64,
}

impl Match {
    pub fn new(i: usize, j: usize, chars: &[char], pattern: Pattern, guesses: f64) -> Self {
        Self {
            i,
            j,
            token: chars[i..=j].iter().collect(),
            pattern,
            guesses: guesses.max(1.0),
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.pattern.kind()
    }

    pub fn len(&self) -> usize {
        self.j + 1 - self.i
    }
}

/// Run every sub-matcher over the password. The result is unsorted.
pub fn omnimatch(chars: &[char], dictionary: &Dictionary) -> Vec<Match> {
    let mut matches = Vec::new();
    matches.extend(repeat::repeat_match(chars));
    matches.extend(sequence::sequence_match(chars));
    matches.extend(keyboard::keyboard_match(chars));
    matches.extend(dictionary::dictionary_match(chars, dictionary));
    matches.extend(date::date_match(chars));
    matches
}

/// Binomial coefficient as a float; guess counts outgrow integers quickly.
pub(crate) fn n_ck(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for d in 1..=k {
        result *= (n - k + d) as f64;
        result /= d as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn binomial() {
        assert_eq!(n_ck(5, 0), 1.0);
        assert_eq!(n_ck(5, 2), 10.0);
        assert_eq!(n_ck(10, 10), 1.0);
        assert_eq!(n_ck(2, 3), 0.0);
    }

    #[test]
    fn omnimatch_reports_each_kind() {
        let dict = Dictionary::bundled();
        let matches = omnimatch(&chars("aaaabcqwertymonkey1990"), &dict);
        let kinds: Vec<MatchKind> = matches.iter().map(|m| m.kind()).collect();
        for kind in [
            MatchKind::Repeat,
            MatchKind::Sequence,
            MatchKind::Keyboard,
            MatchKind::Dictionary,
            MatchKind::Date,
        ] {
            assert!(kinds.contains(&kind), "missing {:?}", kind);
        }
    }

    #[test]
    fn guesses_are_never_below_one() {
        let m = Match::new(0, 0, &chars("a"), Pattern::Sequence { ascending: true }, 0.0);
        assert_eq!(m.guesses, 1.0);
        assert_eq!(m.token, "a");
        assert_eq!(m.len(), 1);
    }
}
