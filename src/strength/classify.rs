// src/strength/classify.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::CharClass;

/// Which character classes a string uses, and how long it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharClassReport {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Length in characters, not bytes
    pub length: usize,
}

impl CharClassReport {
    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.has_lower,
            CharClass::Upper => self.has_upper,
            CharClass::Digit => self.has_digit,
            CharClass::Symbol => self.has_symbol,
        }
    }

    pub fn missing(&self) -> Vec<CharClass> {
        CharClass::ALL.iter().copied().filter(|c| !self.has(*c)).collect()
    }

    /// Bruteforce alphabet size implied by the classes present.
    pub fn cardinality(&self) -> u32 {
        CharClass::ALL
            .iter()
            .filter(|c| self.has(**c))
            .map(|c| c.cardinality())
            .sum()
    }
}

pub fn classify(input: &str) -> CharClassReport {
    let mut report = CharClassReport::default();
    for c in input.chars() {
        report.length += 1;
        match CharClass::of(c) {
            CharClass::Lower => report.has_lower = true,
            CharClass::Upper => report.has_upper = true,
            CharClass::Digit => report.has_digit = true,
            CharClass::Symbol => report.has_symbol = true,
        }
    }
    report
}

/// Cardinality of the classes used by a slice of characters.
pub fn cardinality_of(chars: &[char]) -> u32 {
    let mut seen = [false; 4];
    for c in chars {
        seen[CharClass::of(*c) as usize] = true;
    }
    CharClass::ALL
        .iter()
        .zip(seen.iter())
        .filter(|(_, s)| **s)
        .map(|(c, _)| c.cardinality())
        .sum()
}
