// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::breach::BreachOutcome;
use crate::strength::classify::CharClassReport;
use crate::strength::matching::MatchKind;
use crate::strength::time::CrackTimes;

/// The four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// ASCII-only rule: anything that is not an ASCII letter or digit is a symbol.
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }

    /// Size of the alphabet an attacker has to cover for this class.
    pub fn cardinality(self) -> u32 {
        match self {
            CharClass::Lower | CharClass::Upper => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 33,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lower => "lowercase letters",
            CharClass::Upper => "uppercase letters",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "symbols",
        }
    }
}

// Password generation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl GenerationPolicy {
    /// Enabled classes in a fixed order.
    pub fn classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_lowercase {
            classes.push(CharClass::Lower);
        }
        if self.include_uppercase {
            classes.push(CharClass::Upper);
        }
        if self.include_numbers {
            classes.push(CharClass::Digit);
        }
        if self.include_symbols {
            classes.push(CharClass::Symbol);
        }
        classes
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: true,
        }
    }
}

/// Outcome of one analysis call. Holds no copy of the password.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub score: u8,
    pub entropy: f64,
    pub guesses_log10: f64,
    pub crack_time: String,
    pub crack_times: CrackTimes,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub checks: CharClassReport,
    /// Pattern kinds in the chosen decomposition, by first occurrence
    pub patterns: Vec<MatchKind>,
    pub breach: BreachOutcome,
}
