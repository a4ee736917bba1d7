// src/strength/matching/repeat.rs
use super::{Match, Pattern};
use crate::strength::classify::cardinality_of;

const MAX_UNIT_LEN: usize = 3;
const MIN_REPEATS: usize = 3;

/// Maximal runs where a unit of one to three characters repeats at least
/// three times back to back, e.g. "aaaa" or "abcabcabc".
pub fn repeat_match(chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();

    for unit_len in 1..=MAX_UNIT_LEN {
        let mut i = 0;
        while i + unit_len <= chars.len() {
            let unit = &chars[i..i + unit_len];
            if unit_len > 1 && unit.iter().all(|c| *c == unit[0]) {
                // "aa" repeated is already reported as "a" repeated
                i += 1;
                continue;
            }

            let mut repeats = 1;
            while chars
                .get(i + repeats * unit_len..i + (repeats + 1) * unit_len)
                .map_or(false, |next| next == unit)
            {
                repeats += 1;
            }

            if repeats >= MIN_REPEATS {
                let j = i + repeats * unit_len - 1;
                let guesses = repeat_guesses(unit, repeats);
                matches.push(Match::new(
                    i,
                    j,
                    chars,
                    Pattern::Repeat {
                        base_token: unit.iter().collect(),
                        repeat_count: repeats,
                    },
                    guesses,
                ));
                i = j + 1;
            } else {
                i += 1;
            }
        }
    }

    matches
}

/// Guessing the unit by brute force, then how many times it repeats.
fn repeat_guesses(unit: &[char], repeats: usize) -> f64 {
    let base = (cardinality_of(unit) as f64).powi(unit.len() as i32);
    base * repeats as f64
}
