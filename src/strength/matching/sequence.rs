// src/strength/matching/sequence.rs
use super::{Match, Pattern};
use crate::models::CharClass;

const MIN_SEQUENCE_LEN: usize = 3;

/// Maximal runs of consecutive code points with step +1 or -1 inside one
/// class, e.g. "abcd", "4321", "XYZ".
pub fn sequence_match(chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    if chars.len() < MIN_SEQUENCE_LEN {
        return matches;
    }

    let mut i = 0;
    while i + 1 < chars.len() {
        let delta = step(chars[i], chars[i + 1]);
        if delta.is_none() {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j + 1 < chars.len() && step(chars[j], chars[j + 1]) == delta {
            j += 1;
        }

        if j - i + 1 >= MIN_SEQUENCE_LEN {
            let ascending = delta == Some(1);
            let guesses = sequence_guesses(&chars[i..=j], ascending);
            matches.push(Match::new(
                i,
                j,
                chars,
                Pattern::Sequence { ascending },
                guesses,
            ));
        }
        // The last character may start a run in the other direction.
        i = j;
    }

    matches
}

fn step(a: char, b: char) -> Option<i64> {
    let class = CharClass::of(a);
    if class == CharClass::Symbol || CharClass::of(b) != class {
        return None;
    }
    match b as i64 - a as i64 {
        1 => Some(1),
        -1 => Some(-1),
        _ => None,
    }
}

fn sequence_guesses(token: &[char], ascending: bool) -> f64 {
    let first = token[0];
    let base = if matches!(first, 'a' | 'z' | 'A' | 'Z' | '0' | '1' | '9') {
        4.0
    } else if first.is_ascii_digit() {
        10.0
    } else {
        26.0
    };
    let direction = if ascending { 1.0 } else { 2.0 };
    base * direction * token.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &str) -> Vec<Match> {
        let chars: Vec<char> = s.chars().collect();
        sequence_match(&chars)
    }

    #[test]
    fn ascending_letters() {
        let matches = run("abcd");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].i, matches[0].j), (0, 3));
        assert_eq!(matches[0].guesses, 16.0);
    }

    #[test]
    fn descending_digits() {
        let matches = run("x4321");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, "4321");
        assert_eq!(matches[0].pattern, Pattern::Sequence { ascending: false });
        assert_eq!(matches[0].guesses, 10.0 * 2.0 * 4.0);
    }

    #[test]
    fn peak_splits_into_two_runs() {
        let matches = run("abcba");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].token, "abc");
        assert_eq!(matches[1].token, "cba");
    }

    #[test]
    fn classes_do_not_mix() {
        assert!(run("89:;").is_empty());
        assert!(run("yzAB").is_empty());
        assert!(run("ab").is_empty());
    }

    #[test]
    fn guesses_grow_with_length() {
        let mut last = 0.0;
        for s in ["mno", "mnop", "mnopq", "mnopqr"] {
            let g = run(s)[0].guesses;
            assert!(g >= last);
            last = g;
        }
    }
}
