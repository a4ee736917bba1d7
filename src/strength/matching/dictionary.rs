// src/strength/matching/dictionary.rs
use super::{Match, Pattern};
use crate::strength::dictionary::{Dictionary, MIN_WORD_LENGTH};

/// Upper bound on leet decodings tried per substring.
const MAX_LEET_VARIANTS: usize = 32;

fn leet_candidates(c: char) -> Option<&'static [char]> {
    let subs: &'static [char] = match c {
        '4' | '@' => &['a'],
        '8' => &['b'],
        '(' | '{' | '[' | '<' => &['c'],
        '3' => &['e'],
        '6' | '9' => &['g'],
        '1' | '|' => &['i', 'l'],
        '!' => &['i'],
        '0' => &['o'],
        '$' | '5' => &['s'],
        '7' | '+' => &['t'],
        '%' => &['x'],
        '2' => &['z'],
        _ => return None,
    };
    Some(subs)
}

/// Substrings found in the dictionary, compared case-insensitively, also
/// reversed and with common leet substitutions undone.
pub fn dictionary_match(chars: &[char], dictionary: &Dictionary) -> Vec<Match> {
    let mut matches = Vec::new();
    let max_len = dictionary.max_word_len();
    if max_len < MIN_WORD_LENGTH {
        return matches;
    }

    let lower: Vec<char> = chars.iter().map(|c| fold_case(*c)).collect();

    for i in 0..lower.len() {
        let last = lower.len().min(i + max_len);
        for j in (i + MIN_WORD_LENGTH - 1)..last {
            let token = &lower[i..=j];
            let case_factor = uppercase_variations(&chars[i..=j]);

            let word: String = token.iter().collect();
            if let Some(rank) = dictionary.rank(&word) {
                matches.push(word_match(chars, i, j, word.clone(), rank, false, 0, case_factor));
            }

            let reversed: String = token.iter().rev().collect();
            if reversed != word {
                if let Some(rank) = dictionary.rank(&reversed) {
                    matches.push(word_match(chars, i, j, reversed, rank, true, 0, case_factor));
                }
            }

            for (decoded, subs) in leet_variants(token) {
                if let Some(rank) = dictionary.rank(&decoded) {
                    matches.push(word_match(chars, i, j, decoded, rank, false, subs, case_factor));
                }
            }
        }
    }

    matches
}

#[allow(clippy::too_many_arguments)]
fn word_match(
    chars: &[char],
    i: usize,
    j: usize,
    matched_word: String,
    rank: usize,
    reversed: bool,
    l33t_subs: usize,
    uppercase_variations: f64,
) -> Match {
    let mut guesses = rank as f64 * uppercase_variations * 2f64.powi(l33t_subs as i32);
    if reversed {
        guesses *= 2.0;
    }
    Match::new(
        i,
        j,
        chars,
        Pattern::Dictionary {
            matched_word,
            rank,
            reversed,
            l33t_subs,
            uppercase_variations,
        },
        guesses,
    )
}

fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// 1 for all-lowercase, 2 for "Capitalized" or "ALLCAPS", otherwise a
/// doubling per uppercase letter.
fn uppercase_variations(token: &[char]) -> f64 {
    let upper = token.iter().filter(|c| c.is_uppercase()).count();
    let letters = token.iter().filter(|c| c.is_alphabetic()).count();
    if upper == 0 {
        1.0
    } else if upper == letters || (upper == 1 && token[0].is_uppercase()) {
        2.0
    } else {
        2f64.powi(upper as i32)
    }
}

/// Every decoding of the leet characters in `token`, with the number of
/// substitutions applied. Empty when the token has no leet characters.
fn leet_variants(token: &[char]) -> Vec<(String, usize)> {
    let subs = token.iter().filter(|c| leet_candidates(**c).is_some()).count();
    if subs == 0 {
        return Vec::new();
    }

    let mut variants: Vec<String> = vec![String::with_capacity(token.len())];
    for c in token {
        match leet_candidates(*c) {
            Some(options) => {
                let mut next = Vec::with_capacity(variants.len() * options.len());
                for prefix in &variants {
                    for option in options {
                        if next.len() == MAX_LEET_VARIANTS {
                            break;
                        }
                        let mut extended = prefix.clone();
                        extended.push(*option);
                        next.push(extended);
                    }
                }
                variants = next;
            }
            None => {
                for prefix in variants.iter_mut() {
                    prefix.push(*c);
                }
            }
        }
    }

    variants.into_iter().map(|v| (v, subs)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &str) -> Vec<Match> {
        let chars: Vec<char> = s.chars().collect();
        dictionary_match(&chars, &Dictionary::bundled())
    }

    fn find<'a>(matches: &'a [Match], word: &str) -> Option<&'a Match> {
        matches.iter().find(|m| match &m.pattern {
            Pattern::Dictionary { matched_word, .. } => matched_word == word,
            _ => false,
        })
    }

    #[test]
    fn exact_word_uses_rank() {
        let matches = run("password");
        let m = find(&matches, "password").expect("password should match");
        assert_eq!((m.i, m.j), (0, 7));
        assert_eq!(m.guesses, 1.0);
    }

    #[test]
    fn capitalisation_doubles_guesses() {
        let matches = run("Dragon");
        let m = find(&matches, "dragon").unwrap();
        let rank = Dictionary::bundled().rank("dragon").unwrap() as f64;
        assert_eq!(m.guesses, rank * 2.0);
    }

    #[test]
    fn leet_substitutions_are_undone() {
        let matches = run("p@ssw0rd");
        let m = find(&matches, "password").expect("leet password should match");
        match &m.pattern {
            Pattern::Dictionary { l33t_subs, .. } => assert_eq!(*l33t_subs, 2),
            other => panic!("unexpected pattern {:?}", other),
        }
        assert_eq!(m.guesses, 4.0);
    }

    #[test]
    fn ambiguous_leet_tries_both_letters() {
        let dict = Dictionary::from_words(["lid", "kid"]);
        let chars: Vec<char> = "1id".chars().collect();
        let matches = dictionary_match(&chars, &dict);
        assert_eq!(matches.len(), 1);
        assert!(find(&matches, "lid").is_some());
    }

    #[test]
    fn reversed_words_match() {
        let matches = run("yeknom");
        let m = find(&matches, "monkey").expect("reversed monkey should match");
        match &m.pattern {
            Pattern::Dictionary { reversed, .. } => assert!(*reversed),
            other => panic!("unexpected pattern {:?}", other),
        }
    }

    #[test]
    fn embedded_words_are_found() {
        let matches = run("xxmonkeyxx");
        let m = find(&matches, "monkey").unwrap();
        assert_eq!((m.i, m.j), (2, 7));
    }
}
