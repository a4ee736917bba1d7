// src/strength/matching/keyboard.rs
use super::{n_ck, Match, Pattern};
use crate::strength::keyboard::{graphs, AdjacencyGraph};

const MIN_WALK_LEN: usize = 3;

/// Runs of adjacent keys on any known layout, e.g. "qwerty", "zxcvfr", "7894".
pub fn keyboard_match(chars: &[char]) -> Vec<Match> {
    graphs()
        .iter()
        .flat_map(|graph| walk_graph(chars, graph))
        .collect()
}

fn walk_graph(chars: &[char], graph: &AdjacencyGraph) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut i = 0;

    while i + 1 < chars.len() {
        if !graph.contains(chars[i]) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut last_direction = None;
        let mut turns = 0;
        let mut shifted_count = usize::from(graph.is_shifted(chars[i]));

        while j < chars.len() {
            match graph.step(chars[j - 1], chars[j]) {
                Some((direction, shifted)) => {
                    if shifted {
                        shifted_count += 1;
                    }
                    if last_direction != Some(direction) {
                        turns += 1;
                        last_direction = Some(direction);
                    }
                    j += 1;
                }
                None => break,
            }
        }

        // chars[i..j] is the walk
        let len = j - i;
        if len >= MIN_WALK_LEN {
            let guesses = keyboard_guesses(graph, len, turns, shifted_count);
            matches.push(Match::new(
                i,
                j - 1,
                chars,
                Pattern::Keyboard {
                    graph: graph.name,
                    turns,
                    shifted_count,
                },
                guesses,
            ));
        }
        i = j;
    }

    matches
}

/// Counts every walk up to this length with at most this many turns,
/// from any starting key, then the ways shifted keys could be placed.
fn keyboard_guesses(graph: &AdjacencyGraph, len: usize, turns: usize, shifted: usize) -> f64 {
    let starts = graph.starting_positions as f64;
    let degree = graph.average_degree;

    let mut guesses = 0.0;
    for i in 2..=len {
        let possible_turns = turns.min(i - 1);
        for j in 1..=possible_turns {
            guesses += n_ck(i - 1, j - 1) * starts * degree.powi(j as i32);
        }
    }

    if shifted > 0 {
        let unshifted = len - shifted;
        if unshifted == 0 {
            guesses *= 2.0;
        } else {
            let variations: f64 = (1..=shifted.min(unshifted))
                .map(|k| n_ck(shifted + unshifted, k))
                .sum();
            guesses *= variations;
        }
    }

    guesses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &str) -> Vec<Match> {
        let chars: Vec<char> = s.chars().collect();
        keyboard_match(&chars)
    }

    #[test]
    fn straight_row() {
        let matches = run("qwerty");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!((m.i, m.j), (0, 5));
        assert_eq!(
            m.pattern,
            Pattern::Keyboard { graph: "qwerty", turns: 1, shifted_count: 0 }
        );
    }

    #[test]
    fn walk_with_turns() {
        let matches = run("zxcvfr");
        assert_eq!(matches.len(), 1);
        match &matches[0].pattern {
            Pattern::Keyboard { turns, .. } => assert_eq!(*turns, 2),
            other => panic!("unexpected pattern {:?}", other),
        }
    }

    #[test]
    fn keypad_walk() {
        let matches = run("7896");
        assert!(matches.iter().any(|m| matches!(
            m.pattern,
            Pattern::Keyboard { graph: "keypad", .. }
        )));
    }

    #[test]
    fn shifted_keys_cost_more() {
        let plain = run("qwer")[0].guesses;
        let shifted = run("qWeR")[0].guesses;
        assert!(shifted > plain);
    }

    #[test]
    fn guesses_grow_with_length() {
        let short = run("asd")[0].guesses;
        let long = run("asdf")[0].guesses;
        assert!(long > short);
    }

    #[test]
    fn unrelated_keys_do_not_match() {
        assert!(run("qpzm").is_empty());
    }
}
