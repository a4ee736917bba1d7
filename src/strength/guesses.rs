// src/strength/guesses.rs
//
// Picks the cheapest way for an attacker to cover the whole password with
// matches and brute-forced characters. Works in log2 space so long inputs
// cannot overflow.
use super::matching::Match;

/// Two totals closer than this are treated as equal.
const TIE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Characters `i..=j` guessed by brute force
    Bruteforce { i: usize, j: usize },
    Pattern(Match),
}

#[derive(Debug, Clone)]
pub struct GuessEstimate {
    pub log2_guesses: f64,
    /// Left-to-right decomposition the estimate is based on
    pub sequence: Vec<Segment>,
}

impl GuessEstimate {
    #[cfg(test)]
    pub fn guesses(&self) -> f64 {
        2f64.powf(self.log2_guesses)
    }

    pub fn log10_guesses(&self) -> f64 {
        self.log2_guesses * std::f64::consts::LOG10_2
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.sequence.iter().filter_map(|segment| match segment {
            Segment::Pattern(m) => Some(m),
            Segment::Bruteforce { .. } => None,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Choice {
    Start,
    Bruteforce,
    Match(usize),
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    log2: f64,
    segments: usize,
    choice: Choice,
}

impl Cell {
    fn better_than(&self, other: &Cell) -> bool {
        if (self.log2 - other.log2).abs() < TIE_EPSILON {
            self.segments < other.segments
        } else {
            self.log2 < other.log2
        }
    }
}

/// Minimum total guesses over all decompositions of `len` characters into
/// matches and single brute-forced characters. `cardinality` is the
/// brute-force alphabet size per character.
pub fn most_guessable_sequence(len: usize, matches: &[Match], cardinality: u32) -> GuessEstimate {
    if len == 0 {
        return GuessEstimate {
            log2_guesses: 0.0,
            sequence: Vec::new(),
        };
    }

    let mut ending_at: Vec<Vec<usize>> = vec![Vec::new(); len];
    for (idx, m) in matches.iter().enumerate() {
        if m.j < len && m.i <= m.j {
            ending_at[m.j].push(idx);
        }
    }

    let char_log2 = (cardinality.max(1) as f64).log2();
    let mut best: Vec<Cell> = Vec::with_capacity(len + 1);
    best.push(Cell {
        log2: 0.0,
        segments: 0,
        choice: Choice::Start,
    });

    for k in 1..=len {
        let prev = best[k - 1];
        let mut cell = Cell {
            log2: prev.log2 + char_log2,
            segments: prev.segments + 1,
            choice: Choice::Bruteforce,
        };

        for &idx in &ending_at[k - 1] {
            let m = &matches[idx];
            let start = best[m.i];
            let candidate = Cell {
                log2: start.log2 + m.guesses.log2(),
                segments: start.segments + 1,
                choice: Choice::Match(idx),
            };
            if candidate.better_than(&cell) {
                cell = candidate;
            }
        }

        best.push(cell);
    }

    let mut sequence = Vec::new();
    let mut k = len;
    while k > 0 {
        match best[k].choice {
            Choice::Match(idx) => {
                let m = &matches[idx];
                sequence.push(Segment::Pattern(m.clone()));
                k = m.i;
            }
            Choice::Bruteforce | Choice::Start => {
                sequence.push(Segment::Bruteforce { i: k - 1, j: k - 1 });
                k -= 1;
            }
        }
    }
    sequence.reverse();

    GuessEstimate {
        log2_guesses: best[len].log2.max(0.0),
        sequence: merge_bruteforce(sequence),
    }
}

fn merge_bruteforce(sequence: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(sequence.len());
    for segment in sequence {
        if let (Some(Segment::Bruteforce { j: last_j, .. }), Segment::Bruteforce { j, .. }) =
            (merged.last_mut(), &segment)
        {
            *last_j = *j;
            continue;
        }
        merged.push(segment);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::matching::Pattern;

    fn seq_match(i: usize, j: usize, guesses: f64, chars: &[char]) -> Match {
        Match::new(i, j, chars, Pattern::Sequence { ascending: true }, guesses)
    }

    #[test]
    fn empty_input_is_one_guess() {
        let estimate = most_guessable_sequence(0, &[], 0);
        assert_eq!(estimate.log2_guesses, 0.0);
        assert_eq!(estimate.guesses(), 1.0);
        assert!(estimate.sequence.is_empty());
    }

    #[test]
    fn pure_bruteforce() {
        let estimate = most_guessable_sequence(4, &[], 16);
        assert!((estimate.log2_guesses - 16.0).abs() < 1e-9);
        assert_eq!(estimate.sequence, vec![Segment::Bruteforce { i: 0, j: 3 }]);
    }

    #[test]
    fn cheaper_match_wins() {
        let chars: Vec<char> = "xabc".chars().collect();
        let matches = vec![seq_match(1, 3, 12.0, &chars)];
        let estimate = most_guessable_sequence(4, &matches, 26);
        let expected = 26f64.log2() + 12f64.log2();
        assert!((estimate.log2_guesses - expected).abs() < 1e-9);
        assert_eq!(estimate.matches().count(), 1);
    }

    #[test]
    fn expensive_match_is_ignored() {
        let chars: Vec<char> = "abc".chars().collect();
        let matches = vec![seq_match(0, 2, 1.0e9, &chars)];
        let estimate = most_guessable_sequence(3, &matches, 26);
        assert_eq!(estimate.matches().count(), 0);
    }

    #[test]
    fn overlapping_matches_pick_the_cheapest_cover() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let matches = vec![
            seq_match(0, 3, 100.0, &chars),
            seq_match(2, 5, 100.0, &chars),
            seq_match(0, 5, 50.0, &chars),
        ];
        let estimate = most_guessable_sequence(6, &matches, 26);
        assert!((estimate.log2_guesses - 50f64.log2()).abs() < 1e-9);
        assert_eq!(estimate.sequence.len(), 1);
    }

    #[test]
    fn ties_prefer_fewer_segments() {
        let chars: Vec<char> = "abcdef".chars().collect();
        let matches = vec![
            seq_match(0, 2, 8.0, &chars),
            seq_match(3, 5, 8.0, &chars),
            seq_match(0, 5, 64.0, &chars),
        ];
        let estimate = most_guessable_sequence(6, &matches, 26);
        assert_eq!(estimate.sequence.len(), 1);
    }
}
