// src/strength/matching/date.rs
use super::{Match, Pattern};

/// Dates near this year are the ones people pick.
pub const REFERENCE_YEAR: i32 = 2025;
const MIN_YEAR_SPACE: i32 = 20;
const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 2050;
const SEPARATORS: &[char] = &[' ', '-', '/', '\\', '_', '.'];

/// Where a run of N digits can be cut into day, month and year pieces.
fn digit_splits(len: usize) -> &'static [(usize, usize)] {
    match len {
        4 => &[(1, 2), (2, 3)],
        5 => &[(1, 3), (2, 3)],
        6 => &[(1, 2), (2, 4), (4, 5)],
        7 => &[(1, 3), (2, 3), (4, 5), (4, 6)],
        8 => &[(2, 4), (4, 6)],
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dmy {
    day: u32,
    month: u32,
    year: i32,
}

/// Date-shaped tokens: 4 to 8 digit runs ("19900101", "1290") and
/// separated forms ("1/2/1990", "01-02-90").
pub fn date_match(chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    let n = chars.len();

    for i in 0..n {
        for j in (i + 3)..(i + 8).min(n) {
            let token = &chars[i..=j];
            if !token.iter().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let text: String = token.iter().collect();
            let best = digit_splits(token.len())
                .iter()
                .filter_map(|&(k, l)| {
                    let a = text[..k].parse().ok()?;
                    let b = text[k..l].parse().ok()?;
                    let c = text[l..].parse().ok()?;
                    map_ints_to_dmy([a, b, c])
                })
                .min_by_key(|dmy| (dmy.year - REFERENCE_YEAR).abs());
            if let Some(dmy) = best {
                matches.push(date(chars, i, j, None, dmy));
            }
        }
    }

    for i in 0..n {
        for j in (i + 5)..(i + 10).min(n) {
            if let Some((separator, dmy)) = parse_separated(&chars[i..=j]) {
                matches.push(date(chars, i, j, Some(separator), dmy));
            }
        }
    }

    // Drop dates strictly inside another date, e.g. "1990" within "01011990".
    let spans: Vec<(usize, usize)> = matches.iter().map(|m| (m.i, m.j)).collect();
    matches.retain(|m| {
        !spans
            .iter()
            .any(|&(i, j)| (i, j) != (m.i, m.j) && i <= m.i && j >= m.j)
    });
    matches
}

fn date(chars: &[char], i: usize, j: usize, separator: Option<char>, dmy: Dmy) -> Match {
    let year_space = (dmy.year - REFERENCE_YEAR).abs().max(MIN_YEAR_SPACE) as f64;
    let mut guesses = year_space * 365.0;
    if separator.is_some() {
        guesses *= 4.0;
    }
    Match::new(
        i,
        j,
        chars,
        Pattern::Date {
            separator,
            year: dmy.year,
            month: dmy.month,
            day: dmy.day,
        },
        guesses,
    )
}

/// `d{1,2} S d{1,2} S d{2,4}` or the year-first mirror, with one separator.
fn parse_separated(token: &[char]) -> Option<(char, Dmy)> {
    let separator = *token.iter().find(|c| !c.is_ascii_digit())?;
    if !SEPARATORS.contains(&separator) {
        return None;
    }
    let text: String = token.iter().collect();
    let parts: Vec<&str> = text.split(separator).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let lens: Vec<usize> = parts.iter().map(|p| p.len()).collect();
    let short = |l: usize| (1..=2).contains(&l);
    let long = |l: usize| (2..=4).contains(&l);
    let shape_ok = (short(lens[0]) && short(lens[1]) && long(lens[2]))
        || (long(lens[0]) && short(lens[1]) && short(lens[2]));
    if !shape_ok {
        return None;
    }

    let a = parts[0].parse().ok()?;
    let b = parts[1].parse().ok()?;
    let c = parts[2].parse().ok()?;
    map_ints_to_dmy([a, b, c]).map(|dmy| (separator, dmy))
}

/// Try the year at either end and the remaining pair as day/month or
/// month/day.
fn map_ints_to_dmy(ints: [i32; 3]) -> Option<Dmy> {
    if ints[1] > 31 || ints[1] <= 0 {
        return None;
    }
    let candidates = [
        (ints[2], [ints[0], ints[1]]),
        (ints[0], [ints[1], ints[2]]),
    ];
    candidates.iter().find_map(|&(year, rest)| {
        let year = two_to_four_digit_year(year)?;
        map_ints_to_dm(rest).map(|(day, month)| Dmy { day, month, year })
    })
}

fn map_ints_to_dm(pair: [i32; 2]) -> Option<(u32, u32)> {
    [(pair[0], pair[1]), (pair[1], pair[0])]
        .iter()
        .find(|&&(day, month)| valid_day_month(day, month))
        .map(|&(day, month)| (day as u32, month as u32))
}

fn valid_day_month(day: i32, month: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    let max_day = match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    (1..=max_day).contains(&day)
}

fn two_to_four_digit_year(year: i32) -> Option<i32> {
    match year {
        0..=50 => Some(2000 + year),
        51..=99 => Some(1900 + year),
        y if (MIN_YEAR..=MAX_YEAR).contains(&y) => Some(y),
        _ => None,
    }
}
