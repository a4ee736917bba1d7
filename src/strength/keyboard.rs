// src/strength/keyboard.rs
//
// Key adjacency graphs for the keyboard-walk matcher. Each graph maps a
// character to its neighbouring keys, one slot per direction, so a walk can
// count how often it changes direction.
use std::collections::HashMap;
use lazy_static::lazy_static;

const QWERTY: [&str; 4] = [
    "`~ 1! 2@ 3# 4$ 5% 6^ 7& 8* 9( 0) -_ =+",
    "    qQ wW eE rR tT yY uU iI oO pP [{ ]} \\|",
    "     aA sS dD fF gG hH jJ kK lL ;: '\"",
    "      zZ xX cC vV bB nN mM ,< .> /?",
];

const KEYPAD: [&str; 5] = [
    "  / * -",
    "7 8 9 +",
    "4 5 6",
    "1 2 3",
    "  0 .",
];

lazy_static! {
    static ref GRAPHS: Vec<AdjacencyGraph> = vec![
        AdjacencyGraph::build("qwerty", &QWERTY, true),
        AdjacencyGraph::build("keypad", &KEYPAD, false),
    ];
}

/// All graphs the keyboard matcher walks, built once per process.
pub fn graphs() -> &'static [AdjacencyGraph] {
    &GRAPHS
}

#[derive(Debug)]
pub struct AdjacencyGraph {
    pub name: &'static str,
    neighbors: HashMap<char, Vec<Option<&'static str>>>,
    /// Number of distinct keys a walk can start on
    pub starting_positions: usize,
    pub average_degree: f64,
}

impl AdjacencyGraph {
    fn build(name: &'static str, rows: &[&'static str], slanted: bool) -> Self {
        let mut positions: HashMap<(i32, i32), &'static str> = HashMap::new();

        for (y, line) in rows.iter().enumerate() {
            let slant = if slanted { y } else { 0 };
            for (offset, token) in tokens_with_offsets(line) {
                let x = (offset - slant) / (token.len() + 1);
                positions.insert((x as i32, y as i32), token);
            }
        }

        let mut neighbors = HashMap::new();
        for (&(x, y), token) in &positions {
            let around: Vec<(i32, i32)> = if slanted {
                slanted_neighbors(x, y).to_vec()
            } else {
                aligned_neighbors(x, y).to_vec()
            };
            let adjacent: Vec<Option<&'static str>> = around
                .iter()
                .map(|pos| positions.get(pos).copied())
                .collect();
            for c in token.chars() {
                neighbors.insert(c, adjacent.clone());
            }
        }

        let edges: usize = neighbors
            .values()
            .map(|adj| adj.iter().filter(|n| n.is_some()).count())
            .sum();
        let starting_positions = neighbors.len();
        let average_degree = if starting_positions == 0 {
            0.0
        } else {
            edges as f64 / starting_positions as f64
        };

        Self {
            name,
            neighbors,
            starting_positions,
            average_degree,
        }
    }

    /// If `next` is adjacent to `current`, returns the direction slot and
    /// whether `next` is the shifted character on its key.
    pub fn step(&self, current: char, next: char) -> Option<(usize, bool)> {
        let adjacent = self.neighbors.get(&current)?;
        adjacent.iter().enumerate().find_map(|(direction, key)| {
            let key = (*key)?;
            key.chars()
                .position(|c| c == next)
                .map(|idx| (direction, idx == 1))
        })
    }

    /// Whether `c` is the shifted character of its key.
    pub fn is_shifted(&self, c: char) -> bool {
        // Only the qwerty graph carries two characters per key.
        self.name == "qwerty" && SHIFTED.contains(c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.neighbors.contains_key(&c)
    }
}

const SHIFTED: &str = "~!@#$%^&*()_+QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?";

fn tokens_with_offsets(line: &'static str) -> Vec<(usize, &'static str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in line.char_indices() {
        if c == ' ' {
            if let Some(s) = start.take() {
                tokens.push((s, &line[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }
    tokens
}

fn slanted_neighbors(x: i32, y: i32) -> [(i32, i32); 6] {
    [
        (x - 1, y),
        (x, y - 1),
        (x + 1, y - 1),
        (x + 1, y),
        (x, y + 1),
        (x - 1, y + 1),
    ]
}

fn aligned_neighbors(x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (x - 1, y),
        (x - 1, y - 1),
        (x, y - 1),
        (x + 1, y - 1),
        (x + 1, y),
        (x + 1, y + 1),
        (x, y + 1),
        (x - 1, y + 1),
    ]
}
