// src/strength/dictionary.rs
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use lazy_static::lazy_static;
use thiserror::Error;

/// Words shorter than this are ignored; they match almost everywhere.
pub const MIN_WORD_LENGTH: usize = 3;

const BUNDLED_WORDS: &str = include_str!("../../data/words.txt");

lazy_static! {
    static ref BUNDLED: Arc<Dictionary> = Arc::new(Dictionary::from_text(BUNDLED_WORDS));
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dictionary file contains no usable words")]
    Empty,
}

/// Frequency-ordered wordlist. Rank 1 is the most common entry.
#[derive(Debug, Clone)]
pub struct Dictionary {
    ranks: HashMap<String, usize>,
    max_word_len: usize,
}

impl Dictionary {
    /// The wordlist compiled into the binary.
    pub fn bundled() -> Arc<Dictionary> {
        Arc::clone(&BUNDLED)
    }

    /// Load a wordlist from disk: one word per line, most common first.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path)?;
        let dictionary = Self::from_text(&text);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        log::info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Blank lines and `#` comments are skipped and do not consume a rank.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Self::from_words(words)
    }

    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranks = HashMap::new();
        let mut max_word_len = 0;
        let mut rank = 0;

        for word in words {
            let word = word.to_lowercase();
            let len = word.chars().count();
            if len < MIN_WORD_LENGTH || ranks.contains_key(&word) {
                continue;
            }
            rank += 1;
            max_word_len = max_word_len.max(len);
            ranks.insert(word, rank);
        }

        Self { ranks, max_word_len }
    }

    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_list_ranks_common_passwords_first() {
        let dict = Dictionary::bundled();
        assert_eq!(dict.rank("password"), Some(1));
        assert!(dict.rank("dragon").unwrap() < 20);
        assert_eq!(dict.rank("zzqxv"), None);
    }

    #[test]
    fn short_and_duplicate_words_do_not_take_a_rank() {
        let dict = Dictionary::from_words(["hello", "hi", "Hello", "world"]);
        assert_eq!(dict.rank("hello"), Some(1));
        assert_eq!(dict.rank("hi"), None);
        assert_eq!(dict.rank("world"), Some(2));
        assert_eq!(dict.max_word_len(), 5);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "bravo").unwrap();

        let dict = Dictionary::from_path(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.rank("bravo"), Some(2));
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = Dictionary::from_path(file.path());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
