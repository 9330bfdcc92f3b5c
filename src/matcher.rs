// Word Index
// Insertion-ordered word → pronunciations storage with pattern scanning

use crate::types::{DictStats, Pronunciation};
use regex::Regex;
use rustc_hash::FxHashMap;

/// Immutable dictionary index
///
/// Entries keep the order in which their words first appeared in the source,
/// and every scan (rhymes, pattern search) walks them in that order, so results
/// are deterministic for a given dictionary file.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    /// (word, pronunciations) in first-appearance order; never an empty list
    entries: Vec<(String, Vec<Pronunciation>)>,

    /// Word → position in `entries`
    positions: FxHashMap<String, usize>,
}

impl WordIndex {
    /// Append a pronunciation to a word, creating the entry if needed
    ///
    /// `word` must already be normalized.
    pub(crate) fn insert(&mut self, word: String, phonemes: Pronunciation) {
        match self.positions.get(&word) {
            Some(&pos) => self.entries[pos].1.push(phonemes),
            None => {
                self.positions.insert(word.clone(), self.entries.len());
                self.entries.push((word, vec![phonemes]));
            }
        }
    }

    /// Pronunciations of a normalized word, in source order
    pub fn get(&self, word: &str) -> Option<&[Pronunciation]> {
        self.positions
            .get(word)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Check whether a normalized word is present
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored pronunciations
    pub fn pronunciation_count(&self) -> usize {
        self.entries.iter().map(|(_, prons)| prons.len()).sum()
    }

    /// Words and pronunciation totals
    pub fn stats(&self) -> DictStats {
        DictStats {
            words: self.len(),
            pronunciations: self.pronunciation_count(),
        }
    }

    /// Iterate (word, pronunciations) in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.entries
            .iter()
            .map(|(word, prons)| (word.as_str(), prons.as_slice()))
    }

    /// Iterate words in first-appearance order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Collect words accepted by an anchored regex, stopping at `max_results`
    ///
    /// # Example
    /// ```
    /// # use cmudict::pattern::compile_glob;
    /// # use cmudict::loader::load_reader;
    /// let index = load_reader("cat K AE1 T\ndog D AA1 G\n".as_bytes()).unwrap();
    /// let re = compile_glob("c*").unwrap();
    /// assert_eq!(index.search(&re, 10), vec!["cat"]);
    /// ```
    pub fn search(&self, matcher: &Regex, max_results: usize) -> Vec<String> {
        let mut results = Vec::new();
        if max_results == 0 {
            return results;
        }

        for word in self.words() {
            if matcher.is_match(word) {
                results.push(word.to_string());
                if results.len() >= max_results {
                    break;
                }
            }
        }

        results
    }
}
