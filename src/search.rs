// cmudict-rs Query Facade
// Main API that composes the loader, phoneme analysis and scans

use crate::loader::{load_path, load_reader, normalize_word};
use crate::matcher::WordIndex;
use crate::pattern::compile_glob;
use crate::phoneme::{describe, rhyme_key, stress_pattern, syllable_count, to_ipa};
use crate::phones::PhoneTypes;
use crate::rhyme::rhymes_of;
use crate::types::{
    DictError, DictStats, PhonemeDetail, Pronunciation, PronunciationInfo, TextSyllables,
    WordSyllables, DEFAULT_MAX_RHYMES,
};
use std::io::BufRead;
use std::path::Path;

/// CMU Pronouncing Dictionary engine
///
/// Owns an immutable index built once at construction. Every query is a
/// read-only operation, so a `CmuDict` can be shared across threads behind an
/// `Arc` without locking.
///
/// Single-word queries trim and lowercase their input. Queries that report a
/// single value use the first listed pronunciation.
#[derive(Debug, Clone)]
pub struct CmuDict {
    index: WordIndex,
}

impl CmuDict {
    /// Load a dictionary file (e.g. `cmudict.dict`)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        Ok(Self {
            index: load_path(path)?,
        })
    }

    /// Load a dictionary from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        Ok(Self {
            index: load_reader(reader)?,
        })
    }

    /// Wrap an already loaded index
    pub fn from_index(index: WordIndex) -> Self {
        Self { index }
    }

    /// The underlying index
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.index.get(&normalize_word(word))
    }

    fn first_pronunciation(&self, word: &str) -> Option<&Pronunciation> {
        self.pronunciations(word).and_then(|prons| prons.first())
    }

    /// Look up every stored pronunciation of a word
    ///
    /// Each record carries the tokens, ARPAbet and IPA strings, the syllable
    /// count and up to [`DEFAULT_MAX_RHYMES`] rhymes for that pronunciation.
    ///
    /// # Example
    /// ```
    /// # use cmudict::CmuDict;
    /// let dict = CmuDict::from_reader("cat K AE1 T\nbat B AE1 T\n".as_bytes()).unwrap();
    /// let records = dict.lookup("CAT").unwrap();
    /// assert_eq!(records[0].arpabet, "K AE1 T");
    /// assert_eq!(records[0].rhymes, vec!["bat"]);
    /// ```
    pub fn lookup(&self, word: &str) -> Option<Vec<PronunciationInfo>> {
        let key = normalize_word(word);
        let prons = self.index.get(&key)?;

        let records = prons
            .iter()
            .map(|phonemes| PronunciationInfo {
                phonemes: phonemes.clone(),
                arpabet: phonemes.join(" "),
                ipa: to_ipa(phonemes),
                syllables: syllable_count(phonemes),
                rhymes: rhymes_of(&self.index, &key, phonemes, DEFAULT_MAX_RHYMES),
            })
            .collect();

        Some(records)
    }

    /// Check whether a word is in the dictionary
    pub fn word_exists(&self, word: &str) -> bool {
        self.index.contains(&normalize_word(word))
    }

    /// Syllable count of the first pronunciation
    pub fn count_syllables(&self, word: &str) -> Option<usize> {
        self.first_pronunciation(word).map(|p| syllable_count(p))
    }

    /// Stress pattern of the first pronunciation, e.g. `"0 1 0"` for banana
    pub fn get_stress_pattern(&self, word: &str) -> Option<String> {
        self.first_pronunciation(word).map(|p| stress_pattern(p))
    }

    /// Rhyme key of the first pronunciation
    ///
    /// `None` when the word is unknown or has no stressed token.
    pub fn get_rhyming_part(&self, word: &str) -> Option<&[String]> {
        self.first_pronunciation(word).and_then(|p| rhyme_key(p))
    }

    /// First pronunciation with tokens joined by spaces
    pub fn get_phonemes_readable(&self, word: &str) -> Option<String> {
        self.first_pronunciation(word).map(|p| p.join(" "))
    }

    /// Words rhyming with the first pronunciation of `word`
    ///
    /// Empty when the word is unknown.
    pub fn find_rhymes(&self, word: &str, max_results: usize) -> Vec<String> {
        let key = normalize_word(word);
        match self.index.get(&key).and_then(|prons| prons.first()) {
            Some(phonemes) => rhymes_of(&self.index, &key, phonemes, max_results),
            None => Vec::new(),
        }
    }

    /// Words rhyming with an explicit pronunciation, excluding `word`
    pub fn find_rhymes_by_phonemes(
        &self,
        word: &str,
        phonemes: &[String],
        max_results: usize,
    ) -> Vec<String> {
        rhymes_of(&self.index, &normalize_word(word), phonemes, max_results)
    }

    /// Words matching a glob pattern (`*` = any run of characters)
    ///
    /// Case-insensitive and anchored at both ends. Results follow index order.
    pub fn search_by_pattern(&self, pattern: &str, max_results: usize) -> Vec<String> {
        match compile_glob(pattern) {
            Ok(re) => self.index.search(&re, max_results),
            Err(e) => {
                log::warn!("Ignoring pattern {:?}: {}", pattern, e);
                Vec::new()
            }
        }
    }

    /// Token-by-token breakdown of the first pronunciation
    pub fn phoneme_breakdown(
        &self,
        word: &str,
        phone_types: &PhoneTypes,
    ) -> Option<Vec<PhonemeDetail>> {
        self.first_pronunciation(word)
            .map(|p| describe(p, phone_types))
    }

    /// Syllable counts for each whitespace-separated word of a line
    ///
    /// Commas are dropped before lookup; unknown words count as zero towards
    /// the total.
    pub fn count_text_syllables(&self, text: &str) -> TextSyllables {
        let words: Vec<WordSyllables> = text
            .split_whitespace()
            .map(|w| w.replace(',', ""))
            .filter(|w| !w.is_empty())
            .map(|w| {
                let syllables = self.count_syllables(&w);
                WordSyllables {
                    word: w.to_lowercase(),
                    syllables,
                }
            })
            .collect();

        let total = words.iter().filter_map(|w| w.syllables).sum();
        TextSyllables { words, total }
    }

    /// Number of words and pronunciations loaded
    pub fn stats(&self) -> DictStats {
        self.index.stats()
    }
}
