// cmudict-rs Type Definitions
// Core types for lookup records, phoneme details and errors

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// One pronunciation: ARPAbet tokens in source order, e.g. `["K", "AE1", "T"]`
pub type Pronunciation = Vec<String>;

/// Default number of rhymes returned by `find_rhymes` and attached to lookup records
pub const DEFAULT_MAX_RHYMES: usize = 10;

/// Default number of words returned by `search_by_pattern`
pub const DEFAULT_MAX_MATCHES: usize = 20;

/// Stress level carried by a vowel token's trailing digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stress {
    /// `0`
    Unstressed,
    /// `1`
    Primary,
    /// `2`
    Secondary,
}

impl Stress {
    /// Map a stress digit character to its level
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// Human readable description used by the CLI breakdowns
    pub fn description(&self) -> &'static str {
        match self {
            Stress::Unstressed => "no stress",
            Stress::Primary => "primary stress",
            Stress::Secondary => "secondary stress",
        }
    }
}

impl std::fmt::Display for Stress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stress::Unstressed => write!(f, "0"),
            Stress::Primary => write!(f, "1"),
            Stress::Secondary => write!(f, "2"),
        }
    }
}

/// Lookup record for a single stored pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PronunciationInfo {
    /// The phoneme tokens, e.g. `["K", "AE1", "T"]`
    pub phonemes: Vec<String>,

    /// Tokens joined with single spaces, e.g. `"K AE1 T"`
    pub arpabet: String,

    /// IPA rendering wrapped in slashes, e.g. `"/k æ t/"`
    pub ipa: String,

    /// Number of stressed (vowel) tokens
    pub syllables: usize,

    /// Words sharing this pronunciation's rhyme key
    pub rhymes: Vec<String>,
}

/// Per-token breakdown used for descriptive output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeDetail {
    /// Token as stored, e.g. `"AE1"`
    pub token: String,

    /// Base symbol with trailing stress digits removed, e.g. `"AE"`
    pub base: String,

    /// Category from the phoneme type table, `"unknown"` if missing
    pub category: String,

    /// Stress carried by the token's last character, if any
    pub stress: Option<Stress>,
}

/// Syllable count for one word of a line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSyllables {
    pub word: String,
    /// `None` when the word is not in the dictionary
    pub syllables: Option<usize>,
}

/// Syllable counts for a line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSyllables {
    pub words: Vec<WordSyllables>,

    /// Sum over the words that were found
    pub total: usize,
}

impl TextSyllables {
    /// Words that are missing from the dictionary
    pub fn unknown_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|w| w.syllables.is_none())
            .map(|w| w.word.as_str())
    }
}

/// Size of a loaded dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictStats {
    /// Distinct normalized words
    pub words: usize,

    /// Stored pronunciations across all words
    pub pronunciations: usize,
}

/// Dictionary errors
#[derive(Debug, Error)]
pub enum DictError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pattern compilation failed: {0}")]
    Pattern(String),
}
