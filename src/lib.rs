//! # cmudict-rs: CMU Pronouncing Dictionary Engine
//!
//! Loads the CMU Pronouncing Dictionary (`cmudict.dict`) into memory and
//! answers phonetic queries over it.
//!
//! ## Queries
//!
//! - **Lookup** - every pronunciation of a word with IPA, syllables and rhymes
//! - **Syllables** - number of stressed (vowel) phonemes
//! - **Stress pattern** - stress digits in order, e.g. `"1 0 2"` for photograph
//! - **Rhymes** - words sharing the suffix from the last stressed phoneme
//! - **Pattern search** - glob patterns where `*` matches any run of characters
//!
//! ## Dictionary Format
//!
//! ```text
//! aluminium AH0 L UW1 M IH0 N AH0 M
//! aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
//! achill AE1 K IH0 L # place, irish
//! ```
//!
//! Vowels carry a stress digit: `0` none, `1` primary, `2` secondary. A `(N)`
//! suffix marks an alternate pronunciation of the same word.
//!
//! ## Example Usage
//!
//! ```
//! use cmudict::CmuDict;
//!
//! let source = "cat K AE1 T\nbat B AE1 T\ndog D AA1 G\n";
//! let dict = CmuDict::from_reader(source.as_bytes())?;
//!
//! assert_eq!(dict.count_syllables("Cat"), Some(1));
//! assert_eq!(dict.find_rhymes("cat", 10), vec!["bat"]);
//! assert_eq!(dict.search_by_pattern("*at", 10), vec!["cat", "bat"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Loader** - parses dictionary lines into an insertion-ordered index
//! - **Phoneme Analysis** - syllables, stress, rhyme keys and IPA per pronunciation
//! - **Rhyme Matcher** - scans the index for matching rhyme keys
//! - **Pattern Compiler** - turns globs into anchored, escaped regexes
//! - **CmuDict API** - main entry point combining all components

pub mod data;
pub mod loader;
pub mod matcher;
pub mod pattern;
pub mod phoneme;
pub mod phones;
pub mod rhyme;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use loader::{load_path, load_reader, parse_line};
pub use matcher::WordIndex;
pub use pattern::{compile_glob, glob_to_regex};
pub use phones::PhoneTypes;
pub use search::CmuDict;
pub use types::{
    DictError, DictStats, PhonemeDetail, Pronunciation, PronunciationInfo, Stress,
    TextSyllables, WordSyllables, DEFAULT_MAX_MATCHES, DEFAULT_MAX_RHYMES,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
