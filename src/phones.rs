// Phoneme Type Table
// Maps ARPAbet base symbols to categories (vowel, stop, fricative, ...)

use crate::data::PHONES_DATA;
use crate::types::DictError;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Category reported for symbols missing from the table
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Phoneme type table loaded from a `cmudict.phones` style file
///
/// Only used for descriptive output; a missing symbol is never an error.
#[derive(Debug, Clone, Default)]
pub struct PhoneTypes {
    /// Symbols in file order
    symbols: Vec<String>,

    /// Symbol → category
    categories: FxHashMap<String, String>,
}

impl PhoneTypes {
    /// Table built from the embedded standard `cmudict.phones`
    pub fn builtin() -> Self {
        Self::parse_lines(PHONES_DATA.lines())
    }

    /// Load a table from a tab-separated file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|source| DictError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a table from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::parse_lines(lines.iter().map(String::as_str)))
    }

    fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let mut table = Self::default();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            if let (Some(symbol), Some(category), None) =
                (fields.next(), fields.next(), fields.next())
            {
                if !table.categories.contains_key(symbol) {
                    table.symbols.push(symbol.to_string());
                }
                table
                    .categories
                    .insert(symbol.to_string(), category.to_string());
            }
        }

        table
    }

    /// Category of a base symbol, `"unknown"` if absent
    pub fn category(&self, symbol: &str) -> &str {
        self.categories
            .get(symbol)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// (symbol, category) pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols
            .iter()
            .map(move |s| (s.as_str(), self.category(s)))
    }
}
