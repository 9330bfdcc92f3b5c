// Dictionary Loader
// Parses cmudict text into an insertion-ordered word index

use crate::matcher::WordIndex;
use crate::types::{DictError, Pronunciation};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a dictionary file into a word index
///
/// Fails only when the file cannot be opened or read. Malformed lines are
/// skipped.
///
/// # Example
/// ```no_run
/// # use cmudict::loader::load_path;
/// let index = load_path("cmudict.dict").unwrap();
/// assert!(index.contains("hello"));
/// ```
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<WordIndex, DictError> {
    let path = path.as_ref();
    log::info!("Loading CMU dictionary from {}", path.display());

    let file = File::open(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_reader(BufReader::new(file)).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a dictionary from any buffered reader
///
/// Lines are decoded byte-for-byte as Latin-1, so arbitrary bytes never
/// cause a decoding failure.
pub fn load_reader<R: BufRead>(mut reader: R) -> std::io::Result<WordIndex> {
    let mut index = WordIndex::default();
    let mut buf = Vec::new();
    let mut skipped = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = decode_latin1(&buf);
        match parse_line(&line) {
            Some((word, phonemes)) => index.insert(word, phonemes),
            None => skipped += 1,
        }
    }

    log::info!(
        "Loaded {} words with {} pronunciations",
        index.len(),
        index.pronunciation_count()
    );
    log::debug!("Skipped {} blank, comment or malformed lines", skipped);

    Ok(index)
}

/// Parse one dictionary line into (normalized word, pronunciation)
///
/// Returns `None` for blank lines, comment-only lines and lines with fewer
/// than two tokens.
///
/// # Examples
/// ```
/// # use cmudict::loader::parse_line;
/// let (word, phonemes) = parse_line("Read(2) R EH1 D  # past tense").unwrap();
/// assert_eq!(word, "read");
/// assert_eq!(phonemes, vec!["R", "EH1", "D"]);
///
/// assert!(parse_line("# comment").is_none());
/// assert!(parse_line("lonely").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<(String, Pronunciation)> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = content.split_whitespace();
    let raw_word = tokens.next()?;
    let phonemes: Pronunciation = tokens.map(String::from).collect();
    if phonemes.is_empty() {
        return None;
    }

    let word = strip_variant(&raw_word.to_lowercase()).to_string();
    Some((word, phonemes))
}

/// Remove a trailing `(N)` variant marker, e.g. `"read(2)"` → `"read"`
///
/// Only one marker at the very end is removed, and only when the parentheses
/// enclose one or more ASCII digits.
pub fn strip_variant(word: &str) -> &str {
    let Some(inner) = word.strip_suffix(')') else {
        return word;
    };
    let Some(open) = inner.rfind('(') else {
        return word;
    };

    let digits = &inner[open + 1..];
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        &word[..open]
    } else {
        word
    }
}

/// Normalize a query word the way index keys are normalized
#[inline]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Decode bytes as Latin-1 (each byte is the code point of the same value)
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
