// Rhyme Matcher
// Finds words whose pronunciations share a rhyme key

use crate::matcher::WordIndex;
use crate::phoneme::rhyme_key;

/// Find words rhyming with `phonemes`, excluding `word` itself
///
/// A candidate rhymes when any of its pronunciations has a rhyme key equal
/// to the target's (exact token equality, stress digits included). Words are
/// visited in index order and the scan stops once `max_results` are found.
///
/// `word` must already be normalized.
///
/// # Example
/// ```
/// # use cmudict::loader::load_reader;
/// # use cmudict::rhyme::rhymes_of;
/// let index = load_reader("cat K AE1 T\nbat B AE1 T\ndog D AA1 G\n".as_bytes()).unwrap();
/// let cat = &index.get("cat").unwrap()[0];
/// assert_eq!(rhymes_of(&index, "cat", cat, 10), vec!["bat"]);
/// ```
pub fn rhymes_of(
    index: &WordIndex,
    word: &str,
    phonemes: &[String],
    max_results: usize,
) -> Vec<String> {
    let Some(target) = rhyme_key(phonemes) else {
        return Vec::new();
    };

    let mut rhymes = Vec::new();
    if max_results == 0 {
        return rhymes;
    }

    for (other, prons) in index.iter() {
        if other == word {
            continue;
        }

        // Keys are unique in the index, so each word is pushed at most once
        if prons.iter().any(|p| rhyme_key(p) == Some(target)) {
            rhymes.push(other.to_string());
            if rhymes.len() >= max_results {
                break;
            }
        }
    }

    rhymes
}
