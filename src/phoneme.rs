// Phoneme Analysis
// Pure functions over a single pronunciation

use crate::data::ipa_symbol;
use crate::phones::PhoneTypes;
use crate::types::{PhonemeDetail, Stress};

/// Stress digits used by CMUdict vowel tokens
const STRESS_DIGITS: &[char] = &['0', '1', '2'];

/// Check whether a token carries a stress digit anywhere in it
///
/// Only vowel tokens carry stress digits, so this doubles as a vowel test.
///
/// # Examples
/// ```
/// # use cmudict::phoneme::carries_stress;
/// assert!(carries_stress("AE1"));
/// assert!(!carries_stress("T"));
/// ```
#[inline]
pub fn carries_stress(token: &str) -> bool {
    token.contains(STRESS_DIGITS)
}

/// Count syllables as the number of stressed tokens
pub fn syllable_count(phonemes: &[String]) -> usize {
    phonemes.iter().filter(|p| carries_stress(p)).count()
}

/// Trailing stress digit of a token, if its last character is one
#[inline]
fn trailing_stress(token: &str) -> Option<char> {
    token.chars().last().filter(|c| STRESS_DIGITS.contains(c))
}

/// Stress pattern: trailing stress digits in token order, space separated
///
/// # Examples
/// ```
/// # use cmudict::phoneme::stress_pattern;
/// let banana: Vec<String> = ["B", "AH0", "N", "AE1", "N", "AH0"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(stress_pattern(&banana), "0 1 0");
/// ```
pub fn stress_pattern(phonemes: &[String]) -> String {
    let digits: Vec<String> = phonemes
        .iter()
        .filter_map(|p| trailing_stress(p))
        .map(String::from)
        .collect();
    digits.join(" ")
}

/// Rhyme key: suffix from the last stressed token through the end
///
/// Returns `None` when no token carries stress.
///
/// # Examples
/// ```
/// # use cmudict::phoneme::rhyme_key;
/// let cat: Vec<String> = ["K", "AE1", "T"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(rhyme_key(&cat), Some(&cat[1..]));
/// ```
pub fn rhyme_key(phonemes: &[String]) -> Option<&[String]> {
    phonemes
        .iter()
        .rposition(|p| carries_stress(p))
        .map(|start| &phonemes[start..])
}

/// Translate a pronunciation to IPA, wrapped in slashes
///
/// Digits are removed before lookup. Unknown symbols fall back to their
/// lowercase form.
///
/// # Examples
/// ```
/// # use cmudict::phoneme::to_ipa;
/// let cat: Vec<String> = ["K", "AE1", "T"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(to_ipa(&cat), "/k æ t/");
/// ```
pub fn to_ipa(phonemes: &[String]) -> String {
    let symbols: Vec<String> = phonemes
        .iter()
        .map(|p| {
            let base: String = p.chars().filter(|c| !c.is_ascii_digit()).collect();
            match ipa_symbol(&base) {
                Some(ipa) => ipa.to_string(),
                None => base.to_lowercase(),
            }
        })
        .collect();
    format!("/{}/", symbols.join(" "))
}

/// Base symbol of a token with trailing stress digits removed
#[inline]
pub fn base_symbol(token: &str) -> &str {
    token.trim_end_matches(STRESS_DIGITS)
}

/// Break a pronunciation down token by token with categories and stress
pub fn describe(phonemes: &[String], phone_types: &PhoneTypes) -> Vec<PhonemeDetail> {
    phonemes
        .iter()
        .map(|token| {
            let base = base_symbol(token);
            PhonemeDetail {
                token: token.clone(),
                base: base.to_string(),
                category: phone_types.category(base).to_string(),
                stress: trailing_stress(token).and_then(Stress::from_digit),
            }
        })
        .collect()
}
