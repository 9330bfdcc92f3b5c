// Static phonetic data
// ARPAbet to IPA table and the embedded phoneme type table

/// Embedded copy of the standard `cmudict.phones` type table (tab separated)
pub const PHONES_DATA: &str = include_str!("../data/cmudict.phones");

/// ARPAbet base symbol → IPA symbol
///
/// Covers the 39 CMUdict phonemes plus the reduced-vowel and syllabic
/// extensions (`AX`, `AXR`, `IX`, `EL`, `EM`, `EN`, `DX`).
pub const ARPABET_TO_IPA: &[(&str, &str)] = &[
    // Vowels
    ("AA", "ɑ"),
    ("AE", "æ"),
    ("AH", "ʌ"),
    ("AO", "ɔ"),
    ("AW", "aʊ"),
    ("AY", "aɪ"),
    ("EH", "ɛ"),
    ("ER", "ɝ"),
    ("EY", "eɪ"),
    ("IH", "ɪ"),
    ("IY", "i"),
    ("OW", "oʊ"),
    ("OY", "ɔɪ"),
    ("UH", "ʊ"),
    ("UW", "u"),
    ("AX", "ə"),
    ("AXR", "ɚ"),
    ("IX", "ɨ"),
    ("EL", "l̩"),
    ("EM", "m̩"),
    ("EN", "n̩"),
    // Consonants
    ("B", "b"),
    ("CH", "tʃ"),
    ("D", "d"),
    ("DH", "ð"),
    ("DX", "ɾ"),
    ("F", "f"),
    ("G", "ɡ"),
    ("HH", "h"),
    ("JH", "dʒ"),
    ("K", "k"),
    ("L", "l"),
    ("M", "m"),
    ("N", "n"),
    ("NG", "ŋ"),
    ("P", "p"),
    ("R", "ɹ"),
    ("S", "s"),
    ("SH", "ʃ"),
    ("T", "t"),
    ("TH", "θ"),
    ("V", "v"),
    ("W", "w"),
    ("Y", "j"),
    ("Z", "z"),
    ("ZH", "ʒ"),
];

/// Look up the IPA symbol for an ARPAbet base symbol (case-sensitive, no stress digit)
#[inline]
pub fn ipa_symbol(base: &str) -> Option<&'static str> {
    ARPABET_TO_IPA
        .iter()
        .find(|(arpa, _)| *arpa == base)
        .map(|(_, ipa)| *ipa)
}
