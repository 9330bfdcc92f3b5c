// Integration tests for the CmuDict query API

use cmudict::CmuDict;
use std::io::Write;

const SAMPLE: &str = "\
# synthetic test dictionary
cat K AE1 T
bat B AE1 T
hat HH AE1 T
dog D AA1 G
";

fn create_dict() -> CmuDict {
    CmuDict::from_reader(SAMPLE.as_bytes()).unwrap()
}

// ============ Example Scenarios ============

#[test]
fn test_lookup_uppercase_word() {
    let dict = create_dict();
    let records = dict.lookup("CAT").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].phonemes, vec!["K", "AE1", "T"]);
    assert_eq!(records[0].syllables, 1);
    assert_eq!(records[0].ipa, "/k æ t/");
}

#[test]
fn test_find_rhymes_for_cat() {
    let dict = create_dict();
    let rhymes = dict.find_rhymes("cat", 10);

    assert!(rhymes.contains(&"bat".to_string()));
    assert!(rhymes.contains(&"hat".to_string()));
    assert!(!rhymes.contains(&"cat".to_string()));
    assert!(!rhymes.contains(&"dog".to_string()));
}

#[test]
fn test_rhyming_part_shared() {
    let dict = create_dict();
    let cat = dict.get_rhyming_part("cat").unwrap();

    assert_eq!(cat, &["AE1".to_string(), "T".to_string()][..]);
    assert_eq!(Some(cat), dict.get_rhyming_part("bat"));
}

#[test]
fn test_search_suffix_pattern() {
    let dict = create_dict();
    assert_eq!(dict.search_by_pattern("*at", 10), vec!["cat", "bat", "hat"]);
}

#[test]
fn test_unknown_word() {
    let dict = create_dict();
    assert_eq!(dict.count_syllables("dog"), Some(1));
    assert!(!dict.word_exists("fish"));
    assert!(dict.lookup("fish").is_none());
    assert!(dict.get_stress_pattern("fish").is_none());
    assert!(dict.get_rhyming_part("fish").is_none());
    assert!(dict.get_phonemes_readable("fish").is_none());
    assert!(dict.find_rhymes("fish", 10).is_empty());
}

// ============ Properties ============

#[test]
fn test_phonemes_round_trip() {
    let dict = create_dict();
    for line in SAMPLE.lines().skip(1) {
        let (word, phonemes) = line.split_once(' ').unwrap();
        assert_eq!(dict.get_phonemes_readable(word).as_deref(), Some(phonemes));
    }
}

#[test]
fn test_normalization_idempotence() {
    let dict = create_dict();
    for query in ["Cat", "CAT", "  cat", "cat\t", " cAt \n"] {
        assert_eq!(dict.lookup(query), dict.lookup("cat"));
        assert_eq!(dict.count_syllables(query), dict.count_syllables("cat"));
        assert_eq!(dict.find_rhymes(query, 10), dict.find_rhymes("cat", 10));
        assert!(dict.word_exists(query));
    }
}

#[test]
fn test_rhyme_symmetry() {
    let dict = CmuDict::from_reader(
        "cat K AE1 T\nflat F L AE1 T\nread R IY1 D\nread(2) R EH1 D\nbed B EH1 D\nsaid S EH1 D\n"
            .as_bytes(),
    )
    .unwrap();

    for word in dict.index().words() {
        let target = dict.get_rhyming_part(word);
        for rhyme in dict.find_rhymes(word, 100) {
            assert_ne!(rhyme, word, "{} rhymes with itself", word);
            let prons = dict.index().get(&rhyme).unwrap();
            assert!(
                prons
                    .iter()
                    .any(|p| cmudict::phoneme::rhyme_key(p) == target),
                "{} listed as rhyme of {}",
                rhyme,
                word
            );
        }
    }
}

#[test]
fn test_pattern_search_totality() {
    let dict = create_dict();
    let size = dict.stats().words;

    for n in [0, 1, 3, size, size + 5] {
        let all = dict.search_by_pattern("*", n);
        assert_eq!(all.len(), n.min(size));

        let mut distinct = all.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), all.len());
    }
}

#[test]
fn test_exact_pattern_iff_exists() {
    let dict = create_dict();
    for word in ["cat", "dog", "fish", "ca"] {
        let found = dict.search_by_pattern(word, 1);
        if dict.word_exists(word) {
            assert_eq!(found, vec![word]);
        } else {
            assert!(found.is_empty());
        }
    }
}

#[test]
fn test_caps_respected() {
    let dict = create_dict();
    for n in 0..5 {
        assert!(dict.find_rhymes("cat", n).len() <= n);
        assert!(dict.search_by_pattern("*", n).len() <= n);
    }
}

#[test]
fn test_regex_metacharacters_in_pattern() {
    let dict = CmuDict::from_reader("a.m. EY2 EH1 M\naxmx AE1 K S\n".as_bytes()).unwrap();
    assert_eq!(dict.search_by_pattern("a.m.", 10), vec!["a.m."]);
    assert!(dict.search_by_pattern("[a]*", 10).is_empty());
}

// ============ Loading ============

#[test]
fn test_open_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"caf\xe9 K AE0 F EY1\nhello HH AH0 L OW1 # greeting\n")
        .unwrap();

    let dict = CmuDict::open(file.path()).unwrap();
    assert!(dict.word_exists("café"));
    assert!(dict.word_exists("HELLO"));
    assert_eq!(dict.get_stress_pattern("hello").as_deref(), Some("0 1"));
}

#[test]
fn test_open_missing_file() {
    let result = CmuDict::open("/nonexistent/cmudict.dict");
    assert!(result.is_err());
}

#[test]
fn test_shared_across_threads() {
    let dict = std::sync::Arc::new(create_dict());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dict = std::sync::Arc::clone(&dict);
            std::thread::spawn(move || dict.find_rhymes("cat", 10))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["bat", "hat"]);
    }
}
