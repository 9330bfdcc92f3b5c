// Integration tests for glob compilation and pattern search

use cmudict::{compile_glob, glob_to_regex, CmuDict};

const WORDS: &str = "\
cat K AE1 T
catalog K AE1 T AH0 L AO2 G
scatter S K AE1 T ER0
running R AH1 N IH0 NG
ring R IH1 NG
book B UH1 K
bookcase B UH1 K K EY2 S
unable AH0 N EY1 B AH0 L
";

fn create_dict() -> CmuDict {
    CmuDict::from_reader(WORDS.as_bytes()).unwrap()
}

// ============ Regex Workflow ============

#[test]
fn test_prefix_workflow() {
    let regex = glob_to_regex("cat*");
    assert_eq!(regex, "^cat.*$");

    let re = compile_glob("cat*").unwrap();
    assert!(re.is_match("catalog"));
    assert!(!re.is_match("scatter"));
}

#[test]
fn test_infix_workflow() {
    let re = compile_glob("*at*").unwrap();
    assert!(re.is_match("cat"));
    assert!(re.is_match("scatter"));
    assert!(!re.is_match("ring"));
}

// ============ Search Examples ============

#[test]
fn test_starts_with() {
    let dict = create_dict();
    assert_eq!(dict.search_by_pattern("cat*", 12), vec!["cat", "catalog"]);
    assert_eq!(dict.search_by_pattern("book*", 12), vec!["book", "bookcase"]);
    assert_eq!(dict.search_by_pattern("un*", 12), vec!["unable"]);
}

#[test]
fn test_ends_with() {
    let dict = create_dict();
    assert_eq!(dict.search_by_pattern("*ing", 12), vec!["running", "ring"]);
}

#[test]
fn test_uppercase_pattern() {
    let dict = create_dict();
    assert_eq!(dict.search_by_pattern("*ING", 12), vec!["running", "ring"]);
}

#[test]
fn test_bare_wildcard_capped() {
    let dict = create_dict();
    assert_eq!(
        dict.search_by_pattern("*", 3),
        vec!["cat", "catalog", "scatter"]
    );
    assert_eq!(dict.search_by_pattern("*", 100).len(), 8);
}

#[test]
fn test_empty_pattern_matches_nothing() {
    let dict = create_dict();
    assert!(dict.search_by_pattern("", 10).is_empty());
}

#[test]
fn test_unsupported_wildcards_are_literal() {
    let dict = create_dict();
    assert!(dict.search_by_pattern("c?t", 10).is_empty());
    assert!(dict.search_by_pattern("ca.", 10).is_empty());
    assert!(dict.search_by_pattern("r(ing)", 10).is_empty());
}
