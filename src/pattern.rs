// Pattern Compiler
// Converts glob-style word patterns into anchored regexes

use crate::types::DictError;
use regex::{Regex, RegexBuilder};

/// The only wildcard: matches zero or more characters
const WILDCARD: char = '*';

/// Convert a glob pattern to a regex string
///
/// # Conversion Rules
/// - `*` becomes `.*` (zero or more characters)
/// - Every other character is escaped and matched literally
/// - The result is anchored at both ends
///
/// # Examples
/// ```
/// # use cmudict::pattern::glob_to_regex;
/// assert_eq!(glob_to_regex("cat*"), "^cat.*$");
/// assert_eq!(glob_to_regex("a.m."), r"^a\.m\.$");
/// ```
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::from("^");

    for (i, literal) in pattern.split(WILDCARD).enumerate() {
        if i > 0 {
            regex.push_str(".*");
        }
        regex.push_str(&regex::escape(literal));
    }

    regex.push('$');
    regex
}

/// Compile a glob pattern into a case-insensitive, fully anchored matcher
///
/// # Examples
/// ```
/// # use cmudict::pattern::compile_glob;
/// let re = compile_glob("*ING").unwrap();
/// assert!(re.is_match("running"));
/// assert!(!re.is_match("ringer"));
/// ```
pub fn compile_glob(pattern: &str) -> Result<Regex, DictError> {
    RegexBuilder::new(&glob_to_regex(pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| DictError::Pattern(e.to_string()))
}

/// Check whether a pattern contains a wildcard
#[inline]
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Regex Generation ============

    #[test]
    fn test_regex_no_wildcard() {
        assert_eq!(glob_to_regex("cat"), "^cat$");
    }

    #[test]
    fn test_regex_prefix_and_suffix() {
        assert_eq!(glob_to_regex("cat*"), "^cat.*$");
        assert_eq!(glob_to_regex("*ing"), "^.*ing$");
        assert_eq!(glob_to_regex("c*t"), "^c.*t$");
    }

    #[test]
    fn test_regex_bare_wildcard() {
        assert_eq!(glob_to_regex("*"), "^.*$");
        assert_eq!(glob_to_regex("**"), "^.*.*$");
    }

    #[test]
    fn test_regex_empty_pattern() {
        assert_eq!(glob_to_regex(""), "^$");
    }

    #[test]
    fn test_regex_escapes_metacharacters() {
        assert_eq!(glob_to_regex("a.b"), r"^a\.b$");
        assert_eq!(glob_to_regex("?x+"), r"^\?x\+$");
        assert_eq!(glob_to_regex("(2)*"), r"^\(2\).*$");
    }

    // ============ Matching ============

    #[test]
    fn test_compile_is_case_insensitive() {
        let re = compile_glob("CAT*").unwrap();
        assert!(re.is_match("catalog"));
        assert!(re.is_match("Cat"));
    }

    #[test]
    fn test_compile_is_anchored() {
        let re = compile_glob("at").unwrap();
        assert!(re.is_match("at"));
        assert!(!re.is_match("cat"));
        assert!(!re.is_match("attic"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let re = compile_glob("a.m.").unwrap();
        assert!(re.is_match("a.m."));
        assert!(!re.is_match("axmy"));

        let re = compile_glob("?").unwrap();
        assert!(re.is_match("?"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn test_wildcard_matches_empty() {
        let re = compile_glob("cat*").unwrap();
        assert!(re.is_match("cat"));
    }

    #[test]
    fn test_wildcard_spans_apostrophes() {
        let re = compile_glob("*'s").unwrap();
        assert!(re.is_match("cat's"));
    }

    #[test]
    fn test_has_wildcard() {
        assert!(has_wildcard("c*"));
        assert!(!has_wildcard("cat"));
    }
}
