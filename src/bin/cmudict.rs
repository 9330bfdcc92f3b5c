// cmudict-rs CLI Tool
// Command-line interface for pronunciation lookup, rhymes and word search

use clap::{Parser, Subcommand};
use cmudict::pattern::has_wildcard;
use cmudict::{CmuDict, PhoneTypes, DEFAULT_MAX_MATCHES, DEFAULT_MAX_RHYMES};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// CMU Pronouncing Dictionary Tool - pronunciations, syllables, stress and rhymes
#[derive(Parser, Debug)]
#[command(name = "cmudict")]
#[command(about = "Query the CMU Pronouncing Dictionary", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the dictionary file
    #[arg(short, long, env = "CMUDICT_PATH", default_value = "cmudict.dict")]
    dict: PathBuf,

    /// Path to a phoneme type table (tab separated); the built-in table is used otherwise
    #[arg(short, long, env = "CMUDICT_PHONES")]
    phones: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every pronunciation of a word (interactive when WORD is omitted)
    Lookup {
        word: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find rhyming words (interactive when WORD is omitted)
    Rhymes {
        word: Option<String>,

        /// Maximum number of rhymes
        #[arg(short, long, default_value_t = 50)]
        limit: usize,

        /// Show the phonetic breakdown of the first few rhymes
        #[arg(short, long)]
        explain: bool,
    },

    /// Count syllables in a line of text
    Syllables {
        #[arg(required = true)]
        text: Vec<String>,

        /// Expected total (e.g. 5 or 7 for a haiku line)
        #[arg(short, long)]
        expect: Option<usize>,
    },

    /// Show stress patterns
    Stress {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Search words with a wildcard pattern (e.g. "cat*", "*ing")
    Search {
        pattern: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_MAX_MATCHES)]
        limit: usize,
    },

    /// Break a word down into phoneme categories and stress
    Phones { word: String },

    /// Show dictionary statistics
    Stats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let dict = CmuDict::open(&args.dict)?;

    match args.command {
        Command::Lookup { word: Some(word), json } => {
            if json {
                let records = dict.lookup(&word).unwrap_or_default();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_lookup(&dict, &word);
            }
        }
        Command::Lookup { word: None, .. } => {
            interactive("Enter a word to look up: ", |word| print_lookup(&dict, word))?;
        }
        Command::Rhymes {
            word: Some(word),
            limit,
            explain,
        } => print_rhymes(&dict, &word, limit, explain),
        Command::Rhymes {
            word: None,
            limit,
            explain,
        } => {
            interactive("Enter a word to find rhymes for: ", |word| {
                print_rhymes(&dict, word, limit, explain)
            })?;
        }
        Command::Syllables { text, expect } => print_syllables(&dict, &text.join(" "), expect),
        Command::Stress { words } => {
            for word in &words {
                match (dict.get_stress_pattern(word), dict.get_phonemes_readable(word)) {
                    (Some(pattern), Some(phonemes)) => {
                        println!("{:15} | Stress: {:10} | Phonemes: {}", word, pattern, phonemes)
                    }
                    _ => println!("{:15} | NOT FOUND", word),
                }
            }
        }
        Command::Search { pattern, limit } => {
            let matches = dict.search_by_pattern(&pattern, limit);
            let mode = if has_wildcard(&pattern) { "Wildcard" } else { "Exact" };
            println!("Mode: {}", mode);

            if matches.is_empty() {
                println!("❌ No matches found.");
            } else {
                println!("✅ Found {} matches:\n", matches.len());
                println!("  {}", matches.join(", "));
            }
        }
        Command::Phones { word } => {
            let phone_types = load_phone_types(args.phones.as_deref());
            print_breakdown(&dict, &word, &phone_types);
        }
        Command::Stats => {
            let stats = dict.stats();
            println!("📊 Dictionary Statistics");
            println!("─────────────────────────");
            println!("  Words: {}", stats.words);
            println!("  Pronunciations: {}", stats.pronunciations);
        }
    }

    Ok(())
}

/// Read words from stdin until EOF or a quit command
fn interactive<F>(prompt: &str, mut handle: F) -> io::Result<()>
where
    F: FnMut(&str),
{
    println!("Type 'quit' or 'exit' to close the program.\n");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let word = line.trim();
        if is_quit(word) {
            break;
        }

        println!();
        handle(word);
        println!("{}", "─".repeat(60));
        println!();
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Empty input and the usual quit words end an interactive session
fn is_quit(input: &str) -> bool {
    matches!(
        input.to_lowercase().as_str(),
        "" | "q" | "quit" | "exit"
    )
}

fn print_lookup(dict: &CmuDict, word: &str) {
    let Some(records) = dict.lookup(word) else {
        println!("✗ Sorry, '{}' was not found in the dictionary.", word);
        return;
    };

    println!("✓ Found '{}' in the dictionary!\n", word);
    for (idx, record) in records.iter().enumerate() {
        println!("  Pronunciation {}: {}", idx + 1, record.arpabet);
        println!("    IPA: {}", record.ipa);
        println!("    Syllables: {}", record.syllables);
        if !record.rhymes.is_empty() {
            println!("    Rhymes: {}", record.rhymes.join(", "));
        }
    }

    if let Some(stress) = dict.get_stress_pattern(word) {
        println!("\n  Stress pattern: {}", stress);
        println!("  (0 = no stress, 1 = primary stress, 2 = secondary stress)");
    }
}

fn print_rhymes(dict: &CmuDict, word: &str, limit: usize, explain: bool) {
    let Some(phonemes) = dict.get_phonemes_readable(word) else {
        println!("✗ Sorry, '{}' was not found in the dictionary.", word);
        return;
    };

    println!("✓ Found '{}' in the dictionary!", word);
    println!("  Pronunciation: {}", phonemes);
    if let Some(part) = dict.get_rhyming_part(word) {
        println!("  Rhyming part:  {}", part.join(" "));
    }
    println!();

    let rhymes = dict.find_rhymes(word, limit);
    if rhymes.is_empty() {
        println!("✗ No perfect rhymes found for '{}'.", word);
        if let (Some(syllables), Some(stress)) =
            (dict.count_syllables(word), dict.get_stress_pattern(word))
        {
            println!("  Syllables: {}", syllables);
            println!("  Stress pattern: {}", stress);
        }
        return;
    }

    println!("✓ Found {} words that rhyme with '{}':\n", rhymes.len(), word);
    for batch in rhymes.chunks(5) {
        println!("  {}", batch.join(", "));
    }

    if explain {
        println!("\nRHYME EXAMPLES:");
        for rhyme in rhymes.iter().take(3) {
            explain_rhyme(dict, word, rhyme);
        }
        if rhymes.len() > 3 {
            println!("\n  ... and {} more rhymes", rhymes.len() - 3);
        }
    }
}

fn explain_rhyme(dict: &CmuDict, word: &str, rhyme: &str) {
    let (Some(word_pron), Some(rhyme_pron)) = (
        dict.get_phonemes_readable(word),
        dict.get_phonemes_readable(rhyme),
    ) else {
        return;
    };

    println!("\n  {:15} → {}", word.to_uppercase(), word_pron);
    println!("  {:15} → {}", rhyme.to_uppercase(), rhyme_pron);
    if let Some(part) = dict.get_rhyming_part(word) {
        println!("  Matching part:    {}", part.join(" "));
    }
}

fn print_syllables(dict: &CmuDict, text: &str, expect: Option<usize>) {
    let counted = dict.count_text_syllables(text);

    let details: Vec<String> = counted
        .words
        .iter()
        .map(|w| match w.syllables {
            Some(n) => format!("{}({})", w.word, n),
            None => format!("{}(?)", w.word),
        })
        .collect();

    println!("{}", details.join(" "));
    match expect {
        Some(expected) => {
            let status = if counted.total == expected { "✓" } else { "✗" };
            println!(
                "[{}] Total: {} syllables (expected {})",
                status, counted.total, expected
            );
        }
        None => println!("Total: {} syllables", counted.total),
    }

    let unknown: Vec<&str> = counted.unknown_words().collect();
    if !unknown.is_empty() {
        println!("Not found: {}", unknown.join(", "));
    }
}

fn print_breakdown(dict: &CmuDict, word: &str, phone_types: &PhoneTypes) {
    let (Some(details), Some(phonemes)) = (
        dict.phoneme_breakdown(word, phone_types),
        dict.get_phonemes_readable(word),
    ) else {
        println!("✗ Sorry, '{}' was not found in the dictionary.", word);
        return;
    };

    println!("{}:", word.to_uppercase());
    println!("  Phonemes: {}", phonemes);
    println!("  Breakdown:");
    for detail in details {
        let stress = detail
            .stress
            .map(|s| format!(" ({})", s.description()))
            .unwrap_or_default();
        println!(
            "    {:5} -> {:3} ({}){}",
            detail.token, detail.base, detail.category, stress
        );
    }

    let rhymes = dict.find_rhymes(word, DEFAULT_MAX_RHYMES);
    if !rhymes.is_empty() {
        println!("  Rhymes with: {}", rhymes.join(", "));
    }
}

/// Load the type table from a file, falling back to the built-in table
fn load_phone_types(path: Option<&std::path::Path>) -> PhoneTypes {
    match path {
        Some(path) => PhoneTypes::from_path(path).unwrap_or_else(|e| {
            log::warn!("{}; using built-in phoneme types", e);
            PhoneTypes::builtin()
        }),
        None => PhoneTypes::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(is_quit(""));
        assert!(is_quit("Q"));
        assert!(is_quit("EXIT"));
        assert!(!is_quit("quiet"));
    }

    #[test]
    fn test_args_parse_search() {
        let args = Args::try_parse_from(["cmudict", "--dict", "x.dict", "search", "cat*"]).unwrap();
        assert_eq!(args.dict, PathBuf::from("x.dict"));
        match args.command {
            Command::Search { pattern, limit } => {
                assert_eq!(pattern, "cat*");
                assert_eq!(limit, DEFAULT_MAX_MATCHES);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_args_syllables_requires_text() {
        assert!(Args::try_parse_from(["cmudict", "syllables"]).is_err());
    }

    #[test]
    fn test_missing_phones_file_falls_back() {
        let types = load_phone_types(Some(std::path::Path::new("/nonexistent/phones")));
        assert_eq!(types.category("AA"), "vowel");
    }
}
