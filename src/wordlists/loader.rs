//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

const ANSWERS_MARKER: &str = "List of correct words";
const ACCEPTED_MARKER: &str = "List of accepted words";

/// Words extracted from a word-list document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedWordList {
    /// Words that can be the secret
    pub answers: Vec<Word>,
    /// Additional words accepted as guesses only
    pub accepted: Vec<Word>,
}

/// Read and parse a word-list document from disk
///
/// Invalid entries are skipped; see [`parse_word_list`] for the layouts.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_from_file;
///
/// let parsed = load_from_file("data/fallback.txt").unwrap();
/// println!("Loaded {} answers", parsed.answers.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<ParsedWordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse a word-list document
///
/// Two layouts are understood:
/// - a marked document, where a line containing `List of correct words` holds a
///   bracketed, comma separated answer list and a line containing
///   `List of accepted words` holds the extra guessable words
/// - a plain list with one word per line, used as the answers
///
/// Entries that are not valid 5-letter words are skipped.
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::parse_word_list;
///
/// let doc = r#"List of correct words: ["cigar", "rebut"]
/// List of accepted words: ["aahed"]"#;
/// let parsed = parse_word_list(doc);
/// assert_eq!(parsed.answers.len(), 2);
/// assert_eq!(parsed.accepted[0].text(), "aahed");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> ParsedWordList {
    let mut parsed = ParsedWordList::default();
    let mut marked = false;

    for line in content.lines() {
        if line.contains(ANSWERS_MARKER) {
            marked = true;
            if let Some(words) = bracketed_words(line) {
                parsed.answers = words;
            }
        } else if line.contains(ACCEPTED_MARKER) {
            marked = true;
            if let Some(words) = bracketed_words(line) {
                parsed.accepted = words;
            }
        }
    }

    if !marked {
        parsed.answers = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| Word::new(line).ok())
            .collect();
    }

    parsed
}

/// Extract the words of a `[...]` list on a single line
fn bracketed_words(line: &str) -> Option<Vec<Word>> {
    let start = line.find('[')?;
    let end = line.rfind(']')?;
    if end <= start {
        return None;
    }

    let words = line[start + 1..end]
        .split(',')
        .map(|entry| entry.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter_map(|entry| Word::new(entry).ok())
        .collect();
    Some(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::words_from_slice;
/// use wordle_assistant::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
