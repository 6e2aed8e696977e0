//! Answer and guess vocabularies
//!
//! A [`Corpus`] is what the solver filters and ranks over. It is produced by a
//! [`CorpusSource`]; when the preferred source fails, the bundled list is used.

use super::FALLBACK;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to acquire a word list
#[derive(Debug, Error)]
pub enum CorpusLoadError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list contains no valid answer words")]
    Empty,
}

/// The answer vocabulary (in list order) and the valid-guess vocabulary
#[derive(Debug, Clone)]
pub struct Corpus {
    answers: Vec<Word>,
    all_words: Vec<Word>,
    answer_set: FxHashSet<Word>,
    valid_set: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from answers and extra accepted guesses
    ///
    /// Duplicates are dropped keeping first occurrence. Answers are always valid
    /// guesses, so the valid vocabulary is answers followed by the extras.
    ///
    /// # Errors
    /// Returns `CorpusLoadError::Empty` if there are no answers.
    pub fn new(answers: Vec<Word>, accepted: Vec<Word>) -> Result<Self, CorpusLoadError> {
        let mut answer_set = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|word| answer_set.insert(word.clone()))
            .collect();

        if answers.is_empty() {
            return Err(CorpusLoadError::Empty);
        }

        let mut valid_set = answer_set.clone();
        let mut all_words = answers.clone();
        all_words.extend(
            accepted
                .into_iter()
                .filter(|word| valid_set.insert(word.clone())),
        );

        Ok(Self {
            answers,
            all_words,
            answer_set,
            valid_set,
        })
    }

    /// The bundled list, used as both vocabularies
    #[must_use]
    pub fn fallback() -> Self {
        let words = words_from_slice(FALLBACK);
        let mut answer_set = FxHashSet::default();
        let answers: Vec<Word> = words
            .into_iter()
            .filter(|word| answer_set.insert(word.clone()))
            .collect();

        Self {
            all_words: answers.clone(),
            valid_set: answer_set.clone(),
            answers,
            answer_set,
        }
    }

    /// Fetch from `source`, falling back to the bundled list on failure
    pub fn load_or_fallback(source: &dyn CorpusSource) -> Self {
        match source.fetch() {
            Ok(corpus) => {
                info!(
                    "Loaded {} answer words and {} valid words from {}",
                    corpus.answer_word_count(),
                    corpus.total_word_count(),
                    source.describe()
                );
                corpus
            }
            Err(err) => {
                warn!(
                    "Failed to load word list from {}: {err}; using bundled fallback",
                    source.describe()
                );
                let corpus = Self::fallback();
                info!("Fallback initialized with {} words", corpus.answer_word_count());
                corpus
            }
        }
    }

    /// Is `word` acceptable as a guess? Case-insensitive.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.valid_set.contains(&w))
    }

    /// Can `word` be the secret? Case-insensitive.
    #[must_use]
    pub fn is_answer_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.answer_set.contains(&w))
    }

    /// Every valid guess, answers first
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Answer vocabulary in list order
    #[must_use]
    pub fn answer_words(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn total_word_count(&self) -> usize {
        self.all_words.len()
    }

    #[must_use]
    pub fn answer_word_count(&self) -> usize {
        self.answers.len()
    }
}

/// Somewhere a corpus can be acquired from
pub trait CorpusSource {
    /// Acquire the word lists
    ///
    /// # Errors
    /// Returns `CorpusLoadError` if the source cannot be read or holds no answers.
    fn fetch(&self) -> Result<Corpus, CorpusLoadError>;

    /// Short human readable name for log messages
    fn describe(&self) -> String;
}

/// A word-list document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self) -> Result<Corpus, CorpusLoadError> {
        let parsed = load_from_file(&self.path).map_err(|source| CorpusLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Corpus::new(parsed.answers, parsed.accepted)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The bundled list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CorpusSource for EmbeddedSource {
    fn fetch(&self) -> Result<Corpus, CorpusLoadError> {
        Ok(Corpus::fallback())
    }

    fn describe(&self) -> String {
        "bundled word list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn new_dedupes_and_merges_answers_into_valid() {
        let corpus = Corpus::new(
            words(&["crane", "slate", "crane"]),
            words(&["aahed", "slate"]),
        )
        .unwrap();

        assert_eq!(corpus.answer_word_count(), 2);
        assert_eq!(corpus.total_word_count(), 3);
        assert!(corpus.is_valid_word("AAHED"));
        assert!(!corpus.is_answer_word("aahed"));
        assert!(corpus.is_answer_word("Slate"));
        assert!(!corpus.is_valid_word("zzzzz"));
        assert!(!corpus.is_valid_word("not a word"));
    }

    #[test]
    fn new_rejects_empty_answers() {
        assert!(matches!(
            Corpus::new(Vec::new(), words(&["crane"])),
            Err(CorpusLoadError::Empty)
        ));
    }

    #[test]
    fn fallback_contains_openers() {
        let corpus = Corpus::fallback();
        assert!(corpus.answer_word_count() > 400);
        assert!(corpus.is_answer_word("slate"));
        assert!(corpus.is_answer_word("crane"));
        assert_eq!(corpus.answer_word_count(), corpus.total_word_count());
    }

    #[test]
    fn missing_file_falls_back() {
        let source = FileSource::new("/nonexistent/words.txt");
        assert!(matches!(source.fetch(), Err(CorpusLoadError::Io { .. })));

        let corpus = Corpus::load_or_fallback(&source);
        assert_eq!(corpus.answer_word_count(), Corpus::fallback().answer_word_count());
    }

    #[test]
    fn file_source_reads_plain_list() {
        let path = std::env::temp_dir().join(format!(
            "wordle_assistant_corpus_{}.txt",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "crane\nslate\nirate").unwrap();
        drop(file);

        let corpus = Corpus::load_or_fallback(&FileSource::new(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(corpus.answer_word_count(), 3);
        assert_eq!(corpus.answer_words()[1].text(), "slate");
    }

    #[test]
    fn file_source_keeps_accepted_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_assistant_marked_{}.txt",
            std::process::id()
        ));
        let doc = "List of correct words = [\"cigar\", \"rebut\"]\n\
                   List of accepted words = [\"aahed\"]\n";
        std::fs::write(&path, doc).unwrap();

        let corpus = FileSource::new(&path).fetch();
        std::fs::remove_file(&path).unwrap();
        let corpus = corpus.unwrap();

        assert_eq!(corpus.answer_word_count(), 2);
        assert!(corpus.is_valid_word("aahed"));
        assert!(!corpus.is_answer_word("aahed"));
    }

    #[test]
    fn file_source_with_no_words_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "wordle_assistant_empty_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "not\nwords here\n").unwrap();

        let result = FileSource::new(&path).fetch();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(CorpusLoadError::Empty)));
    }

    #[test]
    fn embedded_source_never_fails() {
        assert!(EmbeddedSource.fetch().is_ok());
    }
}
