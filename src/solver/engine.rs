//! Main solver interface

use super::entropy::{GuessMetrics, calculate_metrics};
use super::scoring::{DEFAULT_SUGGESTION_LIMIT, ScoringWindow, rank};
use super::state::SolverState;
use crate::core::{Guess, ValidationError, Word, classify};
use crate::wordlists::{Corpus, CorpusSource};
use log::{debug, info};
use thiserror::Error;

/// Strong opening words, tried in order against the answer vocabulary
pub const OPENERS: [&str; 9] = [
    "slate", "adieu", "audio", "raise", "arose", "stone", "crate", "trace", "lance",
];

/// Opener used when none of [`OPENERS`] is an answer word
pub const DEFAULT_OPENER: &str = "slate";

/// Errors surfaced by the solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver used before a word list was loaded")]
    Uninitialized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),
}

/// Ranked suggestions for the next guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub suggestions: Vec<Word>,
    /// True number of remaining candidates, not just those suggested
    pub total_possible: usize,
    pub message: String,
}

/// Main Wordle assistant
///
/// Starts uninitialized; every solving operation fails with
/// [`SolverError::Uninitialized`] until a corpus is loaded. Not meant to be
/// shared between tasks directly: wrap it in a `Mutex` if several callers
/// need it, or share [`SolverState`] values, which are immutable.
#[derive(Debug, Default)]
pub struct Solver {
    corpus: Option<Corpus>,
    state: Option<SolverState>,
    window: ScoringWindow,
}

impl Solver {
    /// Create an uninitialized solver with the default scoring window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how much of the pool is scored when ranking
    #[must_use]
    pub fn with_scoring_window(mut self, window: ScoringWindow) -> Self {
        self.window = window;
        self
    }

    /// Load the corpus from `source`, falling back to the bundled list
    ///
    /// # Errors
    /// Currently infallible, since a failed fetch falls back to the bundled
    /// list; the `Result` keeps the signature stable for sources that cannot
    /// fall back.
    pub fn initialize(&mut self, source: &dyn CorpusSource) -> Result<(), SolverError> {
        if self.is_ready() {
            return Ok(());
        }
        self.initialize_with(Corpus::load_or_fallback(source));
        Ok(())
    }

    /// Initialize from an already built corpus
    pub fn initialize_with(&mut self, corpus: Corpus) {
        info!(
            "Solver ready with {} answer words",
            corpus.answer_word_count()
        );
        self.state = Some(SolverState::initial(corpus.answer_words()));
        self.corpus = Some(corpus);
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.corpus.is_some()
    }

    /// The loaded corpus
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn corpus(&self) -> Result<&Corpus, SolverError> {
        self.corpus.as_ref().ok_or(SolverError::Uninitialized)
    }

    /// The current state
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn state(&self) -> Result<&SolverState, SolverError> {
        self.state.as_ref().ok_or(SolverError::Uninitialized)
    }

    fn ready(&self) -> Result<(&Corpus, &SolverState), SolverError> {
        match (&self.corpus, &self.state) {
            (Some(corpus), Some(state)) => Ok((corpus, state)),
            _ => Err(SolverError::Uninitialized),
        }
    }

    /// Record a guess and recompute the pool
    ///
    /// A guess of a word already in the history replaces that entry.
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if the guessed word is not in the
    /// word list, leaving the history untouched, or
    /// `SolverError::Uninitialized`.
    pub fn add_guess(&mut self, guess: Guess) -> Result<(), SolverError> {
        let (corpus, state) = self.ready()?;
        check_known(corpus, &guess)?;
        debug!("Adding guess {} {}", guess.word(), guess.feedback());
        let next = state.with_guess(corpus.answer_words(), guess);
        self.state = Some(next);
        Ok(())
    }

    /// Validate raw input and record it as a guess
    ///
    /// # Errors
    /// Returns `SolverError::Validation` for malformed input or
    /// `SolverError::UnknownWord` for a word outside the word list, leaving
    /// the history untouched in both cases, or `SolverError::Uninitialized`.
    pub fn add_guess_str(&mut self, word: &str, feedback: &str) -> Result<(), SolverError> {
        self.ready()?;
        let guess = Guess::parse(word, feedback)?;
        self.add_guess(guess)
    }

    /// Clear the history and restore the full candidate pool
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn reset(&mut self) -> Result<(), SolverError> {
        let (corpus, _) = self.ready()?;
        let fresh = SolverState::initial(corpus.answer_words());
        self.state = Some(fresh);
        Ok(())
    }

    /// Current candidates, in answer-list order
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn candidates(&self) -> Result<&[Word], SolverError> {
        Ok(self.ready()?.1.pool())
    }

    /// First curated opener that is an answer word, else [`DEFAULT_OPENER`]
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn optimal_first_guess(&self) -> Result<Word, SolverError> {
        let (corpus, _) = self.ready()?;
        let opener = OPENERS
            .iter()
            .copied()
            .find(|word| corpus.is_answer_word(word))
            .unwrap_or(DEFAULT_OPENER);
        Word::new(opener).map_err(|source| {
            SolverError::Validation(ValidationError::Word {
                input: opener.to_string(),
                source,
            })
        })
    }

    /// Replace the history with `history` and suggest the next guess
    ///
    /// With an empty history this returns the opener alongside the full
    /// answer count.
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Guess;
    /// use wordle_assistant::solver::Solver;
    /// use wordle_assistant::wordlists::EmbeddedSource;
    ///
    /// let mut solver = Solver::new();
    /// solver.initialize(&EmbeddedSource).unwrap();
    ///
    /// let opening = solver.get_suggestions(&[]).unwrap();
    /// assert_eq!(opening.suggestions[0].text(), "slate");
    ///
    /// let history = [Guess::parse("slate", "--G-G").unwrap()];
    /// let next = solver.get_suggestions(&history).unwrap();
    /// assert!(next.total_possible < opening.total_possible);
    /// ```
    pub fn get_suggestions(&mut self, history: &[Guess]) -> Result<SuggestionResult, SolverError> {
        self.suggest_for(history, DEFAULT_SUGGESTION_LIMIT)
    }

    /// [`Solver::get_suggestions`] with an explicit suggestion count
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if any guessed word is not in the
    /// word list, in which case the current state is kept, or
    /// `SolverError::Uninitialized`.
    pub fn suggest_for(
        &mut self,
        history: &[Guess],
        limit: usize,
    ) -> Result<SuggestionResult, SolverError> {
        let (corpus, _) = self.ready()?;
        for guess in history {
            check_known(corpus, guess)?;
        }

        if history.is_empty() {
            let total_possible = corpus.answer_word_count();
            self.reset()?;
            return Ok(SuggestionResult {
                suggestions: vec![self.optimal_first_guess()?],
                total_possible,
                message: "Try this optimal starting word!".to_string(),
            });
        }

        let replayed = SolverState::from_history(corpus.answer_words(), history);
        self.state = Some(replayed);
        self.suggest(limit)
    }

    /// Rank the current pool and return the top `limit` words
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn suggest(&self, limit: usize) -> Result<SuggestionResult, SolverError> {
        let (_, state) = self.ready()?;
        Ok(suggest_from(state, self.window, limit))
    }

    /// Single best next guess, or `None` when nothing is left
    ///
    /// With two or fewer candidates there is nothing to gain from ranking, so
    /// the first one is returned.
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn best_guess(&self) -> Result<Option<Word>, SolverError> {
        let (_, state) = self.ready()?;
        let pool = state.pool();
        if pool.len() <= 2 {
            return Ok(pool.first().cloned());
        }
        Ok(rank(pool, state.frequency(), self.window, 1)
            .into_iter()
            .next())
    }

    /// Entropy metrics for playing `word` against the current pool
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if `word` is not a valid guess, or
    /// `SolverError::Uninitialized`.
    pub fn analyze(&self, word: &Word) -> Result<GuessMetrics, SolverError> {
        let (corpus, state) = self.ready()?;
        if !corpus.is_valid_word(word.text()) {
            return Err(SolverError::UnknownWord(word.text().to_string()));
        }
        Ok(calculate_metrics(word, state.pool()))
    }

    /// Play a whole game against `target` from an empty history
    ///
    /// Opens with [`Solver::optimal_first_guess`], then always plays the top
    /// suggestion. Stops when solved, when `max_turns` is reached, or when
    /// the pool is empty. Leaves the solver's own state untouched.
    ///
    /// # Errors
    /// Returns `SolverError::Uninitialized` before initialization.
    pub fn play(&self, target: &Word, max_turns: usize) -> Result<Vec<Guess>, SolverError> {
        let (corpus, _) = self.ready()?;
        let answers = corpus.answer_words();
        let mut state = SolverState::initial(answers);
        let mut played = Vec::new();
        let mut next = Some(self.optimal_first_guess()?);

        while let Some(word) = next {
            if played.len() >= max_turns {
                break;
            }
            let feedback = classify(target, &word);
            let guess = Guess::new(word, feedback);
            played.push(guess.clone());
            if feedback.is_solved() {
                break;
            }
            state = state.with_guess(answers, guess);
            next = suggest_from(&state, self.window, 1)
                .suggestions
                .into_iter()
                .next();
        }

        Ok(played)
    }
}

/// Guessed words must be in the valid-guess vocabulary
fn check_known(corpus: &Corpus, guess: &Guess) -> Result<(), SolverError> {
    let text = guess.word().text();
    if corpus.is_valid_word(text) {
        Ok(())
    } else {
        Err(SolverError::UnknownWord(text.to_string()))
    }
}

fn suggest_from(state: &SolverState, window: ScoringWindow, limit: usize) -> SuggestionResult {
    let pool = state.pool();
    let total_possible = pool.len();

    let (suggestions, message) = match total_possible {
        0 => (
            Vec::new(),
            "No valid words found. Check your feedback entries.".to_string(),
        ),
        1 => (pool.to_vec(), "Found the answer!".to_string()),
        n => (
            rank(pool, state.frequency(), window, limit),
            format!("{n} possible answers remaining"),
        ),
    };

    SuggestionResult {
        suggestions,
        total_possible,
        message,
    }
}
