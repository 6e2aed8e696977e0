//! Solver state as an immutable value
//!
//! Each update builds a new [`SolverState`] from the full answer list, so an
//! earlier mistake in the pool can never carry forward.

use super::filter::recompute;
use super::scoring::LetterFrequency;
use crate::core::{Guess, Word};
use log::debug;

/// Guess history, the candidate pool it implies, and the pool's letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState {
    history: Vec<Guess>,
    pool: Vec<Word>,
    frequency: LetterFrequency,
}

impl SolverState {
    /// Empty history: every answer is a candidate
    #[must_use]
    pub fn initial(answers: &[Word]) -> Self {
        Self {
            history: Vec::new(),
            pool: answers.to_vec(),
            frequency: LetterFrequency::from_pool(answers),
        }
    }

    /// Replay `history` from scratch
    ///
    /// A later guess of the same word replaces the earlier one.
    #[must_use]
    pub fn from_history(answers: &[Word], history: &[Guess]) -> Self {
        let mut merged: Vec<Guess> = Vec::with_capacity(history.len());
        for guess in history {
            upsert(&mut merged, guess.clone());
        }
        Self::build(answers, merged)
    }

    /// New state with `guess` added
    ///
    /// If the history already holds a guess of the same word, that entry is
    /// replaced in place; otherwise the guess is appended.
    #[must_use]
    pub fn with_guess(&self, answers: &[Word], guess: Guess) -> Self {
        let mut history = self.history.clone();
        upsert(&mut history, guess);
        Self::build(answers, history)
    }

    fn build(answers: &[Word], history: Vec<Guess>) -> Self {
        let pool = recompute(answers, &history);
        debug!(
            "Recomputed pool: {} of {} answers consistent with {} guesses",
            pool.len(),
            answers.len(),
            history.len()
        );
        let frequency = LetterFrequency::from_pool(&pool);
        Self {
            history,
            pool,
            frequency,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Candidates consistent with the whole history, in answer-list order
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn frequency(&self) -> &LetterFrequency {
        &self.frequency
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

fn upsert(history: &mut Vec<Guess>, guess: Guess) {
    if let Some(existing) = history.iter_mut().find(|g| g.word() == guess.word()) {
        debug!("Replacing earlier feedback for '{}'", guess.word());
        *existing = guess;
    } else {
        history.push(guess);
    }
}
