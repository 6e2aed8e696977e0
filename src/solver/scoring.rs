//! Letter-frequency scoring and ranking
//!
//! Scores are computed from letter counts over the *current* candidate pool, so
//! the ranking reflects what discriminates among the words still in play.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Bonus added when a word starts with one of [`PREFERRED_STARTERS`]
pub const STARTER_BONUS: usize = 10;

/// First letters that earn [`STARTER_BONUS`]
pub const PREFERRED_STARTERS: [u8; 10] = *b"scbptfgdmh";

/// Number of suggestions returned when the caller does not ask for a count
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Size of the pool prefix scored under [`ScoringWindow::default`]
pub const DEFAULT_SCORING_CAP: usize = 50;

/// Letter occurrence counts across a candidate pool
///
/// Every occurrence counts, so a word with two E's contributes two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: FxHashMap<u8, usize>,
}

impl LetterFrequency {
    /// Count letters across `pool`
    #[must_use]
    pub fn from_pool(pool: &[Word]) -> Self {
        let mut counts = FxHashMap::default();
        for word in pool {
            for &letter in word.chars() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter`, zero if never seen
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of all counts: five per pooled word
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Which part of the pool gets scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringWindow {
    /// Only the first `n` pool words, in pool order, are scored
    ///
    /// A word beyond the prefix is never suggested however well it would score.
    Prefix(usize),
    /// Score the whole pool and keep the best
    FullPool,
}

impl Default for ScoringWindow {
    fn default() -> Self {
        Self::Prefix(DEFAULT_SCORING_CAP)
    }
}

impl ScoringWindow {
    fn apply<'a>(self, pool: &'a [Word]) -> &'a [Word] {
        match self {
            Self::Prefix(n) => &pool[..pool.len().min(n)],
            Self::FullPool => pool,
        }
    }
}

/// Heuristic desirability of `word`; higher is better
///
/// Sums the pool frequency of each distinct letter (repeats count once) and adds
/// [`STARTER_BONUS`] for a preferred first letter.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::scoring::{LetterFrequency, score};
///
/// let pool = vec![Word::new("slate").unwrap(), Word::new("crane").unwrap()];
/// let freq = LetterFrequency::from_pool(&pool);
///
/// // s1 + l1 + a2 + t1 + e2, plus 10 for starting with S
/// assert_eq!(score(&pool[0], &freq), 17);
/// ```
#[must_use]
pub fn score(word: &Word, frequency: &LetterFrequency) -> usize {
    let mut seen = [false; 26];
    let mut total = 0;

    for &letter in word.chars() {
        let slot = usize::from(letter - b'a');
        if !seen[slot] {
            seen[slot] = true;
            total += frequency.count(letter);
        }
    }

    if PREFERRED_STARTERS.contains(&word.char_at(0)) {
        total += STARTER_BONUS;
    }

    total
}

/// Rank pool words by [`score`], best first, and keep the top `limit`
///
/// Sorting is stable, so equal scores keep their pool order.
#[must_use]
pub fn rank(
    pool: &[Word],
    frequency: &LetterFrequency,
    window: ScoringWindow,
    limit: usize,
) -> Vec<Word> {
    let mut scored: Vec<(&Word, usize)> = window
        .apply(pool)
        .iter()
        .map(|word| (word, score(word, frequency)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.cmp(a));

    scored
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn frequency_counts_every_occurrence() {
        let pool = words_from_slice(&["speed", "erase"]);
        let freq = LetterFrequency::from_pool(&pool);

        assert_eq!(freq.count(b'e'), 4);
        assert_eq!(freq.count(b's'), 2);
        assert_eq!(freq.count(b'z'), 0);
        assert_eq!(freq.total(), 10);
    }

    #[test]
    fn score_counts_repeated_letters_once() {
        let pool = words_from_slice(&["speed", "erase"]);
        let freq = LetterFrequency::from_pool(&pool);

        // s2 + p1 + e4 + d1 + starter bonus; the second E adds nothing
        let speed = Word::new("speed").unwrap();
        assert_eq!(score(&speed, &freq), 2 + 1 + 4 + 1 + STARTER_BONUS);

        // e4 + r1 + a1 + s2, no bonus for E
        let erase = Word::new("erase").unwrap();
        assert_eq!(score(&erase, &freq), 8);
    }

    #[test]
    fn score_is_pure() {
        let pool = words_from_slice(&["slate", "crane", "irate", "fluid"]);
        let freq = LetterFrequency::from_pool(&pool);

        for word in &pool {
            assert_eq!(score(word, &freq), score(word, &freq));
        }
        assert_eq!(freq, LetterFrequency::from_pool(&pool));
    }

    #[test]
    fn rank_orders_by_score_and_keeps_ties_stable() {
        // ABCDE and EDCBA share letters and neither earns the starter bonus
        let pool = words_from_slice(&["abcde", "edcba", "slate"]);
        let freq = LetterFrequency::from_pool(&pool);
        assert_eq!(score(&pool[0], &freq), score(&pool[1], &freq));

        let ranked = rank(&pool, &freq, ScoringWindow::FullPool, 8);
        let texts: Vec<&str> = ranked.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "abcde", "edcba"]);

        let reversed = words_from_slice(&["edcba", "abcde", "slate"]);
        let ranked = rank(&reversed, &freq, ScoringWindow::FullPool, 8);
        let texts: Vec<&str> = ranked.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "edcba", "abcde"]);
    }

    #[test]
    fn rank_respects_limit() {
        let pool = words_from_slice(&["slate", "crane", "irate", "fluid"]);
        let freq = LetterFrequency::from_pool(&pool);

        assert_eq!(rank(&pool, &freq, ScoringWindow::FullPool, 2).len(), 2);
        assert!(rank(&pool, &freq, ScoringWindow::FullPool, 0).is_empty());
    }

    #[test]
    fn prefix_window_never_sees_later_words() {
        // The best word sits past the prefix
        let pool = words_from_slice(&["quick", "jumpy", "slate"]);
        let freq = LetterFrequency::from_pool(&pool);

        let capped = rank(&pool, &freq, ScoringWindow::Prefix(2), 8);
        assert_eq!(capped.len(), 2);
        assert!(!capped.iter().any(|w| w.text() == "slate"));

        let full = rank(&pool, &freq, ScoringWindow::FullPool, 8);
        assert_eq!(full[0].text(), "slate");
    }

    #[test]
    fn default_window_is_fifty_word_prefix() {
        assert_eq!(ScoringWindow::default(), ScoringWindow::Prefix(50));
    }
}
