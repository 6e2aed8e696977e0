//! Candidate pool filtering
//!
//! A word survives only if no guess in the history rules it out. The pool is
//! always recomputed from the full answer list, never narrowed incrementally.

use crate::core::{Guess, Word};
use rayon::prelude::*;

/// Check whether `candidate` is consistent with a single guess
#[inline]
#[must_use]
pub fn is_compatible(candidate: &Word, guess: &Guess) -> bool {
    guess.admits(candidate)
}

/// Filter answer words to those consistent with every guess in `history`
///
/// Keeps the order of `answers`.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Guess, Word};
/// use wordle_assistant::solver::filter::recompute;
///
/// let answers: Vec<Word> = ["crane", "slate", "fluid"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let history = vec![Guess::parse("crane", "-----").unwrap()];
///
/// let pool = recompute(&answers, &history);
/// assert_eq!(pool, vec![Word::new("fluid").unwrap()]);
/// ```
#[must_use]
pub fn recompute(answers: &[Word], history: &[Guess]) -> Vec<Word> {
    answers
        .par_iter()
        .filter(|candidate| history.iter().all(|guess| is_compatible(candidate, guess)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&[
            "slate", "crane", "irate", "crate", "grate", "fluid", "speed", "chewy", "erase",
            "eerie",
        ])
    }

    #[test]
    fn empty_history_keeps_everything() {
        let answers = vocabulary();
        assert_eq!(recompute(&answers, &[]), answers);
    }

    #[test]
    fn all_absent_crane() {
        let answers = vocabulary();
        let history = vec![Guess::parse("crane", "-----").unwrap()];
        let pool = recompute(&answers, &history);

        let texts: Vec<&str> = pool.iter().map(Word::text).collect();
        // Every word sharing a letter with CRANE is gone, CRANE included
        assert_eq!(texts, ["fluid"]);
        assert!(!pool.iter().any(|w| w.text() == "slate"));
    }

    #[test]
    fn guesses_are_conjunctive() {
        let answers = vocabulary();
        let secret = Word::new("grate").unwrap();
        let history: Vec<Guess> = ["crane", "irate"]
            .iter()
            .map(|g| {
                let played = Word::new(*g).unwrap();
                let feedback = classify(&secret, &played);
                Guess::new(played, feedback)
            })
            .collect();

        let pool = recompute(&answers, &history);
        assert!(pool.contains(&secret));
        assert!(pool.iter().all(|w| history.iter().all(|g| g.admits(w))));
    }

    #[test]
    fn recompute_is_idempotent_and_order_stable() {
        let answers = vocabulary();
        let history = vec![Guess::parse("slate", "--G-G").unwrap()];

        let first = recompute(&answers, &history);
        let second = recompute(&answers, &history);
        assert_eq!(first, second);

        let positions: Vec<usize> = first
            .iter()
            .map(|w| answers.iter().position(|a| a == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn impossible_feedback_empties_pool() {
        let answers = vocabulary();
        let history = vec![Guess::parse("zzzzz", "GGGGG").unwrap()];
        assert!(recompute(&answers, &history).is_empty());
    }

    proptest! {
        #[test]
        fn recompute_is_idempotent(
            secret in 0usize..10,
            played in prop::collection::vec(0usize..10, 0..4),
        ) {
            let answers = vocabulary();
            let history: Vec<Guess> = played
                .iter()
                .map(|&i| Guess::new(answers[i].clone(), classify(&answers[secret], &answers[i])))
                .collect();

            let pool = recompute(&answers, &history);
            prop_assert!(pool.contains(&answers[secret]));
            prop_assert_eq!(recompute(&pool, &history), pool);
        }
    }
}
