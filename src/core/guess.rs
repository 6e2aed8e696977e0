//! A played guess and the consistency check against it
//!
//! [`Guess::admits`] decides whether a candidate secret could have produced the
//! recorded feedback. For any feedback the game can actually produce it agrees
//! with `classify(candidate, guess.word) == guess.feedback`, but it works from
//! the feedback directly instead of re-running the classifier.

use super::feedback::{Feedback, FeedbackError, LetterStatus};
use super::word::{WORD_LENGTH, Word, WordError};
use thiserror::Error;

/// Malformed input rejected at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid word '{input}': {source}")]
    Word { input: String, source: WordError },
    #[error("invalid feedback '{input}': {source}")]
    Feedback {
        input: String,
        source: FeedbackError,
    },
    #[error("expected WORD:FEEDBACK, got '{0}'")]
    MissingSeparator(String),
}

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Validate raw player input into a guess
    ///
    /// # Errors
    /// Returns `ValidationError` if either the word or the feedback is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Guess;
    ///
    /// let guess = Guess::parse("crane", "absent,absent,present,absent,correct").unwrap();
    /// assert_eq!(guess.feedback().to_string(), "--Y-G");
    /// assert!(Guess::parse("cranes", "-----").is_err());
    /// ```
    pub fn parse(word: &str, feedback: &str) -> Result<Self, ValidationError> {
        let parsed_word = Word::new(word).map_err(|source| ValidationError::Word {
            input: word.to_string(),
            source,
        })?;
        let parsed_feedback = feedback
            .parse()
            .map_err(|source| ValidationError::Feedback {
                input: feedback.to_string(),
                source,
            })?;
        Ok(Self::new(parsed_word, parsed_feedback))
    }

    /// Parse the `word:feedback` form used on the command line
    ///
    /// # Errors
    /// Returns `ValidationError` if the separator is missing or either half is malformed.
    pub fn parse_pair(input: &str) -> Result<Self, ValidationError> {
        let (word, feedback) = input
            .split_once([':', '='])
            .ok_or_else(|| ValidationError::MissingSeparator(input.to_string()))?;
        Self::parse(word, feedback)
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Check whether `candidate` is consistent with this guess
    ///
    /// Rules, applied in order:
    /// 1. Correct positions must hold the guessed letter
    /// 2. Present and Absent positions must not hold the guessed letter
    /// 3. For each distinct guessed letter, with `hits` = its Correct/Present marks:
    ///    - no hits: the candidate has none of it
    ///    - hits and an Absent copy: the candidate has exactly `hits`
    ///    - hits and no Absent copy: the candidate has at least `hits`
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Guess, Word};
    ///
    /// // One E correct, the other E absent: the secret has exactly one E
    /// let guess = Guess::parse("speed", "--G--").unwrap();
    /// assert!(!guess.admits(&Word::new("theme").unwrap()));
    /// assert!(!guess.admits(&Word::new("cheek").unwrap()));
    /// assert!(guess.admits(&Word::new("chewy").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        let guessed = self.word.chars();
        let actual = candidate.chars();

        for (i, status) in self.feedback.iter().enumerate() {
            let matches = actual[i] == guessed[i];
            match status {
                LetterStatus::Correct if !matches => return false,
                // Had the letter been here, the game would have said Correct
                LetterStatus::Present | LetterStatus::Absent if matches => return false,
                _ => {}
            }
        }

        let mut seen = [false; 26];
        for &letter in guessed {
            let slot = usize::from(letter - b'a');
            if seen[slot] {
                continue;
            }
            seen[slot] = true;

            let (hits, capped) = self.letter_marks(letter);
            let have = candidate.count_of(letter);

            let consistent = match (hits, capped) {
                (0, _) => have == 0,
                (_, true) => have == hits,
                (_, false) => have >= hits,
            };
            if !consistent {
                return false;
            }
        }

        true
    }

    /// Count Correct/Present marks for `letter`, and whether any copy was Absent
    fn letter_marks(&self, letter: u8) -> (usize, bool) {
        let mut hits = 0;
        let mut capped = false;
        for i in 0..WORD_LENGTH {
            if self.word.char_at(i) != letter {
                continue;
            }
            if self.feedback.status_at(i).is_hit() {
                hits += 1;
            } else {
                capped = true;
            }
        }
        (hits, capped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use LetterStatus::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn guess(w: &str, statuses: [LetterStatus; 5]) -> Guess {
        Guess::new(word(w), Feedback::new(statuses))
    }

    #[test]
    fn correct_position_must_match() {
        let g = guess("crane", [Correct, Absent, Absent, Absent, Absent]);
        assert!(g.admits(&word("cloud")));
        assert!(!g.admits(&word("slope")));
    }

    #[test]
    fn present_letter_must_move() {
        let g = guess("crane", [Absent, Present, Absent, Absent, Absent]);
        assert!(g.admits(&word("story")));
        assert!(!g.admits(&word("wrist")), "R in the same slot");
        assert!(!g.admits(&word("mouth")), "R missing entirely");
    }

    #[test]
    fn absent_letter_rules_out_any_copy() {
        let g = guess("crane", [Absent; 5]);
        assert!(!g.admits(&word("slate")), "shares A and E");
        assert!(!g.admits(&word("crane")));
        assert!(g.admits(&word("fluid")));
    }

    #[test]
    fn capped_letter_rejects_extra_copies() {
        // SPEED: first E correct, second E absent => exactly one E
        let g = guess("speed", [Absent, Absent, Correct, Absent, Absent]);
        assert!(!g.admits(&word("elect")), "two E's");
        assert!(!g.admits(&word("cheek")), "two E's, one on the absent slot");
        assert!(g.admits(&word("chewy")), "exactly one E in the correct slot");
    }

    #[test]
    fn capped_letter_candidate_cannot_sit_on_absent_slot() {
        // One E present at slot 2, the other absent at slot 3
        let g = guess("speed", [Absent, Absent, Present, Absent, Absent]);
        assert!(!g.admits(&word("haven")), "its only E is on the absent slot");
        assert!(!g.admits(&word("eerie")), "too many E's");
        assert!(g.admits(&word("ethic")));
    }

    #[test]
    fn floor_letter_allows_more_copies() {
        // Both E's marked, none absent: at least two E's
        let g = guess("speed", [Absent, Absent, Correct, Present, Absent]);
        assert_eq!(g.letter_marks(b'e'), (2, false));
        assert!(g.admits(&word("ekeme")), "three E's is still consistent");
        assert!(!g.admits(&word("chewy")), "only one E");
    }

    #[test]
    fn parse_pair_accepts_both_separators() {
        let a = Guess::parse_pair("crane:--Y-G").unwrap();
        let b = Guess::parse_pair("CRANE=absent,absent,present,absent,correct").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.word().text(), "crane");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            Guess::parse_pair("crane"),
            Err(ValidationError::MissingSeparator(_))
        ));
        assert!(matches!(
            Guess::parse("cr4ne", "-----"),
            Err(ValidationError::Word { .. })
        ));
        assert!(matches!(
            Guess::parse("crane", "----"),
            Err(ValidationError::Feedback {
                source: FeedbackError::InvalidLength(4),
                ..
            })
        ));
        assert!(matches!(
            Guess::parse("crane", "absent,absent,absent,absent,maybe"),
            Err(ValidationError::Feedback {
                source: FeedbackError::UnknownToken(_),
                ..
            })
        ));
    }

    // Small alphabet so duplicates show up constantly
    fn arb_word() -> impl Strategy<Value = Word> {
        "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn classified_guess_admits_its_secret(secret in arb_word(), played in arb_word()) {
            let feedback = classify(&secret, &played);
            prop_assert!(Guess::new(played, feedback).admits(&secret));
        }

        #[test]
        fn classify_never_overcounts(secret in arb_word(), played in arb_word()) {
            let feedback = classify(&secret, &played);
            for &letter in played.chars() {
                let marked = played
                    .chars()
                    .iter()
                    .zip(feedback.iter())
                    .filter(|&(&ch, status)| ch == letter && status.is_hit())
                    .count();
                prop_assert!(marked <= secret.count_of(letter));
            }
        }

        #[test]
        fn admits_agrees_with_classify(
            candidate in arb_word(),
            secret in arb_word(),
            played in arb_word(),
        ) {
            let feedback = classify(&secret, &played);
            let expected = classify(&candidate, &played) == feedback;
            prop_assert_eq!(Guess::new(played, feedback).admits(&candidate), expected);
        }
    }
}
