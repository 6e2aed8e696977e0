//! Per-letter feedback and the feedback classifier
//!
//! Feedback is stored as a fixed array of five [`LetterStatus`] values, one per
//! position of the guess. It comes either from the player (parsed at the API
//! boundary) or from [`classify`], which simulates the game.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter occupies this exact position in the secret
    Correct,
    /// Letter is in the secret, but not here
    Present,
    /// Letter is not in the secret beyond the copies already marked elsewhere
    Absent,
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 entries, got {0}")]
    InvalidLength(usize),
    #[error("unrecognized feedback token '{0}'")]
    UnknownToken(String),
}

impl LetterStatus {
    /// Parse a single compact symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/'🟩' for correct
    /// - 'Y'/'y'/'🟨' for present
    /// - '-'/'_'/'.'/'X'/'B'/'⬜'/'⬛' for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'X' | 'x' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// True for Correct and Present: the letter is known to be in the secret
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

impl FromStr for LetterStatus {
    type Err = FeedbackError;

    /// Parse a player token: `correct`, `present`, `absent` (or `unknown`,
    /// which the player UI submits for an unmarked tile and means absent),
    /// or any single compact symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "correct" => return Ok(Self::Correct),
            "present" => return Ok(Self::Present),
            "absent" | "unknown" => return Ok(Self::Absent),
            _ => {}
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_symbol(ch)
                .ok_or_else(|| FeedbackError::UnknownToken(token.to_string())),
            _ => Err(FeedbackError::UnknownToken(token.to_string())),
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        })
    }
}

/// Feedback for a full guess: exactly one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Every letter absent
    pub const ALL_ABSENT: Self = Self([LetterStatus::Absent; WORD_LENGTH]);

    /// Every letter correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Build feedback from a slice, rejecting anything but exactly 5 entries
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` if the slice is not 5 long.
    pub fn from_statuses(statuses: &[LetterStatus]) -> Result<Self, FeedbackError> {
        statuses
            .try_into()
            .map(Self)
            .map_err(|_| FeedbackError::InvalidLength(statuses.len()))
    }

    /// Build feedback from player tokens such as `["absent", "present", ...]`
    ///
    /// # Errors
    /// Returns a `FeedbackError` for a wrong count or an unrecognized token.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, FeedbackError> {
        let statuses = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<LetterStatus>, _>>()?;
        Self::from_statuses(&statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Number of positions carrying `status`
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.iter().filter(|&s| s == status).count()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterStatus::emoji).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse either a compact string ("GY-G-", "🟩🟨⬜🟩⬜") or a comma separated
    /// token list ("correct,present,absent,correct,absent").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let tokens: Vec<&str> = s.split(',').collect();
            return Self::from_tokens(&tokens);
        }

        let statuses = s
            .chars()
            .map(|ch| {
                LetterStatus::from_symbol(ch)
                    .ok_or_else(|| FeedbackError::UnknownToken(ch.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_statuses(&statuses)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.iter() {
            f.write_str(match status {
                LetterStatus::Correct => "G",
                LetterStatus::Present => "Y",
                LetterStatus::Absent => "-",
            })?;
        }
        Ok(())
    }
}

/// Calculate the feedback the game shows when `guess` is played against `secret`
///
/// Implements exact Wordle rules for duplicate letters:
/// 1. First pass: mark exact matches and remove them from the secret's letter pool
/// 2. Second pass: mark remaining letters present while the pool still has copies
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Word, classify};
///
/// let secret = Word::new("erase").unwrap();
/// let guess = Word::new("eerie").unwrap();
///
/// // ERASE has two E's, both matched exactly, so the second E of EERIE is absent
/// assert_eq!(classify(&secret, &guess).to_string(), "G-Y-G");
/// ```
#[must_use]
pub fn classify(secret: &Word, guess: &Word) -> Feedback {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = secret.letter_counts();

    // Index needed to compare guess[i] with secret[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        if letter == secret.char_at(i) {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}
