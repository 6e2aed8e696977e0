//! Core domain types for Wordle
//!
//! Words, per-letter feedback, the feedback classifier, and the consistency
//! check between a candidate and a played guess. Nothing here knows about word
//! lists or ranking.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterStatus, classify};
pub use guess::{Guess, ValidationError};
pub use word::{WORD_LENGTH, Word, WordError};
