//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.iter())
        .map(|(ch, status)| tile(ch, status).to_string())
        .collect()
}

fn tile(ch: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}
