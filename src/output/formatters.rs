//! Formatting utilities for terminal output

use crate::core::{Guess, HintKind};
use colored::{ColoredString, Colorize};

/// Color a single letter by its hint
#[must_use]
pub fn colorize_letter(letter: char, kind: HintKind) -> ColoredString {
    let text = format!(" {letter} ");
    match kind {
        HintKind::Exact => text.black().on_green().bold(),
        HintKind::Present => text.black().on_yellow().bold(),
        HintKind::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colorize_guess(guess: &Guess) -> String {
    guess
        .hints()
        .iter()
        .map(|hint| colorize_letter(hint.letter(), hint.kind()).to_string())
        .collect()
}

/// Render a whole history as an emoji grid, one guess per line
#[must_use]
pub fn history_to_emoji(history: &[Guess]) -> String {
    history
        .iter()
        .map(Guess::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// "1 guess", "3 guesses"
#[must_use]
pub fn guess_count(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
