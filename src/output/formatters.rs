//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format scored words as `word (score)` pairs, best first
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::output::formatters::format_top_words;
/// use wordle_solver::solver::ScoredWord;
///
/// let crane = Word::new("crane").unwrap();
/// let top = [ScoredWord { word: &crane, score: 1.25 }];
/// assert_eq!(format_top_words(&top), "crane (1.2500)");
/// ```
#[must_use]
pub fn format_top_words(top: &[ScoredWord<'_>]) -> String {
    top.iter()
        .map(|scored| format!("{} ({:.4})", scored.word, scored.score))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a frequency in `[0, 1]` as a percentage
#[must_use]
pub fn format_frequency(frequency: f64) -> String {
    format!("{:5.1}%", frequency * 100.0)
}
