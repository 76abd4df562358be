//! Formatting of guesses for terminal output

use crate::core::{Classification, Feedback, Word};
use colored::Colorize;

/// How feedback rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Each letter in bold white on a green, yellow or red background
    #[default]
    Color,
    /// The word followed by its emoji row
    Plain,
}

impl RenderStyle {
    /// Fall back to `Plain` when the terminal will not show colors
    ///
    /// Colored letters carry their classification only in the background
    /// color, so without escape codes a guess would print as bare letters.
    #[must_use]
    pub const fn resolve(self, colorize: bool) -> Self {
        match self {
            Self::Color if !colorize => Self::Plain,
            style => style,
        }
    }
}

/// Format a scored guess in the given style
#[must_use]
pub fn format_guess(word: &Word, feedback: &Feedback, style: RenderStyle) -> String {
    match style {
        RenderStyle::Color => colored_letters(word, feedback),
        RenderStyle::Plain => format!("{word} {}", feedback.to_emoji()),
    }
}

/// Each letter with the background of its classification
#[must_use]
pub fn colored_letters(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.classifications())
        .map(|(letter, class)| {
            let cell = letter.to_string().white().bold();
            match class {
                Classification::Exact => cell.on_green(),
                Classification::Close => cell.on_yellow(),
                Classification::Absent => cell.on_red(),
            }
            .to_string()
        })
        .collect()
}

/// One emoji row per guess, for a spoiler-free summary
#[must_use]
pub fn emoji_grid(history: &[(Word, Feedback)]) -> String {
    history
        .iter()
        .map(|(_, feedback)| feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
