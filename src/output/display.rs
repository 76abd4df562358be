//! Game messages for the line-oriented front end

use super::formatters::{RenderStyle, emoji_grid, format_guess};
use crate::core::WordSize;
use crate::game::{Game, GameState, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title and the number of tries
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W, size: WordSize, style: RenderStyle) -> io::Result<()> {
    let title = "This is WORDLE";
    match style {
        RenderStyle::Color => writeln!(out, "{}", title.white().bold().on_green())?,
        RenderStyle::Plain => writeln!(out, "{title}")?,
    }
    writeln!(
        out,
        "You have {} tries to guess the {}-letter word I'm thinking of",
        size.guess_budget(),
        size
    )
}

/// Prompt for the next guess (no trailing newline)
///
/// # Errors
/// Returns any error from writing to or flushing `out`.
pub fn print_prompt<W: Write>(out: &mut W, size: WordSize) -> io::Result<()> {
    write!(out, "Input a {size}-letter word: ")?;
    out.flush()
}

/// Print one scored guess as `Guess <n>: <letters>`
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_turn<W: Write>(out: &mut W, turn: &Turn, style: RenderStyle) -> io::Result<()> {
    writeln!(
        out,
        "Guess {}: {}",
        turn.attempt,
        format_guess(&turn.guess, &turn.feedback, style)
    )
}

/// Print the end-of-game message and the emoji summary
///
/// A game that is still in progress (input ran out) is reported as a loss.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game, style: RenderStyle) -> io::Result<()> {
    match (game.state(), style) {
        (GameState::Won, RenderStyle::Color) => writeln!(out, "{}", "You won!".green().bold())?,
        (GameState::Won, RenderStyle::Plain) => writeln!(out, "You won!")?,
        _ => writeln!(out, "The word was {}.", game.secret())?,
    }

    if !game.history().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", emoji_grid(game.history()))?;
    }
    Ok(())
}
