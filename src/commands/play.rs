//! Line-oriented game loop
//!
//! Reads one guess per line, prints each scored guess, and ends on a win, an
//! exhausted budget, or end of input.

use crate::config::Settings;
use crate::game::{Game, GameState};
use crate::output::{RenderStyle, print_banner, print_outcome, print_prompt, print_turn};
use crate::wordlists::{self, WordList};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument};

/// Play `game` to the end over the given input and output
///
/// Wrong-length guesses are re-prompted silently; other rejected guesses
/// print their reason first. Running out of input ends the game as a loss.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[instrument(skip_all, fields(size = %game.size()))]
pub fn run_game<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
    style: RenderStyle,
) -> Result<GameState> {
    print_banner(out, game.size(), style)?;

    let mut line = String::new();
    while !game.is_over() {
        print_prompt(out, game.size())?;

        line.clear();
        if input.read_line(&mut line).context("reading guess")? == 0 {
            writeln!(out)?;
            info!(attempts = game.attempts_used(), "input closed before the game ended");
            break;
        }

        match game.submit(&line) {
            Ok(turn) => print_turn(out, &turn, style)?,
            Err(err) if err.is_silent() => {}
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    print_outcome(out, game, style)?;
    Ok(game.state())
}

/// Load the word list, pick a secret, and play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or terminal I/O fails.
pub fn run_play(settings: &Settings) -> Result<GameState> {
    let words = Rc::new(load_words(settings)?);
    let mut game = Game::draw(&words, &mut settings.rng());
    if settings.strict {
        game = game.with_dictionary(Rc::clone(&words));
    }
    info!(size = %settings.size, strict = settings.strict, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(&mut game, &mut stdin.lock(), &mut stdout.lock(), settings.style)
}

/// Load the word list named by `settings`, with the path in any error
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or malformed.
pub fn load_words(settings: &Settings) -> Result<WordList> {
    wordlists::load(&settings.words_dir, settings.size)
        .with_context(|| format!("loading {}", settings.word_list_path().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Cursor;

    fn play(secret: &str, input: &str) -> (GameState, String) {
        let mut game = Game::new(Word::new(secret).unwrap()).unwrap();
        let mut out = Vec::new();
        let state = run_game(
            &mut game,
            &mut Cursor::new(input.as_bytes()),
            &mut out,
            RenderStyle::Plain,
        )
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_transcript() {
        let (state, out) = play("speed", "erase\nspeed\n");
        assert_eq!(state, GameState::Won);
        assert_eq!(
            out,
            "This is WORDLE\n\
             You have 6 tries to guess the 5-letter word I'm thinking of\n\
             Input a 5-letter word: Guess 1: erase 🟨⬜⬜🟨🟨\n\
             Input a 5-letter word: Guess 2: speed 🟩🟩🟩🟩🟩\n\
             You won!\n\
             \n\
             🟨⬜⬜🟨🟨\n\
             🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn wrong_length_reprompts_silently() {
        let (state, out) = play("speed", "spe\nspeeds\nspeed\n");
        assert_eq!(state, GameState::Won);
        assert_eq!(out.matches("Input a 5-letter word: ").count(), 3);
        assert!(out.contains("Guess 1: speed"));
        assert!(!out.contains("letters, got"));
    }

    #[test]
    fn invalid_and_repeated_guesses_explain() {
        let (_, out) = play("speed", "sp3ed\ncrane\ncrane\nspeed\n");
        assert!(out.contains("Invalid input! Use only letters.\n"));
        assert!(out.contains("You have already guessed 'crane'.\n"));
        assert!(out.contains("Guess 2: speed"));
    }

    #[test]
    fn loss_after_budget() {
        let input = "crane\nslate\naudio\nbumpy\nfight\njoker\nspeed\n";
        let (state, out) = play("speed", input);
        assert_eq!(state, GameState::Exhausted);
        assert!(out.contains("Guess 6: joker"));
        assert!(!out.contains("Guess 7"));
        assert!(out.contains("The word was speed.\n"));
    }

    #[test]
    fn end_of_input_reveals_word() {
        let (state, out) = play("speed", "crane\n");
        assert_eq!(state, GameState::AwaitingGuess);
        assert!(out.contains("The word was speed.\n"));
    }

    #[test]
    fn longer_words_get_longer_budget() {
        let (state, out) = play("absolute", "");
        assert_eq!(state, GameState::AwaitingGuess);
        assert!(out.contains("You have 9 tries to guess the 8-letter word"));
    }
}
