//! Command-line interface

use crate::config::Settings;
use crate::core::WordSize;
use crate::output::RenderStyle;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word: 5 to 8 letters, word length + 1 tries",
    version
)]
pub struct Cli {
    /// Word length: 5, 6, 7 or 8
    #[arg(value_name = "WORDSIZE", value_parser = parse_word_size)]
    pub word_size: WordSize,

    /// Directory holding the word lists (5.txt, 6.txt, 7.txt, 8.txt)
    #[arg(short = 'd', long, env = "WORDLE_WORDS_DIR", default_value = ".")]
    pub words_dir: PathBuf,

    /// Seed for choosing the secret word (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only accept guesses that appear in the word list
    #[arg(long)]
    pub strict: bool,

    /// Print the emoji row instead of colored letters
    #[arg(long)]
    pub no_color: bool,

    /// Full-screen interactive mode
    #[arg(long)]
    pub tui: bool,
}

fn parse_word_size(s: &str) -> Result<WordSize, String> {
    s.parse()
}

impl Cli {
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            size: self.word_size,
            words_dir: self.words_dir,
            seed: self.seed,
            strict: self.strict,
            style: if self.no_color {
                RenderStyle::Plain
            } else {
                RenderStyle::Color
            },
            tui: self.tui,
        }
    }
}
