//! Guess rejection reasons
//!
//! None of these consume a guess from the budget; the caller re-prompts.

use crate::core::{Word, WordError};
use std::fmt;

/// Why a submitted guess was not scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The game already ended in a win or an exhausted budget
    GameOver,
    WrongLength { expected: usize, found: usize },
    InvalidWord(WordError),
    AlreadyGuessed(Word),
    /// Only produced when the game checks guesses against its word list
    NotInWordList(Word),
}

impl GuessError {
    /// Wrong-length input is re-prompted without any notice
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::WrongLength { .. })
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::WrongLength { expected, found } => {
                write!(f, "Guess must be {expected} letters, got {found}")
            }
            Self::InvalidWord(_) => write!(f, "Invalid input! Use only letters."),
            Self::AlreadyGuessed(word) => write!(f, "You have already guessed '{word}'."),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list."),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wrong_length_is_silent() {
        assert!(GuessError::WrongLength { expected: 5, found: 3 }.is_silent());
        assert!(!GuessError::GameOver.is_silent());
        assert!(!GuessError::InvalidWord(WordError::InvalidCharacters).is_silent());
    }

    #[test]
    fn messages() {
        let word = Word::new("crane").unwrap();
        assert_eq!(
            GuessError::AlreadyGuessed(word.clone()).to_string(),
            "You have already guessed 'crane'."
        );
        assert_eq!(
            GuessError::NotInWordList(word).to_string(),
            "'crane' is not in the word list."
        );
    }
}
