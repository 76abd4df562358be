//! Guess scoring
//!
//! Each guessed letter is classified against the secret word:
//! - Exact (2 points): same letter at the same position
//! - Close (1 point): letter occurs elsewhere and an unconsumed occurrence remains
//! - Absent (0 points): no unconsumed occurrence remains
//!
//! A guess scores the sum of its classification values; `2 × length` is a win.

use super::Word;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Exact,
    Close,
    Absent,
}

impl Classification {
    /// Points contributed to the guess score
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Exact => 2,
            Self::Close => 1,
            Self::Absent => 0,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position classifications of a guess plus its total score
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    classifications: Vec<Classification>,
    score: u32,
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Both words must have the same length. Duplicate letters are handled
    /// with two passes over the guess:
    /// 1. Mark exact matches and remove them from the available pool
    /// 2. Mark close matches from whatever remains in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let secret = Word::new("speed").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.classifications(), &[Close, Absent, Absent, Close, Close]);
    /// assert_eq!(feedback.score(), 3);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut available = secret.char_counts();
        let guess = guess.chars();
        let secret = secret.chars();
        let mut result = vec![Classification::Absent; guess.len().min(secret.len())];

        // First pass: exact position matches
        for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Classification::Exact;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (slot, letter) in result.iter_mut().zip(guess) {
            if *slot == Classification::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *slot = Classification::Close;
                *count -= 1;
            }
        }

        Self::from_classifications(result)
    }

    /// Build feedback from explicit classifications, deriving the score
    #[must_use]
    pub fn from_classifications(classifications: Vec<Classification>) -> Self {
        let score = classifications.iter().map(|c| c.value()).sum();
        Self {
            classifications,
            score,
        }
    }

    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    /// Total score: 2 per Exact, 1 per Close
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Render as a row of colored squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classifications.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
