//! Word lists
//!
//! A game draws its secret from a list of [`LIST_SIZE`] words of one length,
//! stored on disk as `<N>.txt` (see [`loader`]).

mod error;
pub mod loader;

pub use error::WordListError;
pub use loader::{load, word_list_path};

use crate::core::{Word, WordSize};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Number of words read from a word list file
pub const LIST_SIZE: usize = 1000;

/// Words of a single length to draw secrets from
#[derive(Debug, Clone)]
pub struct WordList {
    size: WordSize,
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from words already in memory
    ///
    /// Duplicates are kept, so a repeated word is proportionally more likely
    /// to be drawn.
    ///
    /// # Errors
    /// Returns `WordListError::InvalidEntry` for a word of the wrong length and
    /// `WordListError::Empty` if there are no words at all.
    pub fn from_words(
        size: WordSize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        let words: Vec<Word> = words.into_iter().collect();

        if let Some((i, word)) = words
            .iter()
            .enumerate()
            .find(|(_, word)| word.len() != size.len())
        {
            return Err(WordListError::InvalidEntry {
                index: i + 1,
                entry: word.text().to_string(),
                size,
            });
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let lookup = words.iter().cloned().collect();
        Ok(Self {
            size,
            words,
            lookup,
        })
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> WordSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
