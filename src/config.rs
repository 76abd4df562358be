//! Runtime settings for one program run

use crate::core::WordSize;
use crate::output::RenderStyle;
use crate::wordlists::word_list_path;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub size: WordSize,
    pub words_dir: PathBuf,
    /// Fixed seed for secret selection
    pub seed: Option<u64>,
    /// Reject guesses that are not in the word list
    pub strict: bool,
    pub style: RenderStyle,
    pub tui: bool,
}

impl Settings {
    /// Settings with defaults for everything but the word size
    #[must_use]
    pub fn new(size: WordSize) -> Self {
        Self {
            size,
            words_dir: PathBuf::from("."),
            seed: None,
            strict: false,
            style: RenderStyle::default(),
            tui: false,
        }
    }

    /// `<words_dir>/<size>.txt`
    #[must_use]
    pub fn word_list_path(&self) -> PathBuf {
        word_list_path(&self.words_dir, self.size)
    }

    /// Random source for picking secrets
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
