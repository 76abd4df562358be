//! Word list loading
//!
//! A word list file is named after its word length (`5.txt` through `8.txt`)
//! and holds whitespace-separated words, normally one per line. Only the
//! first [`LIST_SIZE`] words are used.

use super::{LIST_SIZE, WordList, WordListError};
use crate::core::{Word, WordSize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Path of the word list for `size` inside `dir`
///
/// # Examples
/// ```
/// use std::path::Path;
/// use wordle_game::core::WordSize;
/// use wordle_game::wordlists::word_list_path;
///
/// let size = WordSize::try_from(6u8).unwrap();
/// assert_eq!(word_list_path(Path::new("lists"), size), Path::new("lists/6.txt"));
/// ```
#[must_use]
pub fn word_list_path(dir: &Path, size: WordSize) -> PathBuf {
    dir.join(format!("{size}.txt"))
}

/// Load the word list for `size` from `dir`
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, `TooFewWords` if it
/// holds fewer than [`LIST_SIZE`] words, and `InvalidEntry` for any word that
/// is not `size` letters.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use wordle_game::core::WordSize;
/// use wordle_game::wordlists::load;
///
/// let words = load(Path::new("."), WordSize::try_from(5u8).unwrap()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load(dir: &Path, size: WordSize) -> Result<WordList, WordListError> {
    let path = word_list_path(dir, size);
    let content = fs::read_to_string(&path).map_err(|source| WordListError::Io {
        path: path.clone(),
        source,
    })?;

    let list = parse(&content, size, &path)?;
    info!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse word list text, reading the first [`LIST_SIZE`] tokens
///
/// `path` is only used in error messages and logs.
///
/// # Errors
///
/// Same as [`load`], minus the I/O failure.
pub fn parse(content: &str, size: WordSize, path: &Path) -> Result<WordList, WordListError> {
    let mut tokens = content.split_whitespace();

    let words = tokens
        .by_ref()
        .take(LIST_SIZE)
        .enumerate()
        .map(|(i, token)| match Word::new(token) {
            Ok(word) if word.len() == size.len() => Ok(word),
            _ => Err(WordListError::InvalidEntry {
                index: i + 1,
                entry: token.to_string(),
                size,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.len() < LIST_SIZE {
        return Err(WordListError::TooFewWords {
            path: path.to_path_buf(),
            expected: LIST_SIZE,
            found: words.len(),
        });
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!(path = %path.display(), extra, "ignoring words past the first {LIST_SIZE}");
    }

    WordList::from_words(size, words)
}
