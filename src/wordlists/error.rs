//! Word list errors

use crate::core::WordSize;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to obtain a usable word list
#[derive(Debug)]
pub enum WordListError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    TooFewWords {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// 1-based position of an entry that is not a word of the list's size
    InvalidEntry {
        index: usize,
        entry: String,
        size: WordSize,
    },
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Error opening file {}.", path.display()),
            Self::TooFewWords {
                path,
                expected,
                found,
            } => write!(
                f,
                "{} holds {found} words, expected {expected}",
                path.display()
            ),
            Self::InvalidEntry { index, entry, size } => {
                write!(f, "entry {index} ('{entry}') is not a {size}-letter word")
            }
            Self::Empty => write!(f, "word list is empty"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
