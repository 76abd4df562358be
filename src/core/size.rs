//! Supported word lengths

use std::fmt;

/// Length of the words in a game (5 through 8 letters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSize(u8);

/// Error for an unsupported word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSizeError(pub u64);

impl fmt::Display for WordSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wordsize must be either 5, 6, 7, or 8 (got {})", self.0)
    }
}

impl std::error::Error for WordSizeError {}

impl WordSize {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 8;

    /// All supported sizes, smallest first
    pub const ALL: [Self; 4] = [Self(5), Self(6), Self(7), Self(8)];

    /// Number of letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0 as usize
    }

    /// Always false
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Maximum number of guesses in one game: one more than the word length
    #[inline]
    #[must_use]
    pub const fn guess_budget(self) -> usize {
        self.len() + 1
    }

    /// Score of a fully correct guess
    #[inline]
    #[must_use]
    pub const fn perfect_score(self) -> u32 {
        2 * self.0 as u32
    }
}

impl TryFrom<u64> for WordSize {
    type Error = WordSizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(WordSizeError(value)),
        }
    }
}

impl TryFrom<u8> for WordSize {
    type Error = WordSizeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl std::str::FromStr for WordSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s
            .trim()
            .parse()
            .map_err(|_| format!("wordsize must be either 5, 6, 7, or 8 (got '{s}')"))?;
        Self::try_from(n).map_err(|e| e.to_string())
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
