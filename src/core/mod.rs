//! Core domain types for the game
//!
//! Pure value types and the scoring function. Nothing here performs I/O.

mod feedback;
mod size;
mod word;

pub use feedback::{Classification, Feedback};
pub use size::{WordSize, WordSizeError};
pub use word::{Word, WordError};
