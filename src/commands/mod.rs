//! Command implementations

pub mod play;

pub use play::{load_words, run_game, run_play};
