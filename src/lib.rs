//! Wordle Game
//!
//! A terminal word-guessing game with 5 to 8 letter words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("erase").unwrap();
//! let secret = Word::new("speed").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!(feedback.to_emoji(), "🟨⬜⬜🟨🟨");
//! assert_eq!(feedback.score(), 3);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Command-line parsing and runtime settings
pub mod cli;
pub mod config;
