//! Game state machine
//!
//! `AwaitingGuess → Scoring → (Won | AwaitingGuess | Exhausted)`

mod error;
mod state;

pub use error::GuessError;
pub use state::{Game, GameState, Turn};
