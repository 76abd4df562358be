//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_outcome, print_prompt, print_turn};
pub use formatters::RenderStyle;
