//! Terminal output formatting
//!
//! Display utilities for text mode and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_category, print_ids, print_reveal};
