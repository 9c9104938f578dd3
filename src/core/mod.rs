//! Core domain types for the Jeopardy board
//!
//! Pure data types with no I/O: clues and their reveal state, categories,
//! and the grid the presenter draws.

mod board;
mod category;
mod clue;

pub use board::{Board, NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY, Target};
pub use category::{Category, CategoryId};
pub use clue::{Clue, PLACEHOLDER, Showing};
