//! Jeopardy Board
//!
//! A terminal trivia board: six random categories from a remote trivia API,
//! five clues each, revealed question-first then answer.
//!
//! # Quick Start
//!
//! ```rust
//! use jeopardy::core::{Board, Category, Clue, Showing, Target};
//!
//! let categories = vec![Category::new("Math", vec![Clue::new("2+2", "4")])];
//! let mut board = Board::render(&categories);
//!
//! let cell = Target::Clue { row: 0, col: 0 };
//! assert_eq!(board.handle_reveal(cell), Some(Showing::Question));
//! assert_eq!(board.handle_reveal(cell), Some(Showing::Answer));
//! assert_eq!(board.handle_reveal(cell), None);
//! ```

// Core domain types
pub mod core;

// Category selection and fetching
pub mod loader;

// Round controller
pub mod game;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
