//! Command implementations

pub mod lookup;
pub mod simple;

pub use lookup::{lookup_category, pick_category_ids};
pub use simple::{load_round, run_simple};
