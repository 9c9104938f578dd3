//! One-shot category lookups

use crate::core::{Category, CategoryId};
use crate::game::Game;
use crate::loader::{CategorySource, LoadError, load_category};
use anyhow::Result;
use tokio::runtime::Runtime;

/// Fetch and shape a single category by id
///
/// # Errors
///
/// Returns `LoadError` if the category cannot be fetched.
pub fn lookup_category<S: CategorySource>(
    game: &Game<S>,
    runtime: &Runtime,
    id: CategoryId,
) -> Result<Category, LoadError> {
    runtime.block_on(load_category(game.source(), id))
}

/// Draw one round's worth of category ids without fetching them
///
/// # Errors
///
/// Returns an error if the configured id range is too small.
pub fn pick_category_ids<S>(game: &mut Game<S>) -> Result<Vec<CategoryId>> {
    Ok(game.select_ids()?)
}
