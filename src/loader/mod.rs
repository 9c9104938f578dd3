//! Category data loading
//!
//! Picks random category ids, fetches each category through a
//! [`CategorySource`], and shapes the payload into board-ready [`Category`]
//! values (at most five clues, all hidden).

mod error;
mod http;
mod offline;

pub use error::LoadError;
pub use http::HttpSource;
pub use offline::OfflineSource;

use crate::config::ConfigError;
use crate::core::{Category, CategoryId, Clue, NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY};
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::future::Future;

/// Category payload as served by the trivia API
///
/// Fields the board does not use (ids, values, air dates) are ignored. A
/// missing or `null` title or clue list is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCategory {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Option<Vec<ApiClue>>,
}

/// Clue payload as served by the trivia API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Something that can fetch a raw category by id
pub trait CategorySource {
    /// Fetch one category
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the category cannot be retrieved or parsed.
    fn fetch_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<ApiCategory, LoadError>>;
}

/// Source chosen at runtime from configuration
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    Offline(OfflineSource),
}

impl CategorySource for Source {
    async fn fetch_category(&self, id: CategoryId) -> Result<ApiCategory, LoadError> {
        match self {
            Self::Http(source) => source.fetch_category(id).await,
            Self::Offline(source) => source.fetch_category(id).await,
        }
    }
}

/// Pick `NUM_CATEGORIES` distinct ids from `1..=max_id`
///
/// Draws uniformly and retries on collision until enough distinct ids are
/// collected. Ids are returned in draw order.
///
/// # Errors
///
/// Returns `ConfigError::IdRangeTooSmall` if the range holds fewer than
/// `NUM_CATEGORIES` ids, since sampling could never finish.
///
/// # Examples
/// ```
/// use jeopardy::loader::select_category_ids;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let ids = select_category_ids(&mut rng, 10_000).unwrap();
/// assert_eq!(ids.len(), 6);
/// ```
pub fn select_category_ids<R: Rng>(
    rng: &mut R,
    max_id: u32,
) -> Result<Vec<CategoryId>, ConfigError> {
    if (max_id as usize) < NUM_CATEGORIES {
        return Err(ConfigError::IdRangeTooSmall {
            max_id,
            needed: NUM_CATEGORIES,
        });
    }

    let mut seen = FxHashSet::default();
    let mut ids = Vec::with_capacity(NUM_CATEGORIES);

    while ids.len() < NUM_CATEGORIES {
        let candidate = rng.random_range(1..=max_id);
        if seen.insert(candidate) {
            ids.push(CategoryId::new(candidate));
        }
    }

    Ok(ids)
}

/// Turn an API payload into a board category
///
/// Keeps the first `NUM_CLUES_PER_CATEGORY` clues; shorter lists are kept as-is.
#[must_use]
pub fn shape_category(raw: ApiCategory) -> Category {
    let clues = raw
        .clues
        .unwrap_or_default()
        .into_iter()
        .take(NUM_CLUES_PER_CATEGORY)
        .map(|clue| {
            Clue::new(
                clue.question.unwrap_or_default(),
                clue.answer.unwrap_or_default(),
            )
        })
        .collect();

    Category::new(raw.title.unwrap_or_default(), clues)
}

/// Fetch and shape a single category
///
/// # Errors
///
/// Propagates any `LoadError` from the source.
pub async fn load_category<S: CategorySource>(
    source: &S,
    id: CategoryId,
) -> Result<Category, LoadError> {
    log::debug!("Fetching category {id}");
    let raw = source.fetch_category(id).await?;
    Ok(shape_category(raw))
}

/// Load every id in order, one fetch at a time
///
/// The first failure aborts the whole load.
///
/// # Errors
///
/// Propagates the first `LoadError` encountered.
pub async fn load_all_categories<S: CategorySource>(
    source: &S,
    ids: &[CategoryId],
) -> Result<Vec<Category>, LoadError> {
    load_all_categories_with(source, ids, |_, _| {}).await
}

/// Like [`load_all_categories`], calling `on_loaded(index, category)` after each fetch
///
/// # Errors
///
/// Propagates the first `LoadError` encountered.
pub async fn load_all_categories_with<S, F>(
    source: &S,
    ids: &[CategoryId],
    mut on_loaded: F,
) -> Result<Vec<Category>, LoadError>
where
    S: CategorySource,
    F: FnMut(usize, &Category),
{
    let mut categories = Vec::with_capacity(ids.len());

    for (index, &id) in ids.iter().enumerate() {
        let category = load_category(source, id).await?;
        on_loaded(index, &category);
        categories.push(category);
    }

    Ok(categories)
}
