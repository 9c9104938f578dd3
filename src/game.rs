//! Round controller
//!
//! Owns the category collection and the board for the current round and
//! runs the select → load → render pipeline on start and on restart.

use crate::config::{Config, ConfigError};
use crate::core::{Board, Category, CategoryId, Showing, Target};
use crate::loader::{
    CategorySource, HttpSource, LoadError, OfflineSource, Source, load_all_categories_with,
    select_category_ids,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Errors emitted while setting up a round
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Game state for one board
pub struct Game<S> {
    source: S,
    rng: StdRng,
    max_id: u32,
    categories: Vec<Category>,
    board: Board,
    rounds_started: usize,
}

impl<S> Game<S> {
    /// Create a game with an empty board; call [`Game::restart`] to deal the first round
    #[must_use]
    pub fn new(source: S, max_id: u32, rng: StdRng) -> Self {
        Self {
            source,
            rng,
            max_id,
            categories: Vec::new(),
            board: Board::default(),
            rounds_started: 0,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn max_id(&self) -> u32 {
        self.max_id
    }

    /// Number of rounds that finished loading
    #[must_use]
    pub const fn rounds_started(&self) -> usize {
        self.rounds_started
    }

    /// Forward a click to the board
    pub fn handle_reveal(&mut self, target: Target) -> Option<Showing> {
        self.board.handle_reveal(target)
    }

    /// Draw the category ids for a round from this game's generator
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IdRangeTooSmall` if `max_id` is below the round size.
    pub fn select_ids(&mut self) -> Result<Vec<CategoryId>, ConfigError> {
        select_category_ids(&mut self.rng, self.max_id)
    }
}

impl<S: CategorySource> Game<S> {
    /// Discard the current round and deal a new one
    ///
    /// The old categories and board are dropped before loading starts, so a
    /// failed load leaves the game with an empty board.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if id selection or any category fetch fails.
    pub async fn restart(&mut self) -> Result<(), GameError> {
        self.restart_with(|_, _, _| {}).await
    }

    /// Like [`Game::restart`], calling `on_loaded(index, id, category)` as each category arrives
    ///
    /// # Errors
    ///
    /// Returns `GameError` if id selection or any category fetch fails.
    pub async fn restart_with<F>(&mut self, mut on_loaded: F) -> Result<(), GameError>
    where
        F: FnMut(usize, CategoryId, &Category),
    {
        self.categories.clear();
        self.board.clear();

        let ids = self.select_ids()?;
        log::info!("Loading round with categories {ids:?}");

        let categories = load_all_categories_with(&self.source, &ids, |index, category| {
            on_loaded(index, ids[index], category);
        })
        .await?;

        self.board = Board::render(&categories);
        self.categories = categories;
        self.rounds_started += 1;

        log::info!(
            "Round {} ready: {} categories, {} clues",
            self.rounds_started,
            self.board.columns(),
            self.board.clue_count()
        );
        Ok(())
    }
}

impl Game<Source> {
    /// Build a game from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the configuration is invalid or the source cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, GameError> {
        config.validate()?;

        let (source, max_id) = if config.offline {
            let offline = OfflineSource::embedded()?;
            let max_id = offline.max_id();
            (Source::Offline(offline), max_id)
        } else {
            let http = HttpSource::new(config.base_url.clone(), config.timeout)?;
            (Source::Http(http), config.max_id)
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self::new(source, max_id, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY};
    use crate::loader::{ApiCategory, ApiClue};
    use std::cell::Cell;

    /// Serves a five-clue category for any id, optionally failing after a number of fetches
    struct NumberedSource {
        fail_after: Option<usize>,
        fetched: Cell<usize>,
    }

    impl NumberedSource {
        fn reliable() -> Self {
            Self {
                fail_after: None,
                fetched: Cell::new(0),
            }
        }
    }

    impl CategorySource for NumberedSource {
        async fn fetch_category(&self, id: CategoryId) -> Result<ApiCategory, LoadError> {
            let count = self.fetched.get();
            self.fetched.set(count + 1);
            if self.fail_after.is_some_and(|limit| count >= limit) {
                return Err(LoadError::NotFound(id));
            }

            Ok(ApiCategory {
                title: Some(format!("Category {id}")),
                clues: Some(
                    (0..NUM_CLUES_PER_CATEGORY)
                        .map(|i| ApiClue {
                            question: Some(format!("q{i}")),
                            answer: Some(format!("a{i}")),
                        })
                        .collect(),
                ),
            })
        }
    }

    fn seeded_game(source: NumberedSource) -> Game<NumberedSource> {
        Game::new(source, 10_000, StdRng::seed_from_u64(3))
    }

    fn reveal_everything(game: &mut Game<NumberedSource>) {
        for row in 0..NUM_CLUES_PER_CATEGORY {
            for col in 0..NUM_CATEGORIES {
                game.handle_reveal(Target::Clue { row, col });
                game.handle_reveal(Target::Clue { row, col });
            }
        }
    }

    #[test]
    fn new_game_starts_empty() {
        let game = seeded_game(NumberedSource::reliable());
        assert!(game.board().is_empty());
        assert!(game.categories().is_empty());
        assert_eq!(game.rounds_started(), 0);
    }

    #[tokio::test]
    async fn restart_deals_full_board() {
        let mut game = seeded_game(NumberedSource::reliable());
        game.restart().await.unwrap();

        assert_eq!(game.categories().len(), NUM_CATEGORIES);
        assert_eq!(game.board().columns(), NUM_CATEGORIES);
        assert_eq!(game.board().rows().len(), NUM_CLUES_PER_CATEGORY);
        assert_eq!(game.board().count_showing(Showing::None), 30);
        assert_eq!(game.rounds_started(), 1);
    }

    #[tokio::test]
    async fn restart_resets_answered_cells() {
        let mut game = seeded_game(NumberedSource::reliable());
        game.restart().await.unwrap();
        reveal_everything(&mut game);
        assert_eq!(game.board().count_showing(Showing::Answer), 30);

        game.restart().await.unwrap();

        assert_eq!(game.board().count_showing(Showing::None), 30);
        assert_eq!(game.board().count_showing(Showing::Answer), 0);
        assert_eq!(game.rounds_started(), 2);
    }

    #[tokio::test]
    async fn failed_restart_leaves_empty_board() {
        let mut game = seeded_game(NumberedSource {
            fail_after: Some(NUM_CATEGORIES + 2),
            fetched: Cell::new(0),
        });
        game.restart().await.unwrap();
        assert!(!game.board().is_empty());

        let err = game.restart().await.unwrap_err();

        assert!(matches!(err, GameError::Load(LoadError::NotFound(_))));
        assert!(game.board().is_empty());
        assert!(game.categories().is_empty());
        assert_eq!(game.rounds_started(), 1);
    }

    #[tokio::test]
    async fn restart_reports_each_category() {
        let mut game = seeded_game(NumberedSource::reliable());
        let mut reported = Vec::new();

        game.restart_with(|index, id, category| {
            reported.push((index, id, category.title.clone()));
        })
        .await
        .unwrap();

        assert_eq!(reported.len(), NUM_CATEGORIES);
        for (i, (index, id, title)) in reported.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(title, &format!("Category {id}"));
            assert_eq!(game.categories()[i].title, *title);
        }
    }

    #[tokio::test]
    async fn small_id_range_fails_before_fetching() {
        let source = NumberedSource::reliable();
        let mut game = Game::new(source, 2, StdRng::seed_from_u64(3));

        let err = game.restart().await.unwrap_err();

        assert!(matches!(err, GameError::Config(ConfigError::IdRangeTooSmall { .. })));
        assert_eq!(game.source.fetched.get(), 0);
    }

    #[tokio::test]
    async fn offline_config_plays_a_round() {
        let config = Config {
            offline: true,
            seed: Some(11),
            ..Config::default()
        };
        let mut game = Game::from_config(&config).unwrap();
        game.restart().await.unwrap();

        assert_eq!(game.board().columns(), NUM_CATEGORIES);
        assert!(game.board().clue_count() > 0);
        assert!(game.categories().iter().all(|c| c.clues.len() <= NUM_CLUES_PER_CATEGORY));
    }

    #[test]
    fn from_config_rejects_invalid_settings() {
        let config = Config {
            max_id: 1,
            ..Config::default()
        };
        assert!(matches!(
            Game::from_config(&config),
            Err(GameError::Config(ConfigError::IdRangeTooSmall { .. }))
        ));
    }
}
