//! The clue grid
//!
//! A board has one header per category and a fixed number of clue rows. Each
//! slot holds the clue at that index for its category, or nothing when the
//! category came back with fewer clues. Reveal state lives in the cells, so
//! rebuilding the board resets every cell.

use super::{Category, Clue, Showing};

/// Categories per round
pub const NUM_CATEGORIES: usize = 6;

/// Maximum clues shown per category
pub const NUM_CLUES_PER_CATEGORY: usize = 5;

/// What a click or keypress points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A body slot (0-based clue row, 0-based category column)
    Clue { row: usize, col: usize },
    /// A category title
    Header { col: usize },
    /// Anything that is not part of the grid
    Outside,
}

/// Rendered grid of headers and clue cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    headers: Vec<String>,
    rows: Vec<Vec<Option<Clue>>>,
}

impl Board {
    /// Build a fresh grid from a category collection
    ///
    /// Always produces `NUM_CLUES_PER_CATEGORY` rows with one slot per category.
    /// Every clue starts hidden regardless of the state it had in `categories`.
    ///
    /// # Examples
    /// ```
    /// use jeopardy::core::{Board, Category, Clue, Target, Showing};
    ///
    /// let categories = vec![Category::new("Math", vec![Clue::new("2+2", "4")])];
    /// let mut board = Board::render(&categories);
    ///
    /// assert_eq!(board.headers(), ["Math"]);
    /// assert_eq!(board.rows().len(), 5);
    /// assert_eq!(board.handle_reveal(Target::Clue { row: 0, col: 0 }), Some(Showing::Question));
    /// assert_eq!(board.handle_reveal(Target::Clue { row: 1, col: 0 }), None);
    /// ```
    #[must_use]
    pub fn render(categories: &[Category]) -> Self {
        let headers = categories.iter().map(|c| c.title.clone()).collect();

        let rows = (0..NUM_CLUES_PER_CATEGORY)
            .map(|row| {
                categories
                    .iter()
                    .map(|category| {
                        category
                            .clues
                            .get(row)
                            .map(|clue| Clue::new(clue.question(), clue.answer()))
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Remove every header and cell
    pub fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<Clue>>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// The clue at a slot, if the slot exists and is filled
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Clue> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Number of filled slots
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.rows.iter().flatten().flatten().count()
    }

    /// Number of clues currently in the given state
    #[must_use]
    pub fn count_showing(&self, showing: Showing) -> usize {
        self.rows
            .iter()
            .flatten()
            .flatten()
            .filter(|clue| clue.showing() == showing)
            .count()
    }

    /// Apply a click to the grid
    ///
    /// Clue cells advance none → question → answer. Headers, empty slots,
    /// out-of-range positions and cells already showing their answer are
    /// left untouched. Returns the new state when a transition happened.
    pub fn handle_reveal(&mut self, target: Target) -> Option<Showing> {
        let Target::Clue { row, col } = target else {
            return None;
        };

        let clue = self.rows.get_mut(row)?.get_mut(col)?.as_mut()?;
        let next = clue.reveal();
        if let Some(state) = next {
            log::debug!("Revealed cell ({row}, {col}): {state}");
        }
        next
    }
}
