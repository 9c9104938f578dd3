//! Categories and their identifiers

use super::Clue;
use std::fmt;

/// Identifier of a category on the remote trivia service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(u32);

impl CategoryId {
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for CategoryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of up to five clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    #[must_use]
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_roundtrips_value() {
        let id = CategoryId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id, CategoryId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn category_holds_clues_in_order() {
        let category = Category::new(
            "Literature",
            vec![
                Clue::new("Hamlet author", "Shakespeare"),
                Clue::new("Bell Jar author", "Plath"),
            ],
        );
        assert_eq!(category.title, "Literature");
        assert_eq!(category.clues[1].answer(), "Plath");
    }
}
