//! Embedded category data
//!
//! Compiled into the binary so a round can be played without the network.
//! Ids are 1-based positions in the data file.

use super::{ApiCategory, CategorySource, LoadError};
use crate::core::CategoryId;

const EMBEDDED: &str = include_str!("../../data/categories.json");

/// Serves categories from a fixed in-memory list
#[derive(Debug, Clone)]
pub struct OfflineSource {
    categories: Vec<ApiCategory>,
}

impl OfflineSource {
    /// Load the data set bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` if the bundled data is malformed.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json(EMBEDDED)
    }

    /// Parse a JSON array of categories
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` if `json` is not an array of category objects.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let categories = serde_json::from_str(json)?;
        Ok(Self { categories })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Highest id this source can serve
    #[must_use]
    pub fn max_id(&self) -> u32 {
        u32::try_from(self.categories.len()).unwrap_or(u32::MAX)
    }

    fn get(&self, id: CategoryId) -> Option<&ApiCategory> {
        let index = usize::try_from(id.value()).ok()?.checked_sub(1)?;
        self.categories.get(index)
    }
}

impl CategorySource for OfflineSource {
    async fn fetch_category(&self, id: CategoryId) -> Result<ApiCategory, LoadError> {
        self.get(id).cloned().ok_or(LoadError::NotFound(id))
    }
}
