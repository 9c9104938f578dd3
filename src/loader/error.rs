//! Error types for loading categories

use thiserror::Error;

use crate::core::CategoryId;

/// Errors emitted while fetching or shaping category data
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("category {id} request failed with status {status}")]
    HttpStatus {
        id: CategoryId,
        status: reqwest::StatusCode,
    },
    #[error("category {0} not found in offline data")]
    NotFound(CategoryId),
    #[error("malformed category data: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

