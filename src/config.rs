//! Runtime configuration
//!
//! Defaults mirror the public trivia API the board was built against.

use std::time::Duration;
use thiserror::Error;

use crate::core::NUM_CATEGORIES;

/// Root of the public trivia API
pub const DEFAULT_BASE_URL: &str = "https://jservice.io/api/";

/// Category ids are drawn from `1..=DEFAULT_MAX_ID`
pub const DEFAULT_MAX_ID: u32 = 10_000;

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors emitted while validating configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("id range 1..={max_id} cannot supply {needed} distinct categories")]
    IdRangeTooSmall { max_id: u32, needed: usize },
    #[error("base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub max_id: u32,
    pub timeout: Duration,
    /// Seed for category selection; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Serve categories from the embedded data set instead of the API
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_id: DEFAULT_MAX_ID,
            timeout: DEFAULT_TIMEOUT,
            seed: None,
            offline: false,
        }
    }
}

impl Config {
    /// Check the settings that would otherwise fail late
    ///
    /// The id range and base URL are only checked for online play; the
    /// embedded data set brings its own id range.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offline {
            return Ok(());
        }

        if (self.max_id as usize) < NUM_CATEGORIES {
            return Err(ConfigError::IdRangeTooSmall {
                max_id: self.max_id,
                needed: NUM_CATEGORIES,
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}
