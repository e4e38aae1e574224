//! Pager configuration
//!
//! Configuration can be built in code or loaded from YAML/JSON text:
//!
//! ```yaml
//! page_size: 25
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for a [`Pager`](crate::pager::Pager)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Number of items per global page
    pub page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagerConfig {
    /// Create a config with the given page size
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Parse a config from YAML
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no pager can run with
    pub fn validate(&self) -> Result<()> {
        validate_page_size(self.page_size)
    }
}

/// Check that a page size is usable
pub fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::config("page size must be greater than zero"));
    }
    Ok(())
}
