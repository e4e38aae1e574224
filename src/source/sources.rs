//! Data source implementations
//!
//! In-memory sources, useful on their own and as test doubles.

use super::types::DataSource;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Vec Source
// ============================================================================

/// Source backed by an in-memory vector
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: Vec<T>,
    name: Option<String>,
}

impl<T> VecSource<T> {
    /// Create a new vector source
    pub fn new(items: Vec<T>) -> Self {
        Self { items, name: None }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get all items
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone + Send + Sync> DataSource for VecSource<T> {
    type Item = T;

    fn name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| std::any::type_name::<Self>().to_string())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.items.len())
    }

    fn fetch(&self, limit: usize, offset: usize) -> Result<Vec<T>> {
        Ok(self.items.iter().skip(offset).take(limit).cloned().collect())
    }
}

// ============================================================================
// Mock Source
// ============================================================================

/// A record produced by [`MockSource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockRecord {
    /// Name of the source that produced the record
    pub source: String,
    /// Payload, `result_<n>` with `n` starting at 1
    pub data: String,
}

impl fmt::Display for MockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.source, self.data)
    }
}

/// Named source of generated `result_<n>` records
///
/// Records are generated once on construction, so every fetch sees the
/// same data.
#[derive(Debug, Clone)]
pub struct MockSource {
    inner: VecSource<MockRecord>,
}

impl MockSource {
    /// Create a mock source holding `count` records
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        let name = name.into();
        let records = (1..=count)
            .map(|n| MockRecord {
                source: name.clone(),
                data: format!("result_{n}"),
            })
            .collect();
        Self {
            inner: VecSource::new(records).with_name(name),
        }
    }

    /// Get all generated records
    pub fn records(&self) -> &[MockRecord] {
        self.inner.items()
    }
}

impl DataSource for MockSource {
    type Item = MockRecord;

    fn name(&self) -> String {
        self.inner.name()
    }

    fn count(&self) -> Result<usize> {
        self.inner.count()
    }

    fn fetch(&self, limit: usize, offset: usize) -> Result<Vec<MockRecord>> {
        self.inner.fetch(limit, offset)
    }
}
