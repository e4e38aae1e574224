//! Data source trait
//!
//! Defines the capability every source handed to the pager must provide.

use crate::error::Result;
use std::sync::Arc;

/// A finite, ordered collection of items that can be read in windows.
///
/// `count` must stay stable between an index build and the fetches made
/// against it; there is no signal for a source whose size drifts.
pub trait DataSource: Send + Sync {
    /// Item type yielded by [`fetch`](DataSource::fetch)
    type Item;

    /// Display label, defaults to the implementing type's name
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Total number of items this source can yield
    fn count(&self) -> Result<usize>;

    /// Return up to `limit` items starting at `offset` in the source's own order.
    ///
    /// Returning fewer than `limit` items is only valid at the end of the data.
    fn fetch(&self, limit: usize, offset: usize) -> Result<Vec<Self::Item>>;
}

/// A source owned by the caller and shared with the pager
pub type SharedSource<T> = Arc<dyn DataSource<Item = T>>;
