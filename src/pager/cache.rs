//! Page index cache

use crate::error::Result;
use crate::pagination::PageIndex;

/// Holds the last built [`PageIndex`] and whether it is still valid.
///
/// Every mutation of the source list or page size must call
/// [`invalidate`](PageCache::invalidate); a dirty cache is never served.
#[derive(Debug, Clone)]
pub struct PageCache {
    index: PageIndex,
    dirty: bool,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCache {
    /// Create an empty, dirty cache
    pub fn new() -> Self {
        Self {
            index: PageIndex::default(),
            dirty: true,
        }
    }

    /// The cached index, if it is still valid
    pub fn current(&self) -> Option<&PageIndex> {
        if self.dirty {
            None
        } else {
            Some(&self.index)
        }
    }

    /// Replace the cached index and mark it valid
    pub fn store(&mut self, index: PageIndex) {
        self.index = index;
        self.dirty = false;
    }

    /// Return the cached index, rebuilding it first if stale.
    ///
    /// A failed build leaves the cache dirty.
    pub fn get_or_build<F>(&mut self, build: F) -> Result<&PageIndex>
    where
        F: FnOnce() -> Result<PageIndex>,
    {
        if self.dirty {
            self.store(build()?);
        }
        Ok(&self.index)
    }

    /// Mark the cached index stale
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Check whether the index must be rebuilt before use
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
