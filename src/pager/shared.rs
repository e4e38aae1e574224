//! Thread-safe pagination facade
//!
//! Mutations (`add_source`, `set_page_size`, `reset`) take the write lock.
//! Index construction reads the sources under an upgradable read lock and
//! only upgrades to store the result, so plain readers are never blocked by
//! a slow `count`.

use super::manager::{read_page, Pager};
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::pagination::{ActiveSource, PageIndex};
use crate::source::SharedSource;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::borrow::Cow;
use std::sync::Arc;

/// Cloneable handle to a [`Pager`] behind a read-write lock
#[derive(Debug)]
pub struct SharedPager<T> {
    inner: Arc<RwLock<Pager<T>>>,
}

impl<T> Clone for SharedPager<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedPager<T> {
    fn default() -> Self {
        Self::new(Pager::new())
    }
}

impl<T> SharedPager<T> {
    /// Wrap an existing pager
    pub fn new(pager: Pager<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(pager)),
        }
    }

    /// Create a shared pager from a config
    pub fn with_config(config: &PagerConfig) -> Result<Self> {
        Pager::with_config(config).map(Self::new)
    }

    /// Register a source after all previously registered ones
    pub fn add_source(&self, source: SharedSource<T>) {
        self.inner.write().add_source(source);
    }

    /// Current page size
    pub fn page_size(&self) -> usize {
        self.inner.read().page_size()
    }

    /// Change the page size
    pub fn set_page_size(&self, page_size: usize) -> Result<()> {
        self.inner.write().set_page_size(page_size)
    }

    /// Restore defaults, keeping registered sources
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Force the next call to rebuild the index
    pub fn invalidate(&self) {
        self.inner.write().invalidate();
    }

    /// Snapshot of the page index, built on demand
    pub fn source_info(&self) -> Result<PageIndex> {
        self.with_index(PageIndex::clone)
    }

    /// Total number of items across all sources
    pub fn total_items(&self) -> Result<usize> {
        self.with_index(|index| index.total_count)
    }

    /// Number of pages needed to show every item
    pub fn total_pages(&self) -> Result<usize> {
        self.with_index(PageIndex::total_pages)
    }

    /// Fetch global `page` (1-based). Pages past the end are empty.
    pub fn fetch_page(&self, page: usize) -> Result<Vec<T>> {
        if page < 1 {
            return Err(Error::InvalidPage { page });
        }

        let pager = self.inner.upgradable_read();
        let (items, active, fresh) = {
            let index = pager.current_or_build()?;
            let (items, active) = read_page(&pager.sources, pager.page_size, &index, page)?;
            let fresh = match index {
                Cow::Owned(index) => Some(index),
                Cow::Borrowed(_) => None,
            };
            (items, active, fresh)
        };

        let mut pager = RwLockUpgradableReadGuard::upgrade(pager);
        if let Some(index) = fresh {
            pager.cache.store(index);
        }
        pager.active = active;
        Ok(items)
    }

    /// Windows used by the most recent successful fetch
    pub fn active_sources(&self) -> Vec<ActiveSource> {
        self.inner.read().active_sources().to_vec()
    }

    /// Run `f` against a valid index, storing it first if it had to be built
    fn with_index<R>(&self, f: impl FnOnce(&PageIndex) -> R) -> Result<R> {
        let pager = self.inner.upgradable_read();
        let index = match pager.current_or_build()? {
            Cow::Borrowed(index) => return Ok(f(index)),
            Cow::Owned(index) => index,
        };
        let result = f(&index);
        RwLockUpgradableReadGuard::upgrade(pager).cache.store(index);
        Ok(result)
    }
}
