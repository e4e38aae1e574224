//! Pagination facade
//!
//! Owns the registered sources, the page size, and the cached page index.

use super::aggregate::aggregate;
use super::cache::PageCache;
use crate::config::{validate_page_size, PagerConfig, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::pagination::{build_index, resolve_active_sources, ActiveSource, PageIndex};
use crate::source::SharedSource;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// Pages through several sources as if they were one sequence
pub struct Pager<T> {
    pub(super) sources: Vec<SharedSource<T>>,
    pub(super) page_size: usize,
    pub(super) cache: PageCache,
    pub(super) active: Vec<ActiveSource>,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("sources", &self.sources.len())
            .field("page_size", &self.page_size)
            .field("cache", &self.cache)
            .field("active", &self.active)
            .finish()
    }
}

impl<T> Pager<T> {
    /// Create a pager with the default page size and no sources
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            cache: PageCache::new(),
            active: Vec::new(),
        }
    }

    /// Create a pager with the given page size
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        let mut pager = Self::new();
        pager.set_page_size(page_size)?;
        Ok(pager)
    }

    /// Create a pager from a config
    pub fn with_config(config: &PagerConfig) -> Result<Self> {
        Self::with_page_size(config.page_size)
    }

    /// Register a source after all previously registered ones
    pub fn add_source(&mut self, source: SharedSource<T>) {
        debug!(
            "Adding source '{}' at index {}",
            source.name(),
            self.sources.len()
        );
        self.sources.push(source);
        self.invalidate();
    }

    /// Registered sources, in registration order
    pub fn sources(&self) -> &[SharedSource<T>] {
        &self.sources
    }

    /// Current page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        validate_page_size(page_size)?;
        self.page_size = page_size;
        self.invalidate();
        Ok(())
    }

    /// The page index for the current sources and page size, built on demand
    pub fn source_info(&mut self) -> Result<&PageIndex> {
        self.refresh()
    }

    /// Total number of items across all sources
    pub fn total_items(&mut self) -> Result<usize> {
        Ok(self.refresh()?.total_count)
    }

    /// Number of pages needed to show every item
    pub fn total_pages(&mut self) -> Result<usize> {
        Ok(self.refresh()?.total_pages())
    }

    /// Fetch global `page` (1-based). Pages past the end are empty.
    pub fn fetch_page(&mut self, page: usize) -> Result<Vec<T>> {
        if page < 1 {
            return Err(Error::InvalidPage { page });
        }
        let index = self
            .cache
            .get_or_build(|| build_index(&self.sources, self.page_size))?;
        let (items, active) = read_page(&self.sources, self.page_size, index, page)?;
        self.active = active;
        Ok(items)
    }

    /// Windows used by the most recent successful [`fetch_page`](Pager::fetch_page)
    pub fn active_sources(&self) -> &[ActiveSource] {
        &self.active
    }

    /// Drop the cached index and fetch history, and restore the default page size.
    /// Registered sources are kept.
    pub fn reset(&mut self) {
        self.page_size = DEFAULT_PAGE_SIZE;
        self.active.clear();
        self.invalidate();
    }

    /// Force the next call to rebuild the index, e.g. after a source's count changed
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Check whether the cached index is stale
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    fn refresh(&mut self) -> Result<&PageIndex> {
        self.cache
            .get_or_build(|| build_index(&self.sources, self.page_size))
    }

    /// The cached index, or a freshly built one that has not been stored yet
    pub(super) fn current_or_build(&self) -> Result<Cow<'_, PageIndex>> {
        match self.cache.current() {
            Some(index) => Ok(Cow::Borrowed(index)),
            None => build_index(&self.sources, self.page_size).map(Cow::Owned),
        }
    }
}

/// Resolve and read one page against a built index
pub(super) fn read_page<T>(
    sources: &[SharedSource<T>],
    page_size: usize,
    index: &PageIndex,
    page: usize,
) -> Result<(Vec<T>, Vec<ActiveSource>)> {
    let active = resolve_active_sources(index, page_size, page)?;
    let items = aggregate(&active, index, sources)?;
    debug!(
        "Fetched page {}: {} items from {} sources",
        page,
        items.len(),
        active.len()
    );
    Ok((items, active))
}
