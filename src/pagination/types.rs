//! Pagination types
//!
//! Descriptors produced by the index builder and the per-fetch windows
//! produced by the resolver.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Where one source sits in the virtual sequence
///
/// An empty source (`count == 0`) never matches a page, whatever its page
/// fields say, so it never updates the remainder the resolver carries from
/// one matching source to the next. Its neighbours resolve as if it were
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Position in registration order
    pub index: usize,
    /// Display label of the source
    pub name: String,
    /// Item count reported at build time
    pub count: usize,
    /// Sum of the counts of all earlier sources
    pub count_before: usize,
    /// First global page (1-based) this source contributes to
    pub page_start: usize,
    /// Last global page (1-based, inclusive) this source contributes to
    pub page_end: usize,
    /// Slots left on `page_end` after this source's last item
    pub page_remaining: usize,
}

impl SourceDescriptor {
    /// Compute the descriptor for a source of `count` items placed after
    /// `count_before` items, for the given page size.
    ///
    /// An empty source gets `page_start > page_end` whenever `count_before`
    /// lands on a page boundary; resolution skips empty sources regardless.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        count: usize,
        count_before: usize,
        page_size: usize,
    ) -> Self {
        let combined = count_before + count;
        let page_start = if count_before > 0 {
            count_before / page_size + 1
        } else {
            1
        };
        let page_end = combined.div_ceil(page_size);

        Self {
            index,
            name: name.into(),
            count,
            count_before,
            page_start,
            page_end,
            page_remaining: page_end * page_size - combined,
        }
    }

    /// True when the source holds no items
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Global pages this source contributes to
    pub fn page_range(&self) -> RangeInclusive<usize> {
        self.page_start..=self.page_end
    }

    /// Check whether the source places any item on `page`
    pub fn contains_page(&self, page: usize) -> bool {
        !self.is_empty() && self.page_range().contains(&page)
    }
}

/// Source descriptors for one page size, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageIndex {
    /// Sum of all source counts
    pub total_count: usize,
    /// Page size the descriptors were computed for
    pub page_size: usize,
    /// One descriptor per registered source
    pub sources: Vec<SourceDescriptor>,
}

impl PageIndex {
    /// All descriptors, in registration order
    pub fn descriptors(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Descriptor for the source registered at `index`
    pub fn get(&self, index: usize) -> Option<&SourceDescriptor> {
        self.sources.get(index)
    }

    /// True when no sources were indexed
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Number of global pages for the indexed page size
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }
}

/// Number of pages needed to show `total_count` items, 0 when there are none
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// A source-local window to fetch for one global page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSource {
    /// Registration index of the source
    pub index: usize,
    /// Maximum number of items to request
    pub limit: usize,
    /// Offset within the source's own sequence
    pub offset: usize,
}

impl ActiveSource {
    /// Create a new window
    pub fn new(index: usize, limit: usize, offset: usize) -> Self {
        Self {
            index,
            limit,
            offset,
        }
    }

    /// Number of items a source of `count` items must return for this window
    pub fn expected_len(&self, count: usize) -> usize {
        count.saturating_sub(self.offset).min(self.limit)
    }
}
