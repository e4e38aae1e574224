//! Source index builder

use super::types::{PageIndex, SourceDescriptor};
use crate::config::validate_page_size;
use crate::error::Result;
use crate::source::SharedSource;
use tracing::debug;

/// Build the page index for `sources` laid end to end.
///
/// Each source's `count` is called exactly once, in registration order.
/// The page size is validated before any source is touched.
pub fn build_index<T>(sources: &[SharedSource<T>], page_size: usize) -> Result<PageIndex> {
    validate_page_size(page_size)?;

    let mut count_before = 0;
    let mut descriptors = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        let count = source.count()?;
        let descriptor =
            SourceDescriptor::new(index, source.name(), count, count_before, page_size);
        debug!(
            "Indexed source '{}': count={} before={} pages={}..={} remaining={}",
            descriptor.name,
            descriptor.count,
            descriptor.count_before,
            descriptor.page_start,
            descriptor.page_end,
            descriptor.page_remaining
        );
        count_before += count;
        descriptors.push(descriptor);
    }

    debug!(
        "Built page index: {} sources, {} items, page size {}",
        descriptors.len(),
        count_before,
        page_size
    );

    Ok(PageIndex {
        total_count: count_before,
        page_size,
        sources: descriptors,
    })
}
