//! Active source resolver

use super::types::{total_pages, ActiveSource, PageIndex};
use crate::config::validate_page_size;
use crate::error::{Error, Result};
use tracing::debug;

/// Work out which sources fill global `page`, and with which local windows.
///
/// Returns windows in registration order. A page beyond the last one (or an
/// index with no sources) yields no windows. `page_size` must be the size
/// the index was built for; descriptors are meaningless for any other.
pub fn resolve_active_sources(
    index: &PageIndex,
    page_size: usize,
    page: usize,
) -> Result<Vec<ActiveSource>> {
    validate_page_size(page_size)?;
    if page < 1 {
        return Err(Error::InvalidPage { page });
    }
    if page_size != index.page_size {
        return Err(Error::config(format!(
            "page index was built for page size {}, not {}",
            index.page_size, page_size
        )));
    }

    let last_page = total_pages(index.total_count, page_size);
    if page > last_page {
        debug!(
            "Page {} is past the last page ({}), nothing to fetch",
            page, last_page
        );
        return Ok(Vec::new());
    }

    let mut active = Vec::new();
    // Slots the previous matching source left free on this page
    let mut previous_remaining = 0;

    for source in index.descriptors() {
        if !source.contains_page(page) {
            continue;
        }

        let window = if page == source.page_start {
            let limit = if previous_remaining > 0 {
                previous_remaining
            } else {
                page_size
            };
            ActiveSource::new(source.index, limit, 0)
        } else {
            // page * size - (size - previous) - before, ordered to stay unsigned
            let offset = page * page_size + previous_remaining - page_size - source.count_before;
            ActiveSource::new(source.index, page_size, offset)
        };

        debug!(
            "Page {} uses source '{}': limit={} offset={}",
            page, source.name, window.limit, window.offset
        );
        active.push(window);
        previous_remaining = source.page_remaining;
    }

    Ok(active)
}
