//! Page aggregator

use crate::error::{Error, Result};
use crate::pagination::{ActiveSource, PageIndex};
use crate::source::SharedSource;
use tracing::warn;

/// Fetch every window from its source and concatenate the results.
///
/// Windows are read in the order given, and each source's items keep their
/// own order. A source that returns more than its limit, or fewer items than
/// its indexed count allows, fails the whole page; nothing is padded or cut.
pub fn aggregate<T>(
    entries: &[ActiveSource],
    index: &PageIndex,
    sources: &[SharedSource<T>],
) -> Result<Vec<T>> {
    let mut items = Vec::new();

    for entry in entries {
        let source = sources
            .get(entry.index)
            .ok_or(Error::SourceIndex { index: entry.index })?;
        let descriptor = index
            .get(entry.index)
            .ok_or(Error::SourceIndex { index: entry.index })?;

        let fetched = source.fetch(entry.limit, entry.offset)?;

        if fetched.len() > entry.limit {
            warn!(
                "Source '{}' returned {} items for limit {} at offset {}",
                descriptor.name,
                fetched.len(),
                entry.limit,
                entry.offset
            );
            return Err(Error::OverFetch {
                source_name: descriptor.name.clone(),
                limit: entry.limit,
                actual: fetched.len(),
            });
        }

        let expected = entry.expected_len(descriptor.count);
        if fetched.len() < expected {
            warn!(
                "Source '{}' returned {} items at offset {}, expected {}",
                descriptor.name,
                fetched.len(),
                entry.offset,
                expected
            );
            return Err(Error::ShortFetch {
                source_name: descriptor.name.clone(),
                expected,
                actual: fetched.len(),
            });
        }

        items.extend(fetched);
    }

    Ok(items)
}
