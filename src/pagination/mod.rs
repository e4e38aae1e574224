//! Pagination module
//!
//! Maps global pages onto the sources that fill them.
//!
//! # Overview
//!
//! Sources are laid end to end in registration order, forming one virtual
//! sequence. [`build_index`] asks each source for its count once and
//! records, per source, how many items precede it and which global pages it
//! touches. [`resolve_active_sources`] then turns a global page number into
//! the source-local `(limit, offset)` windows that make up that page.
//!
//! ```text
//! page size 10, counts [7, 8, 5]
//!
//!  global  0 ......... 9 | 10 ........ 19 |
//!  page    1             | 2              |
//!  source  A A A A A A A B B B | B B B B B C C C C C
//!
//!  page 1 -> A(limit 10, offset 0), B(limit 3, offset 0)
//!  page 2 -> B(limit 10, offset 3), C(limit 5, offset 0)
//! ```

mod index;
mod resolver;
mod types;

pub use index::build_index;
pub use resolver::resolve_active_sources;
pub use types::{total_pages, ActiveSource, PageIndex, SourceDescriptor};

#[cfg(test)]
mod tests;
