// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Multi Pager
//!
//! Page through several independent data sources as if they were one
//! concatenated result set, without ever materializing it.
//!
//! Each source only reports its own item count and returns a window of its
//! own items by local offset and limit. Given a global page size and page
//! number, the pager works out which sources to query, and with which local
//! windows, so the page holds exactly the rows of the virtual sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use multi_pager::{MockSource, Pager, Result};
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let mut pager = Pager::with_page_size(27)?;
//!     pager.add_source(Arc::new(MockSource::new("Source 1", 25)));
//!     pager.add_source(Arc::new(MockSource::new("Source 2", 15)));
//!
//!     assert_eq!(pager.total_items()?, 40);
//!     assert_eq!(pager.total_pages()?, 2);
//!
//!     let page = pager.fetch_page(1)?;
//!     assert_eq!(page[25].to_string(), "Source 2 - result_1");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Pager / SharedPager                   │
//! │  add_source  set_page_size  total_items  fetch_page  reset   │
//! └──────────────────────────────────────────────────────────────┘
//!        │ (cached, invalidated on mutation)        │ per fetch
//! ┌──────┴────────┐   ┌────────────────────┐   ┌────┴───────────┐
//! │  build_index  │ → │ resolve_active_    │ → │   aggregate    │
//! │  (count once) │   │ sources (windows)  │   │ (fetch, concat)│
//! └───────────────┘   └────────────────────┘   └────────────────┘
//!                                                     │
//!                                            DataSource::fetch
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pager configuration
pub mod config;

/// Data source trait and in-memory sources
pub mod source;

/// Page index building and page-to-source resolution
pub mod pagination;

/// Aggregation and the pagination facade
pub mod pager;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{PagerConfig, DEFAULT_PAGE_SIZE};
pub use error::{Error, Result};
pub use pager::{Pager, SharedPager};
pub use pagination::{ActiveSource, PageIndex, SourceDescriptor};
pub use source::{DataSource, MockRecord, MockSource, SharedSource, VecSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
