//! Pager module
//!
//! The facade callers talk to: register sources, pick a page size, fetch
//! pages of the virtual concatenated sequence.
//!
//! # Overview
//!
//! - [`Pager`] - single-owner facade with a cached page index
//! - [`SharedPager`] - cloneable, lock-protected facade for use across threads
//! - [`aggregate`] - reads resolved windows from their sources in order

mod aggregate;
mod cache;
mod manager;
mod shared;

pub use aggregate::aggregate;
pub use cache::PageCache;
pub use manager::Pager;
pub use shared::SharedPager;
