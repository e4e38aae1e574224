//! Data source module
//!
//! Supports: any type implementing [`DataSource`], in-memory vectors, mock records
//!
//! # Overview
//!
//! A data source only knows two things about itself: how many items it
//! holds and how to return a window of them by local offset and limit.
//! The pager stitches many of them into one virtual sequence.

mod sources;
mod types;

pub use sources::{MockRecord, MockSource, VecSource};
pub use types::{DataSource, SharedSource};
