//! Links module
//!
//! Turns paginations into URLs and pages into serializable envelopes.
//!
//! # Overview
//!
//! The links module provides:
//! - [`enhance`] - Write a pagination's parameters onto a URL query
//! - [`PageLinks`] - first/prev/self/next links for a fetched page
//! - [`SlicedPage`] - Content, page metadata and links, ready for serde

mod enhance;
mod model;

pub use enhance::{enhance, enhanced};
pub use model::{Link, PageLinks, PageMetadata, SlicedPage};
