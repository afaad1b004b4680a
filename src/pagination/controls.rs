//! Pagination controls
//!
//! Navigation derived from immutable state.

use super::types::{unpaged, SharedPagination};
use std::fmt;
use std::sync::Arc;

/// Shared handle to controls of any encoding
pub type SharedControls = Arc<dyn PaginationControls>;

/// Navigation around the page that was just fetched
///
/// Controls are built by the caller once the fetch has told it whether more
/// items exist. No method may perform I/O.
pub trait PaginationControls: fmt::Debug + Send + Sync {
    /// The pagination used to request the current page
    fn current(&self) -> SharedPagination;

    /// Pagination of the next page, `None` when this is the last page
    fn next(&self) -> Option<SharedPagination>;

    /// Pagination of the previous page, `None` when there is nothing before
    /// this page or the encoding cannot navigate backwards
    fn previous(&self) -> Option<SharedPagination>;

    /// Pagination of the first page
    ///
    /// May be the current pagination itself, or [`unpaged`] for some encodings.
    fn first(&self) -> SharedPagination;

    /// Whether a next page exists
    fn has_next(&self) -> bool {
        self.next().is_some()
    }

    /// Whether a previous page exists
    fn has_previous(&self) -> bool {
        self.previous().is_some()
    }
}

/// Controls for an unpaged result: a single page, no navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpagedControls;

impl PaginationControls for UnpagedControls {
    fn current(&self) -> SharedPagination {
        unpaged()
    }

    fn next(&self) -> Option<SharedPagination> {
        None
    }

    fn previous(&self) -> Option<SharedPagination> {
        None
    }

    fn first(&self) -> SharedPagination {
        unpaged()
    }

    fn has_next(&self) -> bool {
        false
    }

    fn has_previous(&self) -> bool {
        false
    }
}

/// Shared controls for an unpaged result
pub fn unpaged_controls() -> SharedControls {
    Arc::new(UnpagedControls)
}
