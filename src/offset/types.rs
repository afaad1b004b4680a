//! Offset pagination types

use super::system::{LIMIT_PARAM, OFFSET_PARAM};
use crate::error::{Error, Result};
use crate::pagination::{Pagination, PaginationControls, Reference, SharedPagination};
use crate::types::ParameterMap;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;

// ============================================================================
// Offset Pagination
// ============================================================================

/// A position given as an item offset and an optional page size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OffsetPagination {
    offset: u64,
    page_size: Option<u32>,
}

impl OffsetPagination {
    /// Create an offset pagination
    ///
    /// A page size of zero is treated as no page size at all.
    pub fn new(offset: u64, page_size: Option<u32>) -> Self {
        Self {
            offset,
            page_size: page_size.filter(|size| *size > 0),
        }
    }

    /// Offset 0, unlimited
    pub fn first_page() -> Self {
        Self::default()
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of items on a page, if bounded
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Zero-based page number, `offset / page_size`
    ///
    /// Undefined for an unbounded page, which is reported as
    /// [`Error::InvalidState`].
    pub fn page_number(&self) -> Result<u64> {
        match self.page_size {
            Some(size) => Ok(self.offset / u64::from(size)),
            None => Err(Error::invalid_state(format!(
                "page number is undefined for an unlimited page (offset {})",
                self.offset
            ))),
        }
    }

    /// Same offset with another page size
    #[must_use]
    pub fn with_limit(&self, limit: u32) -> Self {
        Self::new(self.offset, Some(limit))
    }

    /// Wrap into a shared pagination
    pub fn into_shared(self) -> SharedPagination {
        Arc::new(self)
    }
}

impl Pagination for OffsetPagination {
    fn limit(&self) -> Option<u32> {
        self.page_size
    }

    fn reference(&self) -> Option<Reference> {
        Some(Reference::Offset(self.offset))
    }

    fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    fn parameters(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert(OFFSET_PARAM.to_string(), json!(self.offset));
        if let Some(size) = self.page_size {
            params.insert(LIMIT_PARAM.to_string(), json!(size));
        }
        params
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Offset Pagination Controls
// ============================================================================

/// Offset arithmetic around the page that was just fetched
///
/// `has_next` comes from the caller, typically "did fetching `limit + 1`
/// rows return the extra row". Total counts are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPaginationControls {
    offset: u64,
    page_size: Option<u32>,
    has_next: bool,
}

impl OffsetPaginationControls {
    /// Create controls for the page at `offset`
    pub fn new(offset: u64, page_size: Option<u32>, has_next: bool) -> Self {
        Self {
            offset,
            page_size: page_size.filter(|size| *size > 0),
            has_next,
        }
    }

    /// The current position as a concrete offset pagination
    pub fn pagination(&self) -> OffsetPagination {
        OffsetPagination::new(self.offset, self.page_size)
    }
}

impl PaginationControls for OffsetPaginationControls {
    fn current(&self) -> SharedPagination {
        self.pagination().into_shared()
    }

    fn next(&self) -> Option<SharedPagination> {
        if !self.has_next {
            return None;
        }
        // an unlimited page already holds everything after the offset
        let size = self.page_size?;
        // no next page past the end of the offset range
        let offset = self.offset.checked_add(u64::from(size))?;
        Some(OffsetPagination::new(offset, self.page_size).into_shared())
    }

    fn previous(&self) -> Option<SharedPagination> {
        if self.offset == 0 {
            return None;
        }
        let offset = match self.page_size {
            Some(size) => self.offset.saturating_sub(u64::from(size)),
            None => 0,
        };
        Some(OffsetPagination::new(offset, self.page_size).into_shared())
    }

    fn first(&self) -> SharedPagination {
        OffsetPagination::new(0, self.page_size).into_shared()
    }

    fn has_next(&self) -> bool {
        self.has_next
            && self
                .page_size
                .is_some_and(|size| self.offset.checked_add(u64::from(size)).is_some())
    }

    fn has_previous(&self) -> bool {
        self.offset > 0
    }
}
