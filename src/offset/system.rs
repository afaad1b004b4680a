//! Offset pagination system

use super::types::{OffsetPagination, OffsetPaginationControls};
use crate::error::Result;
use crate::pagination::{Pagination, SharedPagination};
use crate::parameters::PaginationParameters;
use crate::system::PaginationSystem;

/// Query parameter holding the offset
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter holding the page size
pub const LIMIT_PARAM: &str = "limit";

/// Recognizes `offset`/`limit` parameters
///
/// Any request carrying an `offset` key matches. Malformed values fall back
/// to offset 0 and the configured default limit (none unless set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetPaginationSystem {
    /// Selection priority, lower first
    pub priority: i32,
    /// Page size used when the request has no valid `limit`
    pub default_limit: Option<u32>,
    /// Upper bound applied to requested page sizes
    pub max_limit: Option<u32>,
}

impl OffsetPaginationSystem {
    /// Create an offset system with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection priority
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the page size used when none is requested
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Cap requested page sizes
    #[must_use]
    pub fn with_max_limit(mut self, limit: u32) -> Self {
        self.max_limit = Some(limit);
        self
    }

    /// Parse parameters into a concrete offset pagination
    pub fn parse(&self, parameters: &PaginationParameters) -> OffsetPagination {
        let offset = parameters.get_long(OFFSET_PARAM, 0);
        let limit = parameters
            .get_integer(LIMIT_PARAM, self.default_limit)
            .map(|limit| self.max_limit.map_or(limit, |max| limit.min(max)));

        OffsetPagination::new(offset, limit)
    }

    /// Build controls for a fetched page
    pub fn create_controls(
        pagination: &OffsetPagination,
        has_next: bool,
    ) -> OffsetPaginationControls {
        OffsetPaginationControls::new(pagination.offset(), pagination.page_size(), has_next)
    }

    /// Normalize any pagination into an offset pagination
    ///
    /// - unpaged becomes offset 0 without a limit
    /// - an offset pagination is returned unchanged
    /// - anything else becomes offset 0 with the foreign limit
    pub fn convert(pagination: &dyn Pagination) -> OffsetPagination {
        if pagination.is_unpaged() {
            return OffsetPagination::first_page();
        }

        if let Some(offset) = pagination.as_any().downcast_ref::<OffsetPagination>() {
            return *offset;
        }

        OffsetPagination::new(0, pagination.limit())
    }

    /// Convert a pagination and build controls for it in one step
    pub fn controls_for(pagination: &dyn Pagination, has_next: bool) -> OffsetPaginationControls {
        Self::create_controls(&Self::convert(pagination), has_next)
    }
}

impl PaginationSystem for OffsetPaginationSystem {
    fn name(&self) -> &str {
        "offset"
    }

    fn matches(&self, parameters: &PaginationParameters) -> bool {
        parameters.contains_key(OFFSET_PARAM)
    }

    fn create(&self, parameters: &PaginationParameters) -> Result<SharedPagination> {
        Ok(self.parse(parameters).into_shared())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
