//! Cursor pagination system

use super::types::{decode_token, CursorPagination, CursorPaginationControls};
use crate::error::Result;
use crate::offset::LIMIT_PARAM;
use crate::pagination::{Pagination, SharedPagination};
use crate::parameters::PaginationParameters;
use crate::system::PaginationSystem;
use tracing::warn;

/// Query parameter holding the cursor token
pub const CURSOR_PARAM: &str = "cursor";

/// Recognizes `cursor`/`limit` parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorPaginationSystem {
    /// Selection priority, lower first
    pub priority: i32,
}

impl CursorPaginationSystem {
    /// Create a cursor system with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection priority
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Parse parameters into a concrete cursor pagination
    ///
    /// An empty or missing token is the first page; a malformed limit is
    /// ignored; a token that does not decode is an error.
    pub fn parse(&self, parameters: &PaginationParameters) -> Result<CursorPagination> {
        let limit = parameters.get_integer(LIMIT_PARAM, None);

        let key = match parameters.first(CURSOR_PARAM) {
            None | Some("") => None,
            Some(token) => Some(decode_token(token).inspect_err(|e| {
                warn!("Rejecting cursor parameter: {}", e);
            })?),
        };

        Ok(CursorPagination::new(key, limit))
    }

    /// Normalize any pagination into a cursor pagination
    ///
    /// - unpaged becomes the first page without a limit
    /// - a cursor pagination is returned unchanged
    /// - anything else becomes the first page with the foreign limit
    pub fn convert(pagination: &dyn Pagination) -> CursorPagination {
        if pagination.is_unpaged() {
            return CursorPagination::first_page(None);
        }

        if let Some(cursor) = pagination.as_any().downcast_ref::<CursorPagination>() {
            return cursor.clone();
        }

        CursorPagination::first_page(pagination.limit())
    }

    /// Convert a pagination and build controls for it in one step
    pub fn controls_for(
        pagination: &dyn Pagination,
        next_key: Option<String>,
    ) -> CursorPaginationControls {
        CursorPaginationControls::new(Self::convert(pagination), next_key)
    }
}

impl PaginationSystem for CursorPaginationSystem {
    fn name(&self) -> &str {
        "cursor"
    }

    fn matches(&self, parameters: &PaginationParameters) -> bool {
        parameters.contains_key(CURSOR_PARAM)
    }

    fn create(&self, parameters: &PaginationParameters) -> Result<SharedPagination> {
        Ok(self.parse(parameters)?.into_shared())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
