//! Cursor pagination types

use super::system::CURSOR_PARAM;
use crate::error::{Error, Result};
use crate::offset::LIMIT_PARAM;
use crate::pagination::{Pagination, PaginationControls, Reference, SharedPagination};
use crate::types::ParameterMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;

/// Encode a cursor key into its wire token
pub fn encode_token(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

/// Decode a wire token back into a cursor key
pub fn decode_token(token: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.as_bytes())
        .map_err(|e| Error::invalid_cursor(format!("'{token}' is not valid base64url: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|_| Error::invalid_cursor(format!("'{token}' does not decode to UTF-8")))
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// A position after the item identified by `key`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CursorPagination {
    key: Option<String>,
    limit: Option<u32>,
}

impl CursorPagination {
    /// Create a cursor pagination
    ///
    /// An empty key is the first page. A limit of zero means no limit.
    pub fn new(key: Option<String>, limit: Option<u32>) -> Self {
        Self {
            key: key.filter(|k| !k.is_empty()),
            limit: limit.filter(|l| *l > 0),
        }
    }

    /// First page with an optional limit
    pub fn first_page(limit: Option<u32>) -> Self {
        Self::new(None, limit)
    }

    /// Key of the last item seen, `None` on the first page
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Wire token for this position, empty on the first page
    pub fn token(&self) -> String {
        self.key.as_deref().map(encode_token).unwrap_or_default()
    }

    /// Wrap into a shared pagination
    pub fn into_shared(self) -> SharedPagination {
        Arc::new(self)
    }
}

impl Pagination for CursorPagination {
    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn reference(&self) -> Option<Reference> {
        self.key.clone().map(Reference::Cursor)
    }

    fn is_first_page(&self) -> bool {
        self.key.is_none()
    }

    fn parameters(&self) -> ParameterMap {
        // the cursor key stays present on the first page so the request
        // is still recognized as cursor-paged
        let mut params = ParameterMap::new();
        params.insert(CURSOR_PARAM.to_string(), json!(self.token()));
        if let Some(limit) = self.limit {
            params.insert(LIMIT_PARAM.to_string(), json!(limit));
        }
        params
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Cursor Pagination Controls
// ============================================================================

/// Forward-only navigation
///
/// The caller supplies the key of the last item on the page when it knows
/// another page follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPaginationControls {
    current: CursorPagination,
    next_key: Option<String>,
}

impl CursorPaginationControls {
    /// Create controls for a fetched page
    pub fn new(current: CursorPagination, next_key: Option<String>) -> Self {
        Self {
            current,
            next_key: next_key.filter(|k| !k.is_empty()),
        }
    }

    /// The current position as a concrete cursor pagination
    pub fn pagination(&self) -> &CursorPagination {
        &self.current
    }
}

impl PaginationControls for CursorPaginationControls {
    fn current(&self) -> SharedPagination {
        self.current.clone().into_shared()
    }

    fn next(&self) -> Option<SharedPagination> {
        self.next_key
            .clone()
            .map(|key| CursorPagination::new(Some(key), self.current.limit).into_shared())
    }

    fn previous(&self) -> Option<SharedPagination> {
        None
    }

    fn first(&self) -> SharedPagination {
        CursorPagination::first_page(self.current.limit).into_shared()
    }

    fn has_next(&self) -> bool {
        self.next_key.is_some()
    }

    fn has_previous(&self) -> bool {
        false
    }
}
