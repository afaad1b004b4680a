//! Pagination types and traits
//!
//! Defines the core pagination abstraction shared by all encodings.

use crate::error::Result;
use crate::parameters::PaginationParameters;
use crate::system::PaginationSystemRegistry;
use crate::types::ParameterMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Shared handle to a pagination of any encoding
pub type SharedPagination = Arc<dyn Pagination>;

/// Encoding-specific position inside a result stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    /// Number of items to skip
    Offset(u64),
    /// Opaque key of the last item seen
    Cursor(String),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Offset(offset) => write!(f, "{offset}"),
            Reference::Cursor(key) => f.write_str(key),
        }
    }
}

/// Core trait for positions in a result stream
///
/// Implementations are immutable values. Two paginations are only comparable
/// when produced by the same encoding.
pub trait Pagination: fmt::Debug + Send + Sync + 'static {
    /// Maximum number of items to return, `None` meaning unlimited
    fn limit(&self) -> Option<u32>;

    /// Encoding-specific position, if any
    fn reference(&self) -> Option<Reference>;

    /// Whether this position is the start of the result stream
    fn is_first_page(&self) -> bool;

    /// Canonical wire encoding of this position
    ///
    /// Feeding these parameters back through the producing system yields an
    /// equivalent pagination (same reference and limit).
    fn parameters(&self) -> ParameterMap;

    /// Whether this pagination describes "everything, no paging"
    fn is_unpaged(&self) -> bool {
        false
    }

    /// Whether a limit is set
    fn is_limited(&self) -> bool {
        self.limit().is_some()
    }

    /// Access the concrete type, for encodings that need to recognize their own values
    fn as_any(&self) -> &dyn Any;
}

// ============================================================================
// Unpaged
// ============================================================================

/// No pagination at all: unlimited, no position, no parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unpaged;

impl Pagination for Unpaged {
    fn limit(&self) -> Option<u32> {
        None
    }

    fn reference(&self) -> Option<Reference> {
        None
    }

    fn is_first_page(&self) -> bool {
        true
    }

    fn parameters(&self) -> ParameterMap {
        ParameterMap::new()
    }

    fn is_unpaged(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

static UNPAGED: LazyLock<SharedPagination> = LazyLock::new(|| Arc::new(Unpaged));

/// The shared unpaged instance
pub fn unpaged() -> SharedPagination {
    Arc::clone(&UNPAGED)
}

/// First page without any limit, which is the same as [`unpaged`]
pub fn first_page() -> SharedPagination {
    unpaged()
}

// ============================================================================
// Page Limit
// ============================================================================

/// A position-less cap on the number of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    limit: u32,
}

impl PageLimit {
    /// Create a page limit
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Pagination for PageLimit {
    fn limit(&self) -> Option<u32> {
        Some(self.limit)
    }

    fn reference(&self) -> Option<Reference> {
        None
    }

    fn is_first_page(&self) -> bool {
        true
    }

    fn parameters(&self) -> ParameterMap {
        ParameterMap::from([("limit".to_string(), json!(self.limit))])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A first page capped at `size` items
pub fn limit(size: u32) -> SharedPagination {
    Arc::new(PageLimit::new(size))
}

/// First page with a limit, which is the same as [`limit`]
pub fn first_page_of(size: u32) -> SharedPagination {
    limit(size)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve request parameters with the default registry
///
/// Falls back to [`unpaged`] when no registered system recognizes the
/// parameters. Errors only when the matching system rejects its input.
pub fn from_parameters(parameters: &PaginationParameters) -> Result<SharedPagination> {
    PaginationSystemRegistry::shared().resolve(parameters)
}
