//! Offset pagination module
//!
//! Positions expressed as a number of items to skip plus a page size.
//! Common patterns:
//! - `?offset=100&limit=50`
//! - `?offset=0` (first page, unlimited)

mod system;
mod types;

pub use system::{OffsetPaginationSystem, LIMIT_PARAM, OFFSET_PARAM};
pub use types::{OffsetPagination, OffsetPaginationControls};
