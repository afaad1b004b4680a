//! Cursor pagination module
//!
//! Forward-only positions expressed as an opaque key of the last item seen.
//! Common patterns:
//! - `?cursor=b3JkZXJfMTIz&limit=50`
//! - `?cursor=` (first page)
//!
//! The key travels base64url-encoded. A token that does not decode is
//! rejected with [`Error::InvalidCursor`](crate::error::Error::InvalidCursor)
//! instead of silently restarting from the first page.

mod system;
mod types;

pub use system::{CursorPaginationSystem, CURSOR_PARAM};
pub use types::{decode_token, encode_token, CursorPagination, CursorPaginationControls};
