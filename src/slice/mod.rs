//! Slice module
//!
//! A [`Slice`] is one already-fetched page of items bound to the
//! [`PaginationControls`](crate::pagination::PaginationControls) describing
//! where it sits in the result stream.
//!
//! Callers typically fetch `limit + 1` rows, build controls from whether the
//! extra row came back, and hand all rows to [`Slice::new`], which truncates
//! them to the limit.

mod types;

pub use types::Slice;
