//! Pagination module
//!
//! Supports: Unpaged, Page limit, and any encoding provided by a
//! [`PaginationSystem`](crate::system::PaginationSystem)
//!
//! # Overview
//!
//! A [`Pagination`] is an immutable description of a position and a limit in
//! a result stream. [`PaginationControls`] add navigation on top of it:
//! computing the next, previous and first positions purely from stored state,
//! without touching any data source.
//!
//! Navigation at a boundary returns `None` rather than the current position,
//! so "no such page" is never confused with "fetch the same page again".

mod controls;
mod types;

pub use controls::{unpaged_controls, PaginationControls, SharedControls, UnpagedControls};
pub use types::{
    first_page, first_page_of, from_parameters, limit, unpaged, PageLimit, Pagination, Reference,
    SharedPagination, Unpaged,
};
