//! Pagination system module
//!
//! Pluggable recognizers that turn raw request parameters into a
//! [`Pagination`](crate::pagination::Pagination).
//!
//! # Overview
//!
//! Each [`PaginationSystem`] recognizes its own parameter encoding. The
//! [`PaginationSystemRegistry`] holds an explicit, caller-supplied list of
//! systems, sorted once by ascending priority (ties keep registration order),
//! and picks the first one that matches a request. When nothing matches, the
//! request is unpaged.

mod registry;
mod types;

pub use registry::{PaginationSystemRegistry, PaginationSystemRegistryBuilder};
pub use types::PaginationSystem;

#[cfg(test)]
mod tests;
