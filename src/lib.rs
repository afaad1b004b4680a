//! # slice-pagination
//!
//! Strategy-pluggable pagination for request handlers that page through
//! result sets they fetch themselves.
//!
//! ## Features
//!
//! - **One contract, many encodings**: offset, cursor and unpaged positions
//!   behind the same [`Pagination`](pagination::Pagination) trait
//! - **Lenient parameters**: malformed request values fall back to defaults
//! - **Pluggable systems**: pick the first matching encoding by priority
//! - **Navigation without I/O**: next/previous/first computed from state
//! - **Bounded slices**: fetched rows truncated to the requested limit
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slice_pagination::offset::OffsetPaginationSystem;
//! use slice_pagination::parameters::PaginationParameters;
//! use slice_pagination::slice::Slice;
//! use slice_pagination::system::PaginationSystemRegistry;
//!
//! let registry = PaginationSystemRegistry::with_defaults();
//! let params = PaginationParameters::from_query("offset=20&limit=10");
//! let pagination = registry.resolve(&params)?;
//!
//! // fetch up to limit + 1 rows from your store
//! let rows = fetch(pagination.as_ref());
//! let has_next = rows.len() > 10;
//!
//! let controls = OffsetPaginationSystem::controls_for(pagination.as_ref(), has_next);
//! let slice = Slice::new(rows, controls);
//! assert_eq!(slice.len(), 10);
//! let next = slice.next(); // offset=30&limit=10
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PaginationParameters ──► PaginationSystemRegistry ──► Pagination
//! │                               │ select by priority            │
//! │                     ┌─────────┴─────────┐                     │
//! │                     │ Offset  │ Cursor  │ (plugins)           │
//! │                     └─────────┴─────────┘                     │
//! │  rows + has_next ──► PaginationControls ──► Slice<T> ──► links│
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Lenient request parameters
pub mod parameters;

/// Pagination abstraction and navigation controls
pub mod pagination;

/// Pluggable pagination systems and their registry
pub mod system;

/// Offset-based pagination
pub mod offset;

/// Cursor-based pagination
pub mod cursor;

/// Bounded pages of results
pub mod slice;

/// URL enhancement and page envelopes
pub mod links;

/// Registry definitions from YAML/JSON
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{Pagination, PaginationControls, Reference, SharedPagination};
pub use parameters::PaginationParameters;
pub use slice::Slice;
pub use system::{PaginationSystem, PaginationSystemRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
