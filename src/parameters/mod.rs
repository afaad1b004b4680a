//! Request parameters module
//!
//! Read-only view over raw request parameters with lenient typed accessors.
//!
//! # Overview
//!
//! Request parameters are untrusted strings. Every typed accessor falls back
//! to a caller-supplied default when a value is missing or malformed, so
//! parameter resolution never fails on bad input.

mod bag;

pub use bag::PaginationParameters;

#[cfg(test)]
mod tests;
