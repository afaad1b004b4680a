//! Pagination system trait

use crate::error::Result;
use crate::pagination::SharedPagination;
use crate::parameters::PaginationParameters;
use std::fmt;

/// A recognizer and factory for one pagination encoding
pub trait PaginationSystem: fmt::Debug + Send + Sync {
    /// Short name used in logs and listings (e.g. "offset")
    fn name(&self) -> &str;

    /// Whether the parameters use this system's encoding
    ///
    /// Called once per registered system per request, so it must be cheap and
    /// free of side effects.
    fn matches(&self, parameters: &PaginationParameters) -> bool;

    /// Build a pagination from parameters this system matched
    ///
    /// Malformed values should fall back to defaults. Return an error only to
    /// deliberately reject the input, such as a tampered cursor.
    fn create(&self, parameters: &PaginationParameters) -> Result<SharedPagination>;

    /// Order in which this system is considered, lower values first
    fn priority(&self) -> i32 {
        0
    }
}
