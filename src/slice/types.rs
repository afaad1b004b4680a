//! Slice type

use crate::pagination::{
    unpaged_controls, PaginationControls, SharedControls, SharedPagination,
};
use std::sync::Arc;

/// An immutable page of items with its navigation
#[derive(Debug, Clone)]
pub struct Slice<T> {
    content: Vec<T>,
    controls: SharedControls,
}

impl<T> Slice<T> {
    /// Create a slice, truncating `content` to the current limit
    pub fn new<C: PaginationControls + 'static>(content: Vec<T>, controls: C) -> Self {
        Self::with_shared(content, Arc::new(controls))
    }

    /// Create a slice from shared controls, truncating `content` to the current limit
    pub fn with_shared(mut content: Vec<T>, controls: SharedControls) -> Self {
        if let Some(limit) = controls.current().limit() {
            content.truncate(limit as usize);
        }
        Self { content, controls }
    }

    /// An empty, unpaged slice
    pub fn empty() -> Self {
        Self::empty_with(unpaged_controls())
    }

    /// An empty slice at the position described by `controls`
    pub fn empty_with(controls: SharedControls) -> Self {
        Self {
            content: Vec::new(),
            controls,
        }
    }

    /// Transform every item, keeping the same controls
    ///
    /// The content was already truncated, so it is not truncated again.
    pub fn map<U, F>(self, f: F) -> Slice<U>
    where
        F: FnMut(T) -> U,
    {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            controls: self.controls,
        }
    }

    /// Items on this page, in the order they were supplied
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Take ownership of the items
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Navigation for this page
    pub fn controls(&self) -> &SharedControls {
        &self.controls
    }

    /// The pagination used to request this page
    pub fn pagination(&self) -> SharedPagination {
        self.controls.current()
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.controls.has_next()
    }

    /// Pagination of the next page
    pub fn next(&self) -> Option<SharedPagination> {
        self.controls.next()
    }

    /// Whether a previous page exists
    pub fn has_previous(&self) -> bool {
        self.controls.has_previous()
    }

    /// Pagination of the previous page
    pub fn previous(&self) -> Option<SharedPagination> {
        self.controls.previous()
    }

    /// Pagination of the first page
    pub fn first(&self) -> SharedPagination {
        self.controls.first()
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
