//! Page envelope types

use super::enhance::enhanced;
use crate::offset::OffsetPagination;
use crate::pagination::{Pagination, PaginationControls};
use crate::slice::Slice;
use serde::{Deserialize, Serialize};
use url::Url;

/// A hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
}

impl Link {
    /// Link to `base` with the pagination's parameters applied
    pub fn to(base: &Url, pagination: &dyn Pagination) -> Self {
        Self {
            href: enhanced(base, pagination).into(),
        }
    }
}

/// Navigation links for a fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// First page, only present when there is somewhere to navigate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    /// Previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
    /// The current page
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
}

impl PageLinks {
    /// Build links relative to `base`
    pub fn from_controls(base: &Url, controls: &dyn PaginationControls) -> Self {
        Self::from_controls_with_self(base, controls, None)
    }

    /// Build links relative to `base`, with `self_link` replacing the computed self link
    pub fn from_controls_with_self(
        base: &Url,
        controls: &dyn PaginationControls,
        self_link: Option<Link>,
    ) -> Self {
        let navigable = controls.has_previous() || controls.has_next();

        Self {
            first: navigable.then(|| Link::to(base, controls.first().as_ref())),
            prev: controls.previous().map(|p| Link::to(base, p.as_ref())),
            self_link: self_link.unwrap_or_else(|| Link::to(base, controls.current().as_ref())),
            next: controls.next().map(|p| Link::to(base, p.as_ref())),
        }
    }
}

/// Size and page number of a fetched page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Requested page size, absent when unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Zero-based page number, only known for bounded offset pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl PageMetadata {
    /// Metadata describing `pagination`
    pub fn of(pagination: &dyn Pagination) -> Self {
        let page = pagination
            .as_any()
            .downcast_ref::<OffsetPagination>()
            .and_then(|offset| offset.page_number().ok());

        Self {
            size: pagination.limit(),
            page,
        }
    }
}

/// A page of content ready to be serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicedPage<T> {
    /// Items on the page
    pub content: Vec<T>,
    /// Page metadata
    pub page: PageMetadata,
    /// Navigation links
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

impl<T> SlicedPage<T> {
    /// Assemble a page from a slice, with links relative to `base`
    pub fn from_slice(slice: Slice<T>, base: &Url) -> Self {
        Self::from_slice_with_self(slice, base, None)
    }

    /// Assemble a page whose self link is supplied by the caller
    ///
    /// The other links are still built from `base`.
    pub fn from_slice_with_self(slice: Slice<T>, base: &Url, self_link: Option<Link>) -> Self {
        let page = PageMetadata::of(slice.pagination().as_ref());
        let links =
            PageLinks::from_controls_with_self(base, slice.controls().as_ref(), self_link);

        Self {
            content: slice.into_content(),
            page,
            links,
        }
    }
}
