//! URL enhancement
//!
//! Replaces query parameters on a URL with a pagination's wire encoding.

use crate::pagination::Pagination;
use crate::types::query_values;
use url::Url;

/// Write the pagination's parameters onto `url`
///
/// Each parameter replaces every existing value of the same name; other
/// query parameters are kept in order. An unpaged pagination leaves the URL
/// untouched.
pub fn enhance(url: &mut Url, pagination: &dyn Pagination) {
    if pagination.is_unpaged() {
        return;
    }

    let params = pagination.parameters();
    if params.is_empty() {
        return;
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !params.contains_key(&**k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(&retained)
        .extend_pairs(
            params
                .iter()
                .flat_map(|(k, v)| query_values(v).into_iter().map(move |value| (k, value))),
        );

    if url.query() == Some("") {
        url.set_query(None);
    }
}

/// Copy of `base` with the pagination's parameters applied
pub fn enhanced(base: &Url, pagination: &dyn Pagination) -> Url {
    let mut url = base.clone();
    enhance(&mut url, pagination);
    url
}
