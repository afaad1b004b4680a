//! Parameter bag
//!
//! Owns a copy of the request parameters and never mutates it.

use crate::types::{query_values, MultiValueMap, ParameterMap};
use std::fmt::Display;
use std::num::NonZeroU32;
use tracing::trace;

/// Immutable, multi-valued request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParameters {
    params: MultiValueMap,
}

impl PaginationParameters {
    /// Create a parameter bag from a multi-value map
    pub fn new(params: MultiValueMap) -> Self {
        Self { params }
    }

    /// Parse an `application/x-www-form-urlencoded` query string
    ///
    /// A leading `?` is ignored. Repeated keys accumulate their values in order.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Check whether a parameter is present, regardless of its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Check whether the bag holds no parameters at all
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Raw first value of a parameter
    pub fn first(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Convert the first value of a parameter
    ///
    /// Returns `default` when the key is missing, has no values, or when
    /// `convert` fails.
    pub fn get_value<T, E, F>(&self, key: &str, convert: F, default: T) -> T
    where
        E: Display,
        F: FnOnce(&str) -> std::result::Result<T, E>,
    {
        let Some(value) = self.first(key) else {
            return default;
        };

        match convert(value) {
            Ok(converted) => converted,
            Err(e) => {
                trace!("Ignoring parameter '{}'='{}': {}", key, value, e);
                default
            }
        }
    }

    /// Convert all values of a parameter
    ///
    /// Returns an empty vector when the key is missing or when any value fails
    /// to convert.
    pub fn get_values<T, E, F>(&self, key: &str, mut convert: F) -> Vec<T>
    where
        E: Display,
        F: FnMut(&str) -> std::result::Result<T, E>,
    {
        let Some(values) = self.params.get(key) else {
            return Vec::new();
        };

        match values
            .iter()
            .map(|v| convert(v.as_str()))
            .collect::<std::result::Result<Vec<T>, E>>()
        {
            Ok(converted) => converted,
            Err(e) => {
                trace!("Ignoring parameter '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    /// Read a positive integer, falling back to `default`
    ///
    /// Zero is rejected like any other malformed value.
    pub fn get_integer(&self, key: &str, default: Option<u32>) -> Option<u32> {
        self.get_value(
            key,
            |v| v.parse::<NonZeroU32>().map(|n| Some(n.get())),
            default,
        )
    }

    /// Read a non-negative base-10 integer, falling back to `default`
    pub fn get_long(&self, key: &str, default: u64) -> u64 {
        self.get_value(key, str::parse::<u64>, default)
    }
}

impl From<MultiValueMap> for PaginationParameters {
    fn from(params: MultiValueMap) -> Self {
        Self::new(params)
    }
}

/// Re-encode a pagination's wire parameters into a bag
///
/// Arrays become multiple values; parameters without any value are dropped.
impl From<&ParameterMap> for PaginationParameters {
    fn from(parameters: &ParameterMap) -> Self {
        let params = parameters
            .iter()
            .map(|(k, v)| (k.clone(), query_values(v)))
            .filter(|(_, values)| !values.is_empty())
            .collect();
        Self { params }
    }
}

impl<K, V> FromIterator<(K, V)> for PaginationParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = MultiValueMap::new();
        for (k, v) in iter {
            params.entry(k.into()).or_default().push(v.into());
        }
        Self { params }
    }
}
