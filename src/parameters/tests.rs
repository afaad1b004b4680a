//! Tests for the parameters module

use super::*;
use crate::types::{MultiValueMap, ParameterMap};
use serde_json::json;
use test_case::test_case;

fn bag(pairs: &[(&str, &str)]) -> PaginationParameters {
    pairs.iter().copied().collect()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_from_multi_value_map() {
    let mut map = MultiValueMap::new();
    map.insert("offset".to_string(), vec!["20".to_string()]);
    map.insert("limit".to_string(), vec!["10".to_string()]);

    let params = PaginationParameters::new(map);
    assert!(params.contains_key("offset"));
    assert!(params.contains_key("limit"));
    assert!(!params.contains_key("cursor"));
    assert!(!params.is_empty());
}

#[test]
fn test_from_query_string() {
    let params = PaginationParameters::from_query("?offset=20&limit=10&sort=name&sort=id");

    assert_eq!(params.first("offset"), Some("20"));
    assert_eq!(params.first("limit"), Some("10"));
    assert_eq!(
        params.get_values("sort", |v| Ok::<_, std::convert::Infallible>(v.to_string())),
        vec!["name".to_string(), "id".to_string()]
    );
}

#[test]
fn test_from_query_decodes_percent_encoding() {
    let params = PaginationParameters::from_query("cursor=a%2Bb&name=hello+world");
    assert_eq!(params.first("cursor"), Some("a+b"));
    assert_eq!(params.first("name"), Some("hello world"));
}

#[test]
fn test_from_empty_query() {
    let params = PaginationParameters::from_query("");
    assert!(params.is_empty());
    assert_eq!(params.keys().count(), 0);
}

#[test]
fn test_key_without_value_is_present() {
    let params = PaginationParameters::from_query("offset");
    assert!(params.contains_key("offset"));
    assert_eq!(params.first("offset"), Some(""));
    assert_eq!(params.get_long("offset", 7), 7);
}

#[test]
fn test_from_parameter_map() {
    let mut map = ParameterMap::new();
    map.insert("offset".to_string(), json!(40));
    map.insert("limit".to_string(), json!(20));
    map.insert("tags".to_string(), json!(["a", "b"]));
    map.insert("dropped".to_string(), json!(null));

    let params = PaginationParameters::from(&map);
    assert_eq!(params.get_long("offset", 0), 40);
    assert_eq!(params.get_integer("limit", None), Some(20));
    assert_eq!(
        params.get_values("tags", |v| Ok::<_, std::convert::Infallible>(v.to_string())),
        vec!["a".to_string(), "b".to_string()]
    );
    assert!(!params.contains_key("dropped"));
}

// ============================================================================
// Lenient Accessor Tests
// ============================================================================

#[test]
fn test_get_value_missing_key_returns_default() {
    let params = bag(&[]);
    assert_eq!(params.get_value("offset", str::parse::<i32>, -1), -1);
}

#[test]
fn test_get_value_uses_first_value() {
    let params = bag(&[("offset", "5"), ("offset", "9")]);
    assert_eq!(params.get_value("offset", str::parse::<i32>, 0), 5);
}

#[test]
fn test_get_value_conversion_failure_returns_default() {
    let params = bag(&[("offset", "abc")]);
    assert_eq!(params.get_value("offset", str::parse::<i32>, 3), 3);
}

#[test]
fn test_get_values_any_failure_returns_empty() {
    let params = bag(&[("ids", "1"), ("ids", "x"), ("ids", "3")]);
    assert!(params.get_values("ids", str::parse::<u32>).is_empty());

    let params = bag(&[("ids", "1"), ("ids", "2")]);
    assert_eq!(params.get_values("ids", str::parse::<u32>), vec![1, 2]);
}

#[test_case("20", 20 ; "plain number")]
#[test_case("0", 0 ; "zero")]
#[test_case("-5", 0 ; "negative falls back")]
#[test_case("abc", 0 ; "not a number")]
#[test_case("", 0 ; "empty value")]
#[test_case("1.5", 0 ; "fraction")]
#[test_case("99999999999999999999999", 0 ; "overflow")]
fn test_get_long(raw: &str, expected: u64) {
    let params = bag(&[("offset", raw)]);
    assert_eq!(params.get_long("offset", 0), expected);
}

#[test_case("10", Some(10) ; "plain number")]
#[test_case("0", None ; "zero is not a limit")]
#[test_case("-1", None ; "negative")]
#[test_case("ten", None ; "not a number")]
#[test_case("4294967296", None ; "overflow")]
fn test_get_integer(raw: &str, expected: Option<u32>) {
    let params = bag(&[("limit", raw)]);
    assert_eq!(params.get_integer("limit", None), expected);
}

#[test]
fn test_get_integer_falls_back_to_given_default() {
    let params = bag(&[("limit", "nope")]);
    assert_eq!(params.get_integer("limit", Some(25)), Some(25));
}
