//! Tests for place query-string validation.

use super::*;
use crate::domain::ErrorCode;
use rstest::rstest;
use serde_json::{Value, json};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn details(error: &Error) -> Vec<Value> {
    error
        .details()
        .and_then(Value::as_array)
        .cloned()
        .expect("details array")
}

fn rejected_fields(pairs: &[(&str, &str)]) -> Vec<String> {
    let error = parse_place_filter(&params(pairs)).expect_err("rejected");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    details(&error)
        .iter()
        .map(|d| d["field"].as_str().expect("field").to_owned())
        .collect()
}

#[rstest]
fn empty_query_yields_defaults() {
    let filter = parse_place_filter(&HashMap::new()).expect("valid");
    assert_eq!(filter, PlaceFilter::default());
    assert_eq!(filter.page.page(), 1);
    assert_eq!(filter.page.limit(), 10);
}

#[rstest]
fn full_query_is_parsed() {
    let filter = parse_place_filter(&params(&[
        ("city", "  Hà Nội "),
        ("minRating", "3.5"),
        ("openAfter", "08:00"),
        ("openBefore", "21:30"),
        ("tags", "WiFi, quiet,,wifi"),
        ("random", "false"),
        ("page", "3"),
        ("limit", "100"),
    ]))
    .expect("valid");

    assert_eq!(filter.city.as_deref(), Some("Hà Nội"));
    assert_eq!(filter.min_rating.map(MinRating::value), Some(3.5));
    assert_eq!(filter.open_after.map(|t| t.to_string()).as_deref(), Some("08:00"));
    assert_eq!(filter.open_before.map(|t| t.to_string()).as_deref(), Some("21:30"));
    assert_eq!(filter.tags, ["wifi", "quiet"]);
    assert!(!filter.random);
    assert_eq!((filter.page.page(), filter.page.limit()), (3, 100));
}

#[rstest]
#[case("city", "   ")]
#[case("tags", "")]
#[case("tags", " , ,")]
#[case("minRating", "")]
fn blank_values_mean_no_filter(#[case] key: &str, #[case] value: &str) {
    let filter = parse_place_filter(&params(&[(key, value)])).expect("valid");
    assert!(filter.city.is_none());
    assert!(filter.tags.is_empty());
    assert!(filter.min_rating.is_none());
}

#[rstest]
fn unknown_parameters_are_ignored() {
    let filter = parse_place_filter(&params(&[("sort", "distance"), ("lat", "10.7")]))
        .expect("valid");
    assert_eq!(filter, PlaceFilter::default());
}

#[rstest]
#[case("minRating", "abc", "invalid_number")]
#[case("minRating", "NaN", "invalid_number")]
#[case("minRating", "inf", "invalid_number")]
#[case("minRating", "5.5", "out_of_range")]
#[case("minRating", "-1", "out_of_range")]
#[case("openAfter", "25:00", "invalid_time")]
#[case("openAfter", "7:00", "invalid_time")]
#[case("openBefore", "12:60", "invalid_time")]
#[case("random", "yes", "invalid_boolean")]
#[case("random", "TRUE", "invalid_boolean")]
#[case("random", "1", "invalid_boolean")]
#[case("page", "0", "out_of_range")]
#[case("page", "two", "invalid_integer")]
#[case("page", "-1", "invalid_integer")]
#[case("page", "99999999999", "out_of_range")]
#[case("limit", "0", "out_of_range")]
#[case("limit", "101", "out_of_range")]
#[case("limit", "1.5", "invalid_integer")]
fn invalid_values_are_reported(#[case] key: &str, #[case] value: &str, #[case] code: &str) {
    let error = parse_place_filter(&params(&[(key, value)])).expect_err("rejected");
    let details = details(&error);
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], json!(key));
    assert_eq!(details[0]["code"], json!(code));
    assert_eq!(details[0]["value"], json!(value));
    assert!(details[0]["message"].as_str().is_some_and(|m| m.starts_with(key)));
}

#[rstest]
fn every_failing_field_is_reported() {
    let mut fields = rejected_fields(&[
        ("minRating", "9"),
        ("openAfter", "25:00"),
        ("openBefore", "noon"),
        ("random", "maybe"),
        ("page", "0"),
        ("limit", "500"),
        ("city", "Huế"),
    ]);
    fields.sort();
    assert_eq!(
        fields,
        ["limit", "minRating", "openAfter", "openBefore", "page", "random"]
    );
}

#[rstest]
fn random_true_sets_the_flag() {
    let filter = parse_place_filter(&params(&[("random", "true")])).expect("valid");
    assert!(filter.random);
}

#[rstest]
fn boundary_values_are_accepted() {
    let filter = parse_place_filter(&params(&[
        ("minRating", "0"),
        ("openAfter", "00:00"),
        ("openBefore", "23:59"),
        ("limit", "1"),
        ("page", "999999"),
    ]))
    .expect("valid");
    assert_eq!(filter.min_rating.map(MinRating::value), Some(0.0));
    assert_eq!(filter.page.limit(), 1);
    assert_eq!(filter.page.page(), 999_999);
}
