//! Query-string validation for place listings.
//!
//! This is the only place raw strings become a [`PlaceFilter`]. Every field
//! is checked independently so a single `400` lists all problems. Unknown
//! parameters are ignored and blank values count as absent.

use std::collections::HashMap;

use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest};

use super::validation::{
    FieldError, FieldName, invalid_boolean, invalid_fields, invalid_integer, invalid_number,
    invalid_time, out_of_range,
};
use crate::domain::Error;
use crate::domain::places::{ClockTime, MinRating, MinRatingError, PlaceFilter};

const CITY: FieldName = FieldName::new("city");
const MIN_RATING: FieldName = FieldName::new("minRating");
const OPEN_AFTER: FieldName = FieldName::new("openAfter");
const OPEN_BEFORE: FieldName = FieldName::new("openBefore");
const TAGS: FieldName = FieldName::new("tags");
const RANDOM: FieldName = FieldName::new("random");
const PAGE: FieldName = FieldName::new("page");
const LIMIT: FieldName = FieldName::new("limit");

struct RawParams<'a>(&'a HashMap<String, String>);

impl RawParams<'_> {
    fn get(&self, field: FieldName) -> Option<&str> {
        self.0
            .get(field.as_str())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Validate a raw query map into a [`PlaceFilter`].
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use backend::inbound::http::place_params::parse_place_filter;
///
/// let params = HashMap::from([("minRating".to_owned(), "4".to_owned())]);
/// let filter = parse_place_filter(&params).expect("valid parameters");
/// assert_eq!(filter.min_rating.map(|r| r.value()), Some(4.0));
/// ```
pub fn parse_place_filter(params: &HashMap<String, String>) -> Result<PlaceFilter, Error> {
    let raw = RawParams(params);
    let mut errors = Vec::new();

    let min_rating = collect(&mut errors, raw.get(MIN_RATING).map(parse_min_rating));
    let open_after = collect(
        &mut errors,
        raw.get(OPEN_AFTER).map(|value| parse_time(OPEN_AFTER, value)),
    );
    let open_before = collect(
        &mut errors,
        raw.get(OPEN_BEFORE).map(|value| parse_time(OPEN_BEFORE, value)),
    );
    let random = collect(&mut errors, raw.get(RANDOM).map(parse_random)).unwrap_or(false);
    let page = collect(
        &mut errors,
        raw.get(PAGE).map(|value| parse_bounded(PAGE, value, 1, u32::MAX, "at least 1")),
    )
    .unwrap_or(DEFAULT_PAGE);
    let limit_bounds = format!("between 1 and {MAX_LIMIT}");
    let limit = collect(
        &mut errors,
        raw.get(LIMIT)
            .map(|value| parse_bounded(LIMIT, value, 1, MAX_LIMIT, &limit_bounds)),
    )
    .unwrap_or(DEFAULT_LIMIT);

    if !errors.is_empty() {
        return Err(invalid_fields(errors));
    }

    let page = PageRequest::new(page, limit).map_err(|err| {
        Error::internal(format!("validated page bounds rejected: {err}"))
    })?;
    let tags: Vec<&str> = raw
        .get(TAGS)
        .map(|value| value.split(',').collect())
        .unwrap_or_default();

    let mut filter = PlaceFilter {
        min_rating,
        open_after,
        open_before,
        random,
        ..PlaceFilter::default()
    }
    .with_page(page)
    .with_tags(tags);
    if let Some(city) = raw.get(CITY) {
        filter = filter.with_city(city);
    }
    Ok(filter)
}

fn collect<T>(errors: &mut Vec<FieldError>, parsed: Option<Result<T, FieldError>>) -> Option<T> {
    match parsed? {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn parse_min_rating(value: &str) -> Result<MinRating, FieldError> {
    let number: f64 = value
        .parse()
        .map_err(|_| invalid_number(MIN_RATING, value))?;
    MinRating::new(number).map_err(|err| match err {
        MinRatingError::NotFinite => invalid_number(MIN_RATING, value),
        MinRatingError::OutOfRange(_) => out_of_range(MIN_RATING, value, "between 0 and 5"),
    })
}

fn parse_time(field: FieldName, value: &str) -> Result<ClockTime, FieldError> {
    value
        .parse::<ClockTime>()
        .map_err(|_| invalid_time(field, value))
}

fn parse_random(value: &str) -> Result<bool, FieldError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid_boolean(RANDOM, value)),
    }
}

fn parse_bounded(
    field: FieldName,
    value: &str,
    min: u32,
    max: u32,
    bounds: &str,
) -> Result<u32, FieldError> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_integer(field, value));
    }
    // All digits but too large for u32 is a range problem, not a format one.
    let number: u32 = value.parse().map_err(|_| out_of_range(field, value, bounds))?;
    if (min..=max).contains(&number) {
        Ok(number)
    } else {
        Err(out_of_range(field, value, bounds))
    }
}

#[cfg(test)]
#[path = "place_params_tests.rs"]
mod tests;
