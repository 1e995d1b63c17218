//! Storage-agnostic predicates compiled from a [`PlaceFilter`].
//!
//! Predicates are plain data. Each repository adapter renders a
//! [`PredicateSet`] into its own query language; the in-memory adapter uses
//! [`PredicateSet::matches`], which is also the reference semantics the SQL
//! rendering must agree with.

use super::{ClockTime, MinRating, PlaceFilter, PlaceRecord, UNKNOWN_CITY, normalize_tags};
use crate::domain::CityAliases;

/// One conjunct of a place query.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacePredicate {
    /// City equals this canonical name, ignoring case. Records without a
    /// city match [`UNKNOWN_CITY`].
    City(String),
    /// Effective rating is at least this value.
    MinRating(MinRating),
    /// Opening time, defaulted to 07:00, is at or before this time.
    OpensBy(ClockTime),
    /// Closing time, defaulted to 22:00, is at or after this time.
    OpenUntil(ClockTime),
    /// Stored tags include every listed tag.
    HasAllTags(Vec<String>),
}

impl PlacePredicate {
    /// Evaluate against a single record.
    pub fn matches(&self, record: &PlaceRecord) -> bool {
        match self {
            Self::City(city) => stored_city(record).to_lowercase() == city.to_lowercase(),
            Self::MinRating(min) => min.admits(record),
            Self::OpensBy(time) => record.open_time.unwrap_or(ClockTime::DEFAULT_OPENING) <= *time,
            Self::OpenUntil(time) => {
                record.close_time.unwrap_or(ClockTime::DEFAULT_CLOSING) >= *time
            }
            Self::HasAllTags(required) => {
                let stored = normalize_tags(&record.tags);
                required.iter().all(|tag| stored.contains(tag))
            }
        }
    }
}

/// City value a record is filtered and displayed under.
pub(crate) fn stored_city(record: &PlaceRecord) -> &str {
    record
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .unwrap_or(UNKNOWN_CITY)
}

/// Ordered conjunction of [`PlacePredicate`]s. Empty means "match all".
///
/// # Examples
/// ```
/// use backend::domain::places::{PlaceFilter, PlacePredicate, PredicateSet};
/// use backend::domain::StaticCityAliases;
///
/// let filter = PlaceFilter::default().with_city("saigon");
/// let set = PredicateSet::compile(&filter, &StaticCityAliases::new());
/// assert_eq!(
///     set.predicates(),
///     &[PlacePredicate::City("Hồ Chí Minh".into())]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet {
    predicates: Vec<PlacePredicate>,
}

impl PredicateSet {
    /// Compile `filter` into predicates, resolving the city through `aliases`.
    ///
    /// Filters that admit every record (blank city, zero rating, no tags)
    /// produce no predicate.
    pub fn compile(filter: &PlaceFilter, aliases: &dyn CityAliases) -> Self {
        let mut predicates = Vec::new();
        if let Some(city) = filter.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            predicates.push(PlacePredicate::City(aliases.canonical_name(city)));
        }
        if let Some(min) = filter.min_rating.filter(|min| !min.is_trivial()) {
            predicates.push(PlacePredicate::MinRating(min));
        }
        if let Some(time) = filter.open_after {
            predicates.push(PlacePredicate::OpensBy(time));
        }
        if let Some(time) = filter.open_before {
            predicates.push(PlacePredicate::OpenUntil(time));
        }
        if !filter.tags.is_empty() {
            predicates.push(PlacePredicate::HasAllTags(filter.tags.clone()));
        }
        Self { predicates }
    }

    pub fn predicates(&self) -> &[PlacePredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every predicate holds for `record`.
    pub fn matches(&self, record: &PlaceRecord) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(record))
    }
}

impl FromIterator<PlacePredicate> for PredicateSet {
    fn from_iter<T: IntoIterator<Item = PlacePredicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}
