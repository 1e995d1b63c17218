//! Typed place query produced by request validation.

use pagination::PageRequest;

use super::{ClockTime, MinRating};

/// Immutable description of which places a client asked for.
///
/// Inbound adapters build this after validating untrusted input; nothing
/// downstream ever sees raw query strings.
///
/// # Examples
/// ```
/// use backend::domain::places::PlaceFilter;
///
/// let filter = PlaceFilter::default().with_city("Hà Nội").with_tags(["wifi"]);
/// assert_eq!(filter.city.as_deref(), Some("Hà Nội"));
/// assert!(!filter.random);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    /// Case-insensitive city name, before alias resolution.
    pub city: Option<String>,
    pub min_rating: Option<MinRating>,
    /// Place must open at or before this time.
    pub open_after: Option<ClockTime>,
    /// Place must stay open until at least this time.
    pub open_before: Option<ClockTime>,
    /// Lower-case tags a place must all carry.
    pub tags: Vec<String>,
    /// Return a single uniformly chosen match instead of a page.
    pub random: bool,
    pub page: PageRequest,
}

impl PlaceFilter {
    /// Restrict to one city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Require every tag in `tags`.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = tags.into_iter().collect();
        self.tags = super::normalize_tags(&raw);
        self
    }

    #[must_use]
    pub fn with_min_rating(mut self, min_rating: MinRating) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn randomised(mut self) -> Self {
        self.random = true;
        self
    }
}
