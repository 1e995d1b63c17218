//! Raw place records as stored by the ingestion pipeline.

use serde::Deserialize;

use super::ClockTime;

/// Read-only snapshot of one stored place.
///
/// Fields mirror the `places` table. Every column other than `id` is
/// optional because records arrive from OpenStreetMap with patchy coverage
/// and only some are enriched with third-party ratings. The query path never
/// mutates a record; [`super::normalize`] turns it into a [`super::Place`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceRecord {
    pub id: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub district: Option<String>,
    pub postcode: Option<String>,
    /// Raw OSM `opening_hours` text.
    pub opening_hours: Option<String>,
    pub open_time: Option<ClockTime>,
    pub close_time: Option<ClockTime>,
    pub wifi: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub takeaway: Option<bool>,
    pub wheelchair: Option<bool>,
    pub tags: Vec<String>,
    /// Completeness score on a 0 to 10 scale.
    pub quality_score: Option<i16>,
    pub verified: Option<bool>,
    /// Third-party rating on a 0 to 5 scale.
    pub google_rating: Option<f64>,
    pub google_review_count: Option<i32>,
    pub google_price_level: Option<i16>,
}

impl PlaceRecord {
    /// Record with only an identifier, handy as a builder seed.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
