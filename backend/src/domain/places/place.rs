//! Canonical place representation returned to clients.
//!
//! Optional groups serialise only when populated; absent members are
//! omitted rather than rendered as `null`.

use serde::Serialize;

use super::ClockTime;

/// Daily opening window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenHours {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Default for OpenHours {
    fn default() -> Self {
        Self {
            start: ClockTime::DEFAULT_OPENING,
            end: ClockTime::DEFAULT_CLOSING,
        }
    }
}

/// WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdoor_seating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheelchair: Option<bool>,
}

/// Normalised coffee place.
///
/// ## Invariants
/// - `name` and `city` are never empty.
/// - `rating` lies in `[0, 5]`.
/// - `tags` are lower-case and unique, in source order.
/// - Optional groups are `Some` only when at least one member is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub city: String,
    pub rating: f64,
    pub open_hours: OpenHours,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Amenities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_review_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<i16>,
}
