//! Record normalisation: [`PlaceRecord`] to [`Place`].
//!
//! | source                                   | output              | default         | included when            |
//! |------------------------------------------|---------------------|-----------------|--------------------------|
//! | `id`                                     | `id`                | none            | always                   |
//! | `name`                                   | `name`              | `Unnamed place` | always                   |
//! | `city`                                   | `city`              | `Unknown`       | always                   |
//! | `google_rating`, `quality_score`         | `rating`            | `0`             | always, see [`effective_rating`] |
//! | `open_time`, `close_time`                | `openHours`         | `07:00`–`22:00` | always                   |
//! | `tags`                                   | `tags`              | `[]`            | always                   |
//! | `latitude`, `longitude`                  | `location`          | omitted         | both finite              |
//! | `phone`, `website`, `email`              | `contact`           | omitted         | any member non-blank     |
//! | `street`, `house_number`, `district`, `postcode` | `address`   | omitted         | any member non-blank     |
//! | `opening_hours`                          | `openingHours`      | omitted         | non-blank                |
//! | `wifi`, `outdoor_seating`, `takeaway`, `wheelchair` | `amenities` | omitted     | any member present       |
//! | `quality_score`                          | `qualityScore`      | omitted         | present                  |
//! | `verified`                               | `verified`          | omitted         | present                  |
//! | `google_rating`                          | `googleRating`      | omitted         | finite                   |
//! | `google_review_count`                    | `googleReviewCount` | omitted         | present                  |
//! | `google_price_level`                     | `priceLevel`        | omitted         | present                  |

use super::{
    Address, Amenities, ClockTime, Contact, Location, OpenHours, Place, PlaceRecord,
    effective_rating,
};

/// Name shown for places without one.
pub const UNNAMED_PLACE: &str = "Unnamed place";

/// City shown, and matched by filters, for places without one.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Map a stored record to its canonical form. Pure and infallible.
///
/// # Examples
/// ```
/// use backend::domain::places::{normalize, PlaceRecord};
///
/// let place = normalize(&PlaceRecord::with_id("osm:1"));
/// assert_eq!(place.name, "Unnamed place");
/// assert_eq!(place.city, "Unknown");
/// assert_eq!(place.rating, 0.0);
/// assert!(place.contact.is_none());
/// ```
pub fn normalize(record: &PlaceRecord) -> Place {
    Place {
        id: record.id.clone(),
        name: text(&record.name).unwrap_or_else(|| UNNAMED_PLACE.to_owned()),
        city: text(&record.city).unwrap_or_else(|| UNKNOWN_CITY.to_owned()),
        rating: effective_rating(record),
        open_hours: OpenHours {
            start: record.open_time.unwrap_or(ClockTime::DEFAULT_OPENING),
            end: record.close_time.unwrap_or(ClockTime::DEFAULT_CLOSING),
        },
        tags: normalize_tags(&record.tags),
        location: match (record.latitude, record.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Location { lat, lng })
            }
            _ => None,
        },
        contact: non_empty(Contact {
            phone: text(&record.phone),
            website: text(&record.website),
            email: text(&record.email),
        }),
        address: non_empty(Address {
            street: text(&record.street),
            house_number: text(&record.house_number),
            district: text(&record.district),
            postcode: text(&record.postcode),
        }),
        opening_hours: text(&record.opening_hours),
        amenities: non_empty(Amenities {
            wifi: record.wifi,
            outdoor_seating: record.outdoor_seating,
            takeaway: record.takeaway,
            wheelchair: record.wheelchair,
        }),
        quality_score: record.quality_score,
        verified: record.verified,
        google_rating: record.google_rating.filter(|rating| rating.is_finite()),
        google_review_count: record.google_review_count,
        price_level: record.google_price_level,
    }
}

/// Lower-case, trim, drop blanks, and remove duplicates keeping first sight.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn non_empty<T: Default + PartialEq>(group: T) -> Option<T> {
    (group != T::default()).then_some(group)
}

#[cfg(test)]
mod tests {
    //! Field-table coverage for the normaliser.

    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn bare() -> PlaceRecord {
        PlaceRecord::with_id("osm:42")
    }

    fn to_json(record: &PlaceRecord) -> Value {
        serde_json::to_value(normalize(record)).expect("place serialises")
    }

    #[rstest]
    fn bare_record_gets_defaults_and_no_optional_keys(bare: PlaceRecord) {
        assert_eq!(
            to_json(&bare),
            json!({
                "id": "osm:42",
                "name": "Unnamed place",
                "city": "Unknown",
                "rating": 0.0,
                "openHours": { "start": "07:00", "end": "22:00" },
                "tags": []
            })
        );
    }

    #[rstest]
    fn blank_strings_count_as_absent(bare: PlaceRecord) {
        let record = PlaceRecord {
            name: Some("   ".into()),
            city: Some(String::new()),
            phone: Some(" ".into()),
            opening_hours: Some(String::new()),
            ..bare
        };
        let place = normalize(&record);
        assert_eq!(place.name, UNNAMED_PLACE);
        assert_eq!(place.city, UNKNOWN_CITY);
        assert!(place.contact.is_none());
        assert!(place.opening_hours.is_none());
    }

    #[rstest]
    fn groups_appear_with_only_populated_members(bare: PlaceRecord) {
        let record = PlaceRecord {
            website: Some("https://example.vn".into()),
            district: Some("Quận 1".into()),
            wifi: Some(true),
            ..bare
        };
        let json = to_json(&record);
        assert_eq!(json["contact"], json!({ "website": "https://example.vn" }));
        assert_eq!(json["address"], json!({ "district": "Quận 1" }));
        assert_eq!(json["amenities"], json!({ "wifi": true }));
    }

    #[rstest]
    fn false_amenity_is_still_reported(bare: PlaceRecord) {
        let record = PlaceRecord {
            takeaway: Some(false),
            ..bare
        };
        assert_eq!(to_json(&record)["amenities"], json!({ "takeaway": false }));
    }

    #[rstest]
    fn location_requires_both_coordinates(bare: PlaceRecord) {
        let half = PlaceRecord {
            latitude: Some(10.77),
            ..bare.clone()
        };
        assert!(normalize(&half).location.is_none());

        let full = PlaceRecord {
            latitude: Some(10.77),
            longitude: Some(106.70),
            ..bare
        };
        assert_eq!(
            normalize(&full).location,
            Some(Location { lat: 10.77, lng: 106.70 })
        );
    }

    #[rstest]
    fn enrichment_fields_are_surfaced(bare: PlaceRecord) {
        let record = PlaceRecord {
            quality_score: Some(7),
            verified: Some(true),
            google_rating: Some(4.4),
            google_review_count: Some(120),
            google_price_level: Some(2),
            ..bare
        };
        let json = to_json(&record);
        assert_eq!(json["rating"], json!(4.4));
        assert_eq!(json["qualityScore"], json!(7));
        assert_eq!(json["verified"], json!(true));
        assert_eq!(json["googleRating"], json!(4.4));
        assert_eq!(json["googleReviewCount"], json!(120));
        assert_eq!(json["priceLevel"], json!(2));
    }

    #[rstest]
    fn stored_hours_override_defaults(bare: PlaceRecord) {
        let record = PlaceRecord {
            open_time: Some("06:30".parse().expect("valid")),
            ..bare
        };
        let hours = normalize(&record).open_hours;
        assert_eq!(hours.start.to_string(), "06:30");
        assert_eq!(hours.end, ClockTime::DEFAULT_CLOSING);
    }

    #[rstest]
    #[case(&["WiFi", "wifi", " Quiet ", "", "quiet", "laptop"], &["wifi", "quiet", "laptop"])]
    #[case(&[], &[])]
    fn tags_are_lowercased_and_deduplicated(#[case] raw: &[&str], #[case] expected: &[&str]) {
        assert_eq!(normalize_tags(raw), expected);
    }
}
