//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain
//! type's name via `#[schema(as = ...)]`.

#![expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]

use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by the place listing endpoints.
#[derive(IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PlaceListParams {
    /// City name or alias, matched case-insensitively.
    #[param(example = "Hà Nội")]
    city: Option<String>,
    /// Minimum rating between 0 and 5.
    #[param(example = 4.0, minimum = 0, maximum = 5)]
    min_rating: Option<f64>,
    /// Only places opening at or before this time (`HH:mm`).
    #[param(example = "08:00")]
    open_after: Option<String>,
    /// Only places open until at least this time (`HH:mm`).
    #[param(example = "21:00")]
    open_before: Option<String>,
    /// Comma-separated tags; every tag must be present.
    #[param(example = "wifi,quiet")]
    tags: Option<String>,
    /// `true` returns one uniformly random match.
    #[param(example = false)]
    random: Option<bool>,
    /// One-based page number, default 1.
    #[param(minimum = 1, example = 1)]
    page: Option<u32>,
    /// Page size between 1 and 100, default 10.
    #[param(minimum = 1, maximum = 100, example = 10)]
    limit: Option<u32>,
}

/// OpenAPI schema for [`crate::domain::places::OpenHours`].
#[derive(ToSchema)]
#[schema(as = crate::domain::places::OpenHours)]
pub struct OpenHoursSchema {
    #[schema(example = "07:00")]
    start: String,
    #[schema(example = "22:00")]
    end: String,
}

/// OpenAPI schema for [`crate::domain::places::Location`].
#[derive(ToSchema)]
#[schema(as = crate::domain::places::Location)]
pub struct LocationSchema {
    #[schema(example = 21.0285)]
    lat: f64,
    #[schema(example = 105.8542)]
    lng: f64,
}

/// OpenAPI schema for [`crate::domain::places::Contact`].
#[derive(ToSchema)]
#[schema(as = crate::domain::places::Contact)]
pub struct ContactSchema {
    phone: Option<String>,
    website: Option<String>,
    email: Option<String>,
}

/// OpenAPI schema for [`crate::domain::places::Address`].
#[derive(ToSchema)]
#[schema(as = crate::domain::places::Address)]
#[schema(rename_all = "camelCase")]
pub struct AddressSchema {
    street: Option<String>,
    house_number: Option<String>,
    district: Option<String>,
    postcode: Option<String>,
}

/// OpenAPI schema for [`crate::domain::places::Amenities`].
#[derive(ToSchema)]
#[schema(as = crate::domain::places::Amenities)]
#[schema(rename_all = "camelCase")]
pub struct AmenitiesSchema {
    wifi: Option<bool>,
    outdoor_seating: Option<bool>,
    takeaway: Option<bool>,
    wheelchair: Option<bool>,
}

/// OpenAPI schema for [`crate::domain::places::Place`].
///
/// Optional members are omitted, not `null`, when the source lacks them.
#[derive(ToSchema)]
#[schema(as = crate::domain::places::Place)]
#[schema(rename_all = "camelCase")]
pub struct PlaceSchema {
    #[schema(example = "osm:node:123456")]
    id: String,
    #[schema(example = "Cộng Cà Phê")]
    name: String,
    #[schema(example = "Hanoi")]
    city: String,
    /// Third-party rating, else completeness score halved, else 0.
    #[schema(example = 4.5, minimum = 0, maximum = 5)]
    rating: f64,
    open_hours: OpenHoursSchema,
    #[schema(example = json!(["wifi", "quiet"]))]
    tags: Vec<String>,
    location: Option<LocationSchema>,
    contact: Option<ContactSchema>,
    address: Option<AddressSchema>,
    /// Raw OpenStreetMap `opening_hours` text.
    opening_hours: Option<String>,
    amenities: Option<AmenitiesSchema>,
    /// Completeness score on a 0 to 10 scale.
    quality_score: Option<i16>,
    verified: Option<bool>,
    google_rating: Option<f64>,
    google_review_count: Option<i32>,
    price_level: Option<i16>,
}

/// OpenAPI schema for [`pagination::PageMeta`].
#[derive(ToSchema)]
#[schema(as = pagination::PageMeta)]
#[schema(rename_all = "camelCase")]
pub struct PageMetaSchema {
    /// Matches across all pages.
    #[schema(example = 42)]
    total: u64,
    #[schema(example = 1)]
    page: u32,
    /// Effective page size.
    #[schema(example = 10)]
    page_size: u32,
}

/// One page of places.
#[derive(ToSchema)]
pub struct PlacePageSchema {
    meta: PageMetaSchema,
    data: Vec<PlaceSchema>,
}

/// One entry of a validation error's `details`.
#[derive(ToSchema)]
pub struct FieldErrorSchema {
    #[schema(example = "openAfter")]
    field: String,
    #[schema(example = "invalid_time")]
    code: String,
    #[schema(example = "openAfter must be a time in HH:mm format")]
    message: String,
    #[schema(example = "25:00")]
    value: String,
}

/// Error envelope. `details` accompanies 400s, `message` accompanies 500s.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "Invalid query parameters")]
    error: String,
    message: Option<String>,
    details: Option<Vec<FieldErrorSchema>>,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn place_schema_uses_domain_name_and_camel_case() {
        // utoipa replaces :: with . in schema names
        assert_eq!(PlaceSchema::name(), "crate.domain.places.Place");
        let json = schema_to_json::<PlaceSchema>();
        assert!(json.contains("openHours"));
        assert!(json.contains("googleReviewCount"));
    }

    #[test]
    fn page_meta_schema_exposes_page_size() {
        assert!(schema_to_json::<PageMetaSchema>().contains("pageSize"));
    }

    #[test]
    fn error_schema_exposes_trace_id() {
        assert!(schema_to_json::<ErrorSchema>().contains("traceId"));
    }
}
