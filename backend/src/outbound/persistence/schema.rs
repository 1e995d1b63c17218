//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after editing a migration, then restore `tags -> Array<Text>`; the column
//! is `NOT NULL` with non-null elements enforced by a check constraint.

diesel::table! {
    /// Coffee places written by the ingestion pipeline. Read-only here.
    places (id) {
        /// Source-qualified identifier, e.g. `osm:node:123`.
        id -> Text,
        name -> Nullable<Text>,
        city -> Nullable<Text>,
        latitude -> Nullable<Float8>,
        longitude -> Nullable<Float8>,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        email -> Nullable<Text>,
        street -> Nullable<Text>,
        house_number -> Nullable<Text>,
        district -> Nullable<Text>,
        postcode -> Nullable<Text>,
        /// Raw OSM `opening_hours` value.
        opening_hours -> Nullable<Text>,
        open_time -> Nullable<Time>,
        close_time -> Nullable<Time>,
        wifi -> Nullable<Bool>,
        outdoor_seating -> Nullable<Bool>,
        takeaway -> Nullable<Bool>,
        wheelchair -> Nullable<Bool>,
        /// Lower-case labels.
        tags -> Array<Text>,
        /// Completeness score, 0 to 10.
        quality_score -> Nullable<Int2>,
        verified -> Nullable<Bool>,
        google_rating -> Nullable<Float8>,
        google_review_count -> Nullable<Int4>,
        google_price_level -> Nullable<Int2>,
    }
}
