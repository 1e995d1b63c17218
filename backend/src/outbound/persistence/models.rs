//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; they convert into
//! [`PlaceRecord`] at the adapter boundary.

use chrono::NaiveTime;
use diesel::prelude::*;

use crate::domain::places::{ClockTime, PlaceRecord};

use super::schema::places;

/// Row struct for reading from the places table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = places)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlaceRow {
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
    pub opening_hours: Option<String>,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub wifi: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub takeaway: Option<bool>,
    pub wheelchair: Option<bool>,
    pub tags: Vec<String>,
    pub quality_score: Option<i16>,
    pub verified: Option<bool>,
    pub google_rating: Option<f64>,
    pub google_review_count: Option<i32>,
    pub google_price_level: Option<i16>,
}

impl From<PlaceRow> for PlaceRecord {
    fn from(row: PlaceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
            latitude: row.latitude,
            longitude: row.longitude,
            phone: row.phone,
            website: row.website,
            email: row.email,
            street: row.street,
            house_number: row.house_number,
            district: row.district,
            postcode: row.postcode,
            opening_hours: row.opening_hours,
            open_time: row.open_time.map(ClockTime::from),
            close_time: row.close_time.map(ClockTime::from),
            wifi: row.wifi,
            outdoor_seating: row.outdoor_seating,
            takeaway: row.takeaway,
            wheelchair: row.wheelchair,
            tags: row.tags,
            quality_score: row.quality_score,
            verified: row.verified,
            google_rating: row.google_rating,
            google_review_count: row.google_review_count,
            google_price_level: row.google_price_level,
        }
    }
}
