//! Driving port for place queries.
//!
//! Inbound adapters call this port with an already validated
//! [`PlaceFilter`] and receive normalised places ready to serialise.

use async_trait::async_trait;
use pagination::Paginated;

use crate::domain::Error;
use crate::domain::places::{Place, PlaceFilter};

/// Domain use-case port for reading places.
#[async_trait]
pub trait PlaceQuery: Send + Sync {
    /// A page of matching places, or one random match when `filter.random` is set.
    ///
    /// Random mode fails with [`crate::domain::ErrorCode::NotFound`] when
    /// nothing matches; paged mode returns an empty page instead.
    async fn list_places(&self, filter: PlaceFilter) -> Result<Paginated<Place>, Error>;

    /// A single place by identifier.
    async fn get_place(&self, id: &str) -> Result<Place, Error>;
}
