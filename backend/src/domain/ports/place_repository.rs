//! Read port over stored place records.
use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::places::{PlaceRecord, PredicateSet};

use super::define_port_error;

define_port_error! {
    /// Errors raised by place repository adapters.
    pub enum PlaceRepositoryError {
        /// Store could not be reached or a pooled connection was unavailable.
        Connection { message: String } => "place repository connection failed: {message}",
        /// Query failed during execution or returned undecodable rows.
        Query { message: String } => "place repository query failed: {message}",
    }
}

/// Port for reading place records filtered by a [`PredicateSet`].
///
/// Every method treats the predicate set as a conjunction. Adapters must
/// return records from [`Self::fetch_page`] in
/// [`listing_order`](crate::domain::places::listing_order).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Number of records matching `filter`.
    async fn count(&self, filter: &PredicateSet) -> Result<u64, PlaceRepositoryError>;

    /// One ordered page of matching records.
    async fn fetch_page(
        &self,
        filter: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<PlaceRecord>, PlaceRepositoryError>;

    /// One matching record chosen uniformly at random, or `None` if nothing matches.
    async fn fetch_random(
        &self,
        filter: &PredicateSet,
    ) -> Result<Option<PlaceRecord>, PlaceRepositoryError>;

    /// Record with the given identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<PlaceRecord>, PlaceRepositoryError>;
}
