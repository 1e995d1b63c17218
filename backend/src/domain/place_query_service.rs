//! Place query service implementing the [`PlaceQuery`] driving port.
//!
//! Compiles the validated filter once, runs the count and page fetch (or the
//! random pick) against the repository with the same predicate set, then
//! normalises each record and applies display city names.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageMeta, Paginated};
use tracing::{debug, error};

use crate::domain::places::{Place, PlaceFilter, PlaceRecord, PredicateSet, normalize};
use crate::domain::ports::{PlaceQuery, PlaceRepository, PlaceRepositoryError};
use crate::domain::{CityAliases, Error};

/// Place query service backed by a [`PlaceRepository`].
#[derive(Clone)]
pub struct PlaceQueryService<R> {
    repository: Arc<R>,
    aliases: Arc<dyn CityAliases>,
}

impl<R> PlaceQueryService<R> {
    /// Create a service over `repository`, resolving cities through `aliases`.
    pub fn new(repository: Arc<R>, aliases: Arc<dyn CityAliases>) -> Self {
        Self {
            repository,
            aliases,
        }
    }

    fn present(&self, record: &PlaceRecord) -> Place {
        let mut place = normalize(record);
        place.city = self.aliases.display_name(&place.city);
        place
    }
}

fn map_repository_error(error: PlaceRepositoryError) -> Error {
    error!(error = %error, "place repository failure");
    match error {
        PlaceRepositoryError::Connection { message } => {
            Error::internal(format!("place repository unavailable: {message}"))
        }
        PlaceRepositoryError::Query { message } => {
            Error::internal(format!("place repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> PlaceQuery for PlaceQueryService<R>
where
    R: PlaceRepository,
{
    async fn list_places(&self, filter: PlaceFilter) -> Result<Paginated<Place>, Error> {
        let predicates = PredicateSet::compile(&filter, self.aliases.as_ref());
        debug!(predicates = ?predicates, random = filter.random, "listing places");

        if filter.random {
            let record = self
                .repository
                .fetch_random(&predicates)
                .await
                .map_err(map_repository_error)?
                .ok_or_else(|| Error::not_found("no places match the supplied filters"))?;
            return Ok(Paginated::single(self.present(&record)));
        }

        let total = self
            .repository
            .count(&predicates)
            .await
            .map_err(map_repository_error)?;
        let meta = PageMeta::for_request(total, filter.page);
        if filter.page.offset() >= total {
            return Ok(Paginated::new(meta, Vec::new()));
        }

        let records = self
            .repository
            .fetch_page(&predicates, filter.page)
            .await
            .map_err(map_repository_error)?;
        let data = records.iter().map(|record| self.present(record)).collect();
        Ok(Paginated::new(meta, data))
    }

    async fn get_place(&self, id: &str) -> Result<Place, Error> {
        let record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("place {id} not found")))?;
        Ok(self.present(&record))
    }
}

#[cfg(test)]
#[path = "place_query_service_tests.rs"]
mod tests;
