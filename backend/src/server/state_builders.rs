//! Builds the place query port from the configured place source.

use std::sync::Arc;

use tracing::{info, warn};

use backend::domain::ports::PlaceQuery;
use backend::domain::{PlaceQueryService, StaticCityAliases};
use backend::outbound::in_memory::InMemoryPlaceRepository;
use backend::outbound::persistence::DieselPlaceRepository;

use super::config::PlaceSource;

/// Wire a [`PlaceQueryService`] over the repository `source` selects.
///
/// # Errors
/// Returns [`std::io::Error`] when a configured fixture file cannot be
/// loaded, so a typo in the path fails startup instead of serving nothing.
pub(crate) fn build_place_query(source: PlaceSource) -> std::io::Result<Arc<dyn PlaceQuery>> {
    let aliases = Arc::new(StaticCityAliases::new());
    let port: Arc<dyn PlaceQuery> = match source {
        PlaceSource::Database(pool) => {
            info!("serving places from PostgreSQL");
            Arc::new(PlaceQueryService::new(
                Arc::new(DieselPlaceRepository::new(pool)),
                aliases,
            ))
        }
        PlaceSource::Fixture(path) => {
            let repository = InMemoryPlaceRepository::from_json_file(&path)
                .map_err(std::io::Error::other)?;
            info!(path = %path.display(), places = repository.len(), "serving places from fixture file");
            Arc::new(PlaceQueryService::new(Arc::new(repository), aliases))
        }
        PlaceSource::Empty => {
            warn!("no place source configured; serving an empty catalogue");
            Arc::new(PlaceQueryService::new(
                Arc::new(InMemoryPlaceRepository::default()),
                aliases,
            ))
        }
    };
    Ok(port)
}
