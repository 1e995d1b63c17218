//! In-process place repository.
//!
//! Holds an immutable snapshot of records, kept in listing order, and
//! evaluates predicates directly. Used when no database is configured and as
//! the reference store in tests.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use pagination::PageRequest;
use rand::seq::IteratorRandom;
use thiserror::Error;

use crate::domain::places::{PlaceRecord, PredicateSet, listing_order};
use crate::domain::ports::{PlaceRepository, PlaceRepositoryError};

/// Errors raised while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureLoadError {
    /// File could not be opened or read.
    #[error("failed to read place fixtures at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File was not a JSON array of place records.
    #[error("failed to parse place fixtures at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Repository over an immutable in-memory record set.
///
/// # Examples
/// ```
/// use backend::domain::places::PlaceRecord;
/// use backend::outbound::in_memory::InMemoryPlaceRepository;
///
/// let repo = InMemoryPlaceRepository::new(vec![PlaceRecord::with_id("a")]);
/// assert_eq!(repo.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlaceRepository {
    records: Vec<PlaceRecord>,
}

impl InMemoryPlaceRepository {
    pub fn new(mut records: Vec<PlaceRecord>) -> Self {
        records.sort_by(listing_order);
        Self { records }
    }

    /// Load records from a JSON array of camelCase place records.
    pub fn from_json_file(path: &Path) -> Result<Self, FixtureLoadError> {
        let read_err = |source| FixtureLoadError::Read {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "fixture path has no file name",
            ))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_err)?;
        let raw = dir.read_to_string(file_name).map_err(read_err)?;
        Self::from_json_str(&raw).map_err(|source| FixtureLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse records from a JSON array.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<PlaceRecord> = serde_json::from_str(raw)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching<'a>(
        &'a self,
        filter: &'a PredicateSet,
    ) -> impl Iterator<Item = &'a PlaceRecord> + 'a {
        self.records.iter().filter(move |record| filter.matches(record))
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn count(&self, filter: &PredicateSet) -> Result<u64, PlaceRepositoryError> {
        Ok(self.matching(filter).count() as u64)
    }

    async fn fetch_page(
        &self,
        filter: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<PlaceRecord>, PlaceRepositoryError> {
        Ok(page.slice(self.matching(filter).cloned()))
    }

    async fn fetch_random(
        &self,
        filter: &PredicateSet,
    ) -> Result<Option<PlaceRecord>, PlaceRepositoryError> {
        let mut rng = rand::thread_rng();
        Ok(self.matching(filter).choose(&mut rng).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PlaceRecord>, PlaceRepositoryError> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }
}

#[cfg(test)]
#[path = "place_repository_tests.rs"]
mod tests;
