//! In-process adapters that need no external infrastructure.

mod place_repository;

pub use place_repository::{FixtureLoadError, InMemoryPlaceRepository};
