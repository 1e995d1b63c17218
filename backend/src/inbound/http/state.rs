//! Shared HTTP adapter state.
//!
//! Handlers take this via `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::PlaceQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub places: Arc<dyn PlaceQuery>,
}

impl HttpState {
    /// Construct state from a place query port.
    pub fn new(places: Arc<dyn PlaceQuery>) -> Self {
        Self { places }
    }
}
