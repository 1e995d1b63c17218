//! Read-only coffee place query service.
//!
//! Layers follow a ports-and-adapters split: `domain` holds normalisation,
//! filtering and pagination policy; `inbound::http` parses requests and
//! renders envelopes; `outbound` provides in-memory and PostgreSQL stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
