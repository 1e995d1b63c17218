//! Domain primitives, ports and services.
//!
//! Purpose: model coffee places independently of transport and storage.
//! Inbound adapters hand the domain a validated [`places::PlaceFilter`];
//! outbound adapters implement [`ports::PlaceRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier.
//! - CityAliases / StaticCityAliases: city spelling resolution.
//! - PlaceQueryService: the [`ports::PlaceQuery`] implementation.

mod city_aliases;
pub mod error;
mod place_query_service;
pub mod places;
pub mod ports;
mod trace_id;

pub use self::city_aliases::{CityAliases, StaticCityAliases};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::place_query_service::PlaceQueryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

#[cfg(test)]
pub(crate) use self::city_aliases::MockCityAliases;
