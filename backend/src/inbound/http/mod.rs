//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod place_params;
pub mod places;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;
