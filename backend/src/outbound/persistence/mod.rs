//! PostgreSQL place store using Diesel with `diesel-async` and `bb8`.
//!
//! The adapter only translates between Diesel rows and domain records and
//! renders predicates into SQL. Row structs (`models.rs`) and the table
//! definition (`schema.rs`) stay private to this module.
//!
//! ```no_run
//! # async fn wire() -> Result<(), backend::outbound::persistence::PoolError> {
//! use backend::outbound::persistence::{DbPool, DieselPlaceRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/places")).await?;
//! let repository = DieselPlaceRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

pub(crate) mod diesel_helpers;
mod diesel_place_repository;
mod models;
mod pool;
mod schema;

pub use diesel_place_repository::DieselPlaceRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
