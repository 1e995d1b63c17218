//! Adapters implementing the place repository port.
//!
//! - **in_memory**: snapshot loaded from a JSON fixture file
//! - **persistence**: PostgreSQL via Diesel
//!
//! Adapters translate storage rows into `PlaceRecord`s and render predicates;
//! normalisation and pagination policy live in the domain.

pub mod in_memory;
pub mod persistence;
