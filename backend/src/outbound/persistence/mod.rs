//! PostgreSQL persistence adapters using Diesel.
//!
//! Thin adapters translating between Diesel rows and domain types; no
//! business logic lives here. Row structs (`models`) and table definitions
//! (`schema`) are internal and never cross the domain boundary. Connections
//! come from a `bb8` pool over `diesel-async`, and every database failure
//! is mapped to the owning port's error type.

pub(crate) mod diesel_helpers;
mod diesel_item_repository;
mod diesel_point_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_point_repository::DieselPointRepository;
pub use migrations::{run_migrations, MigrationError, MIGRATIONS};
pub use pool::{DbPool, PoolConfig, PoolError};
